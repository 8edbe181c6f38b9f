use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Gamers {
    Table,
    Id,
    GamerGuid,
    Nickname,
    CreatedAt,
}

#[derive(Iden)]
enum Scores {
    Table,
    Id,
    GamerId,
    Game,
    Points,
    UpdatedAt,
}

/// Nicknames are unique regardless of case. sea-query has no builder for
/// expression indexes, and both Postgres and SQLite accept this statement.
const CREATE_NICKNAME_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS ux_gamers_nickname_lower ON gamers (lower(nickname))";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // gamers
        manager
            .create_table(
                Table::create()
                    .table(Gamers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gamers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Gamers::GamerGuid).string_len(36).not_null())
                    .col(ColumnDef::new(Gamers::Nickname).string_len(64).not_null())
                    .col(
                        ColumnDef::new(Gamers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_gamers_gamer_guid")
                    .table(Gamers::Table)
                    .col(Gamers::GamerGuid)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(CREATE_NICKNAME_INDEX)
            .await?;

        // scores
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scores::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Scores::GamerId).big_integer().not_null())
                    .col(ColumnDef::new(Scores::Game).string_len(128).not_null())
                    .col(ColumnDef::new(Scores::Points).big_integer().not_null())
                    .col(
                        ColumnDef::new(Scores::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scores_gamer_id")
                            .from(Scores::Table, Scores::GamerId)
                            .to(Gamers::Table, Gamers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_scores_gamer_game")
                    .table(Scores::Table)
                    .col(Scores::GamerId)
                    .col(Scores::Game)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_scores_game")
                    .table(Scores::Table)
                    .col(Scores::Game)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order; indexes go with their tables
        manager
            .drop_table(Table::drop().table(Scores::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Gamers::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
