//! SeaORM adapter for gamers repository.

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

use crate::entities::gamers;

pub mod dto;

pub use dto::GamerCreate;

/// Case-insensitive nickname lookup.
///
/// Both sides are folded by the database's `lower()`, the same function the
/// `ux_gamers_nickname_lower` index uses, so lookup and uniqueness agree.
/// Postgres folds Unicode and can serve this from that index; SQLite folds
/// ASCII only, so there `Ödön` and `ödön` are different nicknames.
pub async fn find_by_nickname<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    nickname: &str,
) -> Result<Option<gamers::Model>, sea_orm::DbErr> {
    gamers::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col(gamers::Column::Nickname)))
                .eq(Func::lower(Expr::val(nickname))),
        )
        .one(conn)
        .await
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    gamers::Entity::find().count(conn).await
}

pub async fn create_gamer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GamerCreate,
) -> Result<gamers::Model, sea_orm::DbErr> {
    let gamer = gamers::ActiveModel {
        id: sea_orm::NotSet,
        gamer_guid: Set(dto.gamer_guid),
        nickname: Set(dto.nickname),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    gamer.insert(conn).await
}
