//! SeaORM adapter for scores repository.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::{gamers, scores};

pub mod dto;

pub use dto::ScoreCreate;

/// Highest score a gamer holds for a game (exact, case-sensitive match on
/// the game key). The unique index keeps this to at most one row; the
/// ordering covers legacy data written before the index existed.
pub async fn find_top_for_gamer_and_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    gamer_id: i64,
    game: &str,
) -> Result<Option<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(scores::Column::GamerId.eq(gamer_id))
        .filter(scores::Column::Game.eq(game))
        .order_by(scores::Column::Points, Order::Desc)
        .one(conn)
        .await
}

/// Create a score record
pub async fn create_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ScoreCreate,
) -> Result<scores::Model, sea_orm::DbErr> {
    let score = scores::ActiveModel {
        id: sea_orm::NotSet,
        gamer_id: Set(dto.gamer_id),
        game: Set(dto.game),
        points: Set(dto.points),
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };

    score.insert(conn).await
}

/// Raise a score only if the stored value is still lower than `points`.
///
/// Returns the number of rows updated: 0 means another writer already
/// stored an equal or higher value.
pub async fn raise_points<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    score_id: i64,
    points: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = scores::Entity::update_many()
        .col_expr(scores::Column::Points, Expr::value(points))
        .col_expr(
            scores::Column::UpdatedAt,
            Expr::value(time::OffsetDateTime::now_utc()),
        )
        .filter(scores::Column::Id.eq(score_id))
        .filter(scores::Column::Points.lt(points))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// All scores for one game with their owning gamer, ordered by score id
pub async fn find_by_game_with_gamer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: &str,
) -> Result<Vec<(scores::Model, Option<gamers::Model>)>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(scores::Column::Game.eq(game))
        .find_also_related(gamers::Entity)
        .order_by(scores::Column::Id, Order::Asc)
        .all(conn)
        .await
}

/// Every score with its owning gamer, ordered by score id, optionally capped.
/// Drivers bind LIMIT as a signed 64-bit value, so larger caps are clamped.
pub async fn find_all_with_gamer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: Option<u64>,
) -> Result<Vec<(scores::Model, Option<gamers::Model>)>, sea_orm::DbErr> {
    scores::Entity::find()
        .find_also_related(gamers::Entity)
        .order_by(scores::Column::Id, Order::Asc)
        .limit(limit.map(|n| n.min(i64::MAX as u64)))
        .all(conn)
        .await
}
