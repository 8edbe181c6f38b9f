//! Scores repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::scores_sea as scores_adapter;
use crate::entities::{gamers, scores};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::gamers::Gamer;

/// Score domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub id: i64,
    pub gamer_id: i64,
    pub game: String,
    pub points: i64,
    pub updated_at: time::OffsetDateTime,
}

/// Score joined with the gamer that owns it
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreWithGamer {
    pub score: Score,
    pub gamer: Gamer,
}

/// Best score a gamer has for a game, if any
pub async fn find_top_for_gamer_and_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    gamer_id: i64,
    game: &str,
) -> Result<Option<Score>, DomainError> {
    let score = scores_adapter::find_top_for_gamer_and_game(conn, gamer_id, game).await?;
    Ok(score.map(Score::from))
}

pub async fn create_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    gamer_id: i64,
    game: &str,
    points: i64,
) -> Result<Score, DomainError> {
    let dto = scores_adapter::ScoreCreate {
        gamer_id,
        game: game.to_string(),
        points,
    };
    let score = scores_adapter::create_score(conn, dto).await?;
    Ok(Score::from(score))
}

/// Conditionally raise a score. `false` means the stored value was already
/// at least `points` when the write landed.
pub async fn raise_points<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    score_id: i64,
    points: i64,
) -> Result<bool, DomainError> {
    let rows = scores_adapter::raise_points(conn, score_id, points).await?;
    Ok(rows > 0)
}

/// Scores for one game (case-sensitive key), with owners, ordered by score id
pub async fn scores_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: &str,
) -> Result<Vec<ScoreWithGamer>, DomainError> {
    let rows = scores_adapter::find_by_game_with_gamer(conn, game).await?;
    rows.into_iter().map(join_row).collect()
}

/// All scores with owners, ordered by score id; `None` returns everything
pub async fn all_with_gamers<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: Option<u64>,
) -> Result<Vec<ScoreWithGamer>, DomainError> {
    let rows = scores_adapter::find_all_with_gamer(conn, limit).await?;
    rows.into_iter().map(join_row).collect()
}

fn join_row(
    (score, gamer): (scores::Model, Option<gamers::Model>),
) -> Result<ScoreWithGamer, DomainError> {
    // The FK makes an orphan impossible unless the store was edited by hand
    let gamer = gamer.ok_or_else(|| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Score {} references a missing gamer", score.id),
        )
    })?;
    Ok(ScoreWithGamer {
        score: Score::from(score),
        gamer: Gamer::try_from(gamer)?,
    })
}

// Conversions between SeaORM models and domain models

impl From<scores::Model> for Score {
    fn from(model: scores::Model) -> Self {
        Self {
            id: model.id,
            gamer_id: model.gamer_id,
            game: model.game,
            points: model.points,
            updated_at: model.updated_at,
        }
    }
}
