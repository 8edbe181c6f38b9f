//! Score submission and per-game listing.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::upsert::{decide, validate_points, UpsertDecision};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, RejectionKind};
use crate::repos::{gamers, scores};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Raised,
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSubmission {
    pub outcome: SubmitOutcome,
    pub score_id: i64,
    /// Nickname as stored, which may differ in case from the request
    pub nickname: String,
    pub game: String,
    pub points: i64,
    pub previous: Option<i64>,
}

/// One row of `GET /scores/{game}`
#[derive(Debug, Clone, PartialEq)]
pub struct GameScore {
    pub id: i64,
    pub points: i64,
    pub game: String,
    pub gamer_id: i64,
    pub gamer_guid: Uuid,
    pub nickname: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreService;

impl ScoreService {
    pub fn new() -> Self {
        Self
    }

    /// Record `points` for the gamer on `game` if it is their best so far.
    ///
    /// Runs on the caller's connection or transaction; the caller commits.
    pub async fn submit<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        nickname: &str,
        game: &str,
        points: i64,
    ) -> Result<ScoreSubmission, DomainError> {
        validate_points(points)?;

        let gamer = gamers::find_by_nickname(conn, nickname)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Gamer,
                    format!("No gamer with nickname '{nickname}'"),
                )
            })?;

        let existing = scores::find_top_for_gamer_and_game(conn, gamer.id, game).await?;
        apply(conn, gamer, game, points, existing).await
    }

    /// All scores recorded for `game`, in insertion order
    pub async fn scores_for_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game: &str,
    ) -> Result<Vec<GameScore>, DomainError> {
        let rows = scores::scores_for_game(conn, game).await?;
        Ok(rows
            .into_iter()
            .map(|row| GameScore {
                id: row.score.id,
                points: row.score.points,
                game: row.score.game,
                gamer_id: row.gamer.id,
                gamer_guid: row.gamer.gamer_guid,
                nickname: row.gamer.nickname,
            })
            .collect())
    }
}

/// Carry out the decision for a stored score read earlier in the same
/// transaction. The raise is conditional, so a higher value written
/// concurrently since the read still wins.
async fn apply<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    gamer: gamers::Gamer,
    game: &str,
    points: i64,
    existing: Option<scores::Score>,
) -> Result<ScoreSubmission, DomainError> {
    let decision = decide(existing.as_ref().map(|s| s.points), points);
    debug!(gamer_id = gamer.id, game, ?decision, "score_decision");

    match (decision, existing) {
        (UpsertDecision::Insert, _) => {
            let score = scores::create_score(conn, gamer.id, game, points).await?;
            info!(gamer_id = gamer.id, score_id = score.id, game, points, "score_created");
            Ok(ScoreSubmission {
                outcome: SubmitOutcome::Created,
                score_id: score.id,
                nickname: gamer.nickname,
                game: score.game,
                points,
                previous: None,
            })
        }
        (UpsertDecision::Raise { from, to }, Some(score)) => {
            if !scores::raise_points(conn, score.id, to).await? {
                // A concurrent writer stored an equal or higher value first
                info!(gamer_id = gamer.id, score_id = score.id, game, points, "score_rejected");
                return Err(not_improved(points, game));
            }
            info!(
                gamer_id = gamer.id,
                score_id = score.id,
                game,
                from,
                to,
                "score_raised"
            );
            Ok(ScoreSubmission {
                outcome: SubmitOutcome::Raised,
                score_id: score.id,
                nickname: gamer.nickname,
                game: score.game,
                points: to,
                previous: Some(from),
            })
        }
        (UpsertDecision::Reject { current }, _) => {
            info!(gamer_id = gamer.id, game, points, current, "score_rejected");
            Err(not_improved(points, game))
        }
        // decide() only raises when a stored value was passed in
        (UpsertDecision::Raise { .. }, None) => Err(DomainError::infra(
            InfraErrorKind::Other("UpsertState".into()),
            "Raise decided without a stored score",
        )),
    }
}

fn not_improved(points: i64, game: &str) -> DomainError {
    DomainError::rejected(
        RejectionKind::ScoreNotImproved,
        format!("Score of {points} does not beat the existing score for '{game}'"),
    )
}
