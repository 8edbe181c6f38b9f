use actix_web::{web, HttpResponse};
use serde::Serialize;
use uuid::Uuid;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{ApiVersion, GamePath, ScorePath, ValidatedJson};
use crate::notify::{self, high_score_message};
use crate::services::{GameScore, ScoreService, ScoreSubmission, SubmitOutcome};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct GamerSummary {
    pub id: i64,
    pub gamer_guid: Uuid,
    pub nickname: String,
}

#[derive(Debug, Serialize)]
pub struct GameScoreResponse {
    pub id: i64,
    pub points: i64,
    pub game: String,
    pub gamer: GamerSummary,
}

impl From<GameScore> for GameScoreResponse {
    fn from(s: GameScore) -> Self {
        Self {
            id: s.id,
            points: s.points,
            game: s.game,
            gamer: GamerSummary {
                id: s.gamer_id,
                gamer_guid: s.gamer_guid,
                nickname: s.nickname,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeLabel {
    Created,
    Raised,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub outcome: OutcomeLabel,
    pub points: i64,
    pub game: String,
    pub nickname: String,
}

impl From<ScoreSubmission> for SubmitResponse {
    fn from(s: ScoreSubmission) -> Self {
        Self {
            outcome: match s.outcome {
                SubmitOutcome::Created => OutcomeLabel::Created,
                SubmitOutcome::Raised => OutcomeLabel::Raised,
            },
            points: s.points,
            game: s.game,
            nickname: s.nickname,
        }
    }
}

/// GET /scores/{game}
async fn scores_for_game(
    _version: ApiVersion,
    path: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let scores = ScoreService::new().scores_for_game(db, &path.game).await?;

    let body: Vec<GameScoreResponse> = scores.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /scores/{nickname}/{game} with a bare integer body
async fn submit_score(
    _version: ApiVersion,
    path: ScorePath,
    body: ValidatedJson<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let points = body.into_inner();
    let ScorePath { nickname, game } = path;

    let submission = with_txn(&app_state, |txn| {
        Box::pin(async move {
            ScoreService::new()
                .submit(txn, &nickname, &game, points)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    // Committed; the notification can no longer affect the outcome
    notify::dispatch(
        app_state.notifier.clone(),
        high_score_message(submission.points, &submission.game),
    );

    Ok(HttpResponse::Ok().json(SubmitResponse::from(submission)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/scores/{game}", web::get().to(scores_for_game))
        .route("/scores/{nickname}/{game}", web::post().to(submit_score));
}
