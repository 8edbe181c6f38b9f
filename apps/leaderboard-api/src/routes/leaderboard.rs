use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{ApiVersion, Limit};
use crate::services::{HighScore, LeaderboardService};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct HighScoreResponse {
    pub game: String,
    pub nickname: String,
    pub points: i64,
}

impl From<HighScore> for HighScoreResponse {
    fn from(h: HighScore) -> Self {
        Self {
            game: h.game,
            nickname: h.nickname,
            points: h.points,
        }
    }
}

/// GET /leaderboard?limit=N
async fn high_scores(
    _version: ApiVersion,
    Limit(limit): Limit,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = LeaderboardService::new().high_scores(db, limit).await?;

    let body: Vec<HighScoreResponse> = rows.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/leaderboard", web::get().to(high_scores));
}
