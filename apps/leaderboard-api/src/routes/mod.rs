use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod health;
pub mod leaderboard;
pub mod scores;

/// Register every route on `cfg`. Shared by `main.rs` and the test app
/// builder so both serve the same surface.
///
/// The API lives under `/api` and again under `/api/v{version}`; the
/// [`ApiVersion`](crate::extractors::ApiVersion) extractor in each handler
/// rejects versions it does not know.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // Health check routes: /health/**
    cfg.service(web::scope("/health").configure(health::configure_routes));

    cfg.service(web::scope("/api/v{version}").configure(configure_api));
    cfg.service(web::scope("/api").configure(configure_api));
}

fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.configure(scores::configure_routes)
        .configure(leaderboard::configure_routes);
}

/// Fallback for unmatched paths, registered with `App::default_service`
pub async fn not_found() -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::NotFound, "No such route"))
}
