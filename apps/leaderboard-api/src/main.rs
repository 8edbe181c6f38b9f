use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use leaderboard_api::config::app::Config;
use leaderboard_api::infra::state::build_state;
use leaderboard_api::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use leaderboard_api::notify::{LogNotifier, Notifier, WebhookNotifier};
use leaderboard_api::routes;
use leaderboard_api::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let notifier: Arc<dyn Notifier> = match &config.notify_webhook {
        Some(url) => match WebhookNotifier::new(url.clone()) {
            Ok(webhook) => Arc::new(webhook),
            Err(e) => {
                error!(error = %e, "failed to build webhook notifier");
                std::process::exit(1);
            }
        },
        None => Arc::new(LogNotifier),
    };

    let app_state = match build_state()
        .with_env(config.runtime_env)
        .with_db(config.db_kind)
        .with_seed(config.seed_fixtures)
        .with_notifier(notifier)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, db = ?config.db_kind, "leaderboard_api_starting");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
