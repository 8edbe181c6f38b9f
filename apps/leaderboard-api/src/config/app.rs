//! Process configuration for the API binary, loaded from environment variables.

use std::env;

use crate::config::db::{db_kind_from_env, DbKind, RuntimeEnv};
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Database configuration
    pub runtime_env: RuntimeEnv,
    pub db_kind: DbKind,

    /// Insert the fixture gamers and scores when the store is empty
    pub seed_fixtures: bool,

    /// Webhook for high-score notifications; log-only when unset
    pub notify_webhook: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("LEADERBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_str = env::var("LEADERBOARD_PORT").unwrap_or_else(|_| "3001".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "LEADERBOARD_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        let seed_fixtures = env::var("LEADERBOARD_SEED_FIXTURES")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let notify_webhook = env::var("LEADERBOARD_NOTIFY_WEBHOOK")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Ok(Self {
            host,
            port,
            runtime_env: RuntimeEnv::Prod,
            db_kind: db_kind_from_env()?,
            seed_fixtures,
            notify_webhook,
        })
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
