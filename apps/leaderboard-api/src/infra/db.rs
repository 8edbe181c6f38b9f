use std::future::Future;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, DbOwner, RuntimeEnv};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

/// Get database engine name for logging
fn db_engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Pool settings per backend. An in-memory SQLite database lives inside a
/// single connection, so that pool is pinned to exactly one.
fn connect_options(url: String, kind: DbKind) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    match kind {
        DbKind::Postgres => {
            opts.max_connections(16).min_connections(1);
        }
        DbKind::SqliteFile => {
            opts.max_connections(4).min_connections(1);
        }
        DbKind::SqliteMemory => {
            opts.max_connections(1).min_connections(1);
        }
    }
    opts
}

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Open a pool for the given environment, backend and credentials.
/// This function does NOT run any migrations.
pub async fn connect_db(
    env: RuntimeEnv,
    kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(env, kind, owner)?;

    // In-memory SQLite cannot be "not up yet"; only networked/file stores get retries
    let attempts = match kind {
        DbKind::SqliteMemory => 1,
        _ => CONNECT_ATTEMPTS,
    };

    let conn = retry_connection(
        || {
            let opts = connect_options(url.clone(), kind);
            async move { Database::connect(opts).await.map_err(AppError::from) }
        },
        attempts,
        CONNECT_RETRY_INTERVAL_MS,
    )
    .await?;

    info!(engine = db_engine(kind), env = ?env, "database_connected");
    Ok(conn)
}

/// Single entrypoint for the app: connect, then bring the schema up to date.
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(env, kind, DbOwner::App).await?;
    migration::migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
