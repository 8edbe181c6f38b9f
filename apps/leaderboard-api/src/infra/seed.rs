//! Fixture data for demos and local runs.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::error::AppError;
use crate::repos::{gamers, scores};

/// (nickname, game, points), inserted in this order
pub const FIXTURES: &[(&str, &str, i64)] = &[
    ("LX360", "Pacman", 1337),
    ("LeekGeek", "Space Invaders", 6510),
];

/// Insert [`FIXTURES`] when the gamers table is empty. Returns whether
/// anything was written.
pub async fn seed_if_empty(conn: &DatabaseConnection) -> Result<bool, AppError> {
    if gamers::count(conn).await? > 0 {
        info!("seed_skipped=store_not_empty");
        return Ok(false);
    }

    let txn = conn.begin().await?;
    for (nickname, game, points) in FIXTURES {
        let gamer = gamers::create_gamer(&txn, nickname).await?;
        scores::create_score(&txn, gamer.id, game, *points).await?;
    }
    txn.commit().await?;

    info!(gamers = FIXTURES.len(), "seed_applied");
    Ok(true)
}
