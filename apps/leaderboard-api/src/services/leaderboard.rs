use sea_orm::ConnectionTrait;

use crate::errors::domain::DomainError;
use crate::repos::scores;

/// (game, nickname, points) projection used by the leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScore {
    pub game: String,
    pub nickname: String,
    pub points: i64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LeaderboardService;

impl LeaderboardService {
    pub fn new() -> Self {
        Self
    }

    /// Scores joined to nicknames in insertion order. `None` or `Some(0)`
    /// returns every row.
    pub async fn high_scores<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        limit: Option<u64>,
    ) -> Result<Vec<HighScore>, DomainError> {
        let limit = limit.filter(|n| *n > 0);
        let rows = scores::all_with_gamers(conn, limit).await?;
        Ok(rows
            .into_iter()
            .map(|row| HighScore {
                game: row.score.game,
                nickname: row.gamer.nickname,
                points: row.score.points,
            })
            .collect())
    }
}
