//! Rows and collaborators for tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use backend_test_support::unique_helpers::unique_nickname;
use leaderboard_api::notify::{Notifier, NotifyError};
use leaderboard_api::repos::gamers::{self, Gamer};
use leaderboard_api::repos::scores::{self, Score};
use leaderboard_api::AppError;
use sea_orm::ConnectionTrait;

/// Insert a gamer with a unique nickname derived from `prefix`
pub async fn create_gamer(
    conn: &(impl ConnectionTrait + Send + Sync),
    prefix: &str,
) -> Result<Gamer, AppError> {
    Ok(gamers::create_gamer(conn, &unique_nickname(prefix)).await?)
}

pub async fn create_score(
    conn: &(impl ConnectionTrait + Send + Sync),
    gamer: &Gamer,
    game: &str,
    points: i64,
) -> Result<Score, AppError> {
    Ok(scores::create_score(conn, gamer.id, game, points).await?)
}

/// Records every message it is asked to send
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Dispatch is detached; poll briefly until `n` messages have arrived
    pub async fn wait_for(&self, n: usize) -> Vec<String> {
        for _ in 0..100 {
            let messages = self.messages();
            if messages.len() >= n {
                return messages;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.messages()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// Always fails, counting attempts
#[derive(Debug, Default)]
pub struct FailingNotifier {
    attempts: Mutex<usize>,
}

impl FailingNotifier {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _message: &str) -> Result<(), NotifyError> {
        *self.attempts.lock().unwrap() += 1;
        Err(NotifyError::Rejected { status: 500 })
    }
}

pub fn recording() -> Arc<RecordingNotifier> {
    Arc::new(RecordingNotifier::default())
}
