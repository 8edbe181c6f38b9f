//! High-score notifications.
//!
//! Delivery is fire-and-forget: [`dispatch`] runs the send on a detached
//! task after the write has committed, and a failed send is only logged.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("notification endpoint answered {status}")]
    Rejected { status: u16 },
}

/// Something that can tell the outside world about a new high score.
#[async_trait]
pub trait Notifier: Send + Sync + Debug {
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

/// Writes the message to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        info!(notification = %message, "high_score_notification");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send(&self, _message: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    message: &'a str,
}

/// POSTs `{"message": ...}` to a fixed URL.
#[derive(Debug)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

pub fn high_score_message(points: i64, game: &str) -> String {
    format!("New high score of {points} for game '{game}'")
}

/// Send on a detached task. Errors are logged, never returned.
pub fn dispatch(notifier: Arc<dyn Notifier>, message: String) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = notifier.send(&message).await {
            warn!(error = %e, notification = %message, "notification_failed");
        }
    })
}
