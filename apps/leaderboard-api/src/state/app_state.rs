use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::notify::{LogNotifier, Notifier};

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Receives one message per accepted high score
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            db: Some(db),
            notifier,
        }
    }

    /// State without a database; every data route answers 503
    pub fn without_db() -> Self {
        Self {
            db: None,
            notifier: Arc::new(LogNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
