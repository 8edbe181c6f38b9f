use std::sync::Arc;

use crate::config::db::{DbKind, RuntimeEnv};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::infra::seed::seed_if_empty;
use crate::notify::{LogNotifier, Notifier};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
    seed: bool,
    notifier: Arc<dyn Notifier>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            env: RuntimeEnv::Prod,
            db_kind: None,
            seed: false,
            notifier: Arc::new(LogNotifier),
        }
    }
    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }
    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let Some(kind) = self.db_kind else {
            return Ok(AppState::without_db().with_notifier(self.notifier));
        };

        // single entrypoint: connect + migrate
        let conn = bootstrap_db(self.env, kind).await?;
        if self.seed {
            seed_if_empty(&conn).await?;
        }
        Ok(AppState::new(conn, self.notifier))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
