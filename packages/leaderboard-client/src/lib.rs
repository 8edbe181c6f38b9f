//! Typed HTTP client for the leaderboard API.
//!
//! Wraps the `/api` routes with retries for transient failures and decodes
//! problem-details bodies on error.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{LeaderboardClient, USER_AGENT};
pub use config::ClientConfig;
pub use error::ClientError;
pub use models::{GameScore, GamerSummary, HighScore, ProblemDetails};
