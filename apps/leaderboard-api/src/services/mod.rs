//! Services: orchestrate repos and domain rules for one request.

pub mod leaderboard;
pub mod scores;

pub use leaderboard::{HighScore, LeaderboardService};
pub use scores::{GameScore, ScoreService, ScoreSubmission, SubmitOutcome};
