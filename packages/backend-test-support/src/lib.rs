//! Shared helpers for the leaderboard test suites: logging setup,
//! problem-details assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
