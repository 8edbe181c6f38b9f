pub mod leaderboard;
pub mod score_submit;
