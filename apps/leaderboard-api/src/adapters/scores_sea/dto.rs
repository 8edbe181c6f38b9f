//! DTOs for scores_sea adapter.

/// DTO for creating a score.
#[derive(Debug, Clone)]
pub struct ScoreCreate {
    pub gamer_id: i64,
    pub game: String,
    pub points: i64,
}
