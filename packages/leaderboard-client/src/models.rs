//! Wire types returned by the API.

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HighScore {
    pub game: String,
    pub nickname: String,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GamerSummary {
    pub id: i64,
    pub gamer_guid: Uuid,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameScore {
    pub id: i64,
    pub points: i64,
    pub game: String,
    pub gamer: GamerSummary,
}

/// RFC 7807 body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}
