//! Error codes for the leaderboard API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Points must be a non-negative integer
    InvalidPoints,
    /// Leaderboard limit must be a non-negative integer
    InvalidLimit,
    /// Nickname or game path segment is empty
    InvalidPathSegment,
    /// API version segment is not one we serve
    UnsupportedApiVersion,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Score submission outcomes
    /// No gamer matches the nickname
    GamerNotFound,
    /// Submitted score does not beat the stored one
    ScoreNotImproved,

    // Resource Not Found
    /// General not found error
    NotFound,
    /// Record not found (DB-driven)
    RecordNotFound,

    // Conflicts
    /// Another request wrote the same gamer/game pair concurrently
    ScoreConflict,
    /// Nickname already taken (case-insensitive)
    NicknameTaken,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    DataCorruption,
    ConfigError,
    Internal,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidPoints => "INVALID_POINTS",
            Self::InvalidLimit => "INVALID_LIMIT",
            Self::InvalidPathSegment => "INVALID_PATH_SEGMENT",
            Self::UnsupportedApiVersion => "UNSUPPORTED_API_VERSION",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::GamerNotFound => "GAMER_NOT_FOUND",
            Self::ScoreNotImproved => "SCORE_NOT_IMPROVED",
            Self::NotFound => "NOT_FOUND",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::ScoreConflict => "SCORE_CONFLICT",
            Self::NicknameTaken => "NICKNAME_TAKEN",
            Self::Conflict => "CONFLICT",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }

    /// Every code, for uniqueness checks in tests.
    pub const ALL: &'static [ErrorCode] = &[
        Self::InvalidPoints,
        Self::InvalidLimit,
        Self::InvalidPathSegment,
        Self::UnsupportedApiVersion,
        Self::ValidationError,
        Self::BadRequest,
        Self::GamerNotFound,
        Self::ScoreNotImproved,
        Self::NotFound,
        Self::RecordNotFound,
        Self::ScoreConflict,
        Self::NicknameTaken,
        Self::Conflict,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::DataCorruption,
        Self::ConfigError,
        Self::Internal,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
