//! The "keep the highest score" rule.

use crate::errors::domain::{DomainError, ValidationKind};

/// What to do with a submitted score given the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertDecision {
    /// No score yet for the pair; store the submission as is
    Insert,
    /// Submission beats the stored value
    Raise { from: i64, to: i64 },
    /// Submission is not higher than `current`; nothing changes
    Reject { current: i64 },
}

/// Points must be non-negative. Zero is a legal first score.
pub fn validate_points(points: i64) -> Result<(), DomainError> {
    if points < 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidPoints,
            format!("Points must be zero or greater, got {points}"),
        ));
    }
    Ok(())
}

pub fn decide(existing: Option<i64>, submitted: i64) -> UpsertDecision {
    match existing {
        None => UpsertDecision::Insert,
        Some(current) if submitted > current => UpsertDecision::Raise {
            from: current,
            to: submitted,
        },
        Some(current) => UpsertDecision::Reject { current },
    }
}
