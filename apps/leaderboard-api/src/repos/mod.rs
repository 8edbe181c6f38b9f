//! Repository functions for domain layer.

pub mod gamers;
pub mod scores;
