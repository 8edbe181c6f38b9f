//! Adapters for external dependencies.

pub mod gamers_sea;
pub mod scores_sea;
