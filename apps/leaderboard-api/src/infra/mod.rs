//! Infrastructure layer - database, fixtures, state management, and error handling.

pub mod db;
pub mod db_errors;
pub mod seed;
pub mod state;
