//! Path extractors for `/scores/...` routes.
//!
//! Segments arrive percent-decoded from the router. Blank segments and
//! ones longer than their column are refused before any query runs.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub const MAX_NICKNAME_LEN: usize = 64;
pub const MAX_GAME_LEN: usize = 128;

fn segment(req: &HttpRequest, name: &str, max_len: usize) -> Result<String, AppError> {
    let raw = req.match_info().get(name).ok_or_else(|| {
        AppError::invalid(
            ErrorCode::InvalidPathSegment,
            format!("Missing {name} parameter"),
        )
    })?;

    if raw.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidPathSegment,
            format!("{name} must not be blank"),
        ));
    }
    if raw.chars().count() > max_len {
        return Err(AppError::invalid(
            ErrorCode::InvalidPathSegment,
            format!("{name} must be at most {max_len} characters"),
        ));
    }
    Ok(raw.to_string())
}

/// `{game}` segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePath {
    pub game: String,
}

impl FromRequest for GamePath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(segment(req, "game", MAX_GAME_LEN).map(|game| GamePath { game }))
    }
}

/// `{nickname}/{game}` segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorePath {
    pub nickname: String,
    pub game: String,
}

impl FromRequest for ScorePath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = segment(req, "nickname", MAX_NICKNAME_LEN).and_then(|nickname| {
            segment(req, "game", MAX_GAME_LEN).map(|game| ScorePath { nickname, game })
        });
        ready(result)
    }
}
