use std::collections::HashMap;
use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Largest limit the SQL drivers can bind; any larger value already means "all rows"
pub const MAX_LIMIT: u64 = i64::MAX as u64;

/// Optional `?limit=N` query parameter. Missing, empty or `0` means no limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(pub Option<u64>);

impl Limit {
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Limit(None));
        };
        let n = raw.parse::<u64>().map_err(|_| {
            AppError::invalid(
                ErrorCode::InvalidLimit,
                format!("limit must be a non-negative whole number, got '{raw}'"),
            )
        })?;
        Ok(Limit(Some(n.min(MAX_LIMIT)).filter(|n| *n > 0)))
    }
}

impl FromRequest for Limit {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = web::Query::<HashMap<String, String>>::from_query(req.query_string())
            .map_err(|_| AppError::invalid(ErrorCode::InvalidLimit, "Malformed query string"))
            .and_then(|q| Limit::parse(q.get("limit").map(String::as_str)));
        ready(result)
    }
}
