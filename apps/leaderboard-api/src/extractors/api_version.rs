use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// API version from the `/api/v{version}` prefix.
///
/// Unversioned `/api/...` routes resolve to [`ApiVersion::V1`]. Both
/// versions currently share one contract; the extractor exists so every
/// handler rejects unknown versions the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw {
            "1" | "1.0" => Ok(ApiVersion::V1),
            "2" | "2.0" => Ok(ApiVersion::V2),
            other => Err(AppError::bad_request(
                ErrorCode::UnsupportedApiVersion,
                format!("API version '{other}' is not supported (use 1, 1.0, 2 or 2.0)"),
            )),
        }
    }
}

impl FromRequest for ApiVersion {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match req.match_info().get("version") {
            Some(raw) => ApiVersion::parse(raw),
            None => Ok(ApiVersion::V1),
        })
    }
}
