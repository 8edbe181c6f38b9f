use thiserror::Error;

use crate::models::ProblemDetails;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    /// Non-success status; `problem` is set when the body was problem details
    #[error("api returned {status}{}", problem_suffix(.problem))]
    Api {
        status: u16,
        problem: Option<ProblemDetails>,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),
}

fn problem_suffix(problem: &Option<ProblemDetails>) -> String {
    problem
        .as_ref()
        .map(|p| format!(" {}: {}", p.code, p.detail))
        .unwrap_or_default()
}

impl ClientError {
    /// Problem code from the server, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api {
                problem: Some(p), ..
            } => Some(p.code.as_str()),
            _ => None,
        }
    }
}
