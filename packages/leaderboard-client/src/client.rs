use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{GameScore, HighScore, ProblemDetails};

pub const USER_AGENT: &str = "Leaderboard WebAPI Client 1.0";

const RETRY_BACKOFF: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct LeaderboardClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl LeaderboardClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /api/leaderboard[?limit=N]`
    pub async fn high_scores(&self, limit: Option<u32>) -> Result<Vec<HighScore>, ClientError> {
        let mut url = self.endpoint(&["leaderboard"])?;
        if let Some(limit) = limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        self.fetch_json(Method::GET, url, None).await
    }

    /// `GET /api/scores/{game}`
    pub async fn scores_for_game(&self, game: &str) -> Result<Vec<GameScore>, ClientError> {
        let url = self.endpoint(&["scores", game])?;
        self.fetch_json(Method::GET, url, None).await
    }

    /// `POST /api/scores/{nickname}/{game}` with the points as a bare JSON number.
    ///
    /// Only retried when the connection could not be made: a resent
    /// submission that already committed would come back as not improved.
    pub async fn submit_score(
        &self,
        nickname: &str,
        game: &str,
        points: i64,
    ) -> Result<(), ClientError> {
        let url = self.endpoint(&["scores", nickname, game])?;
        self.send(Method::POST, url, Some(points)).await?;
        Ok(())
    }

    /// Base URL plus `api` and the given segments, each percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.config.base_url.to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<i64>,
    ) -> Result<T, ClientError> {
        let response = self.send(method, url, body).await?;
        Ok(response.json::<T>().await?)
    }

    /// Run the request under the overall timeout, retrying transient failures
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<i64>,
    ) -> Result<Response, ClientError> {
        let budget = self.config.request_timeout;
        match tokio::time::timeout(budget, self.send_with_retries(method, url, body)).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout(budget)),
        }
    }

    async fn send_with_retries(
        &self,
        method: Method,
        url: Url,
        body: Option<i64>,
    ) -> Result<Response, ClientError> {
        let max_retries = self.config.max_retries;
        // A non-idempotent request that may have reached the server is never resent
        let idempotent = method.is_idempotent();
        let mut attempt: u32 = 0;

        loop {
            let request = self.request(method.clone(), url.clone(), body);
            let retries_left = attempt < max_retries;

            match request.send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(%url, status = response.status().as_u16(), attempt, "request_ok");
                    return Ok(response);
                }
                Ok(response)
                    if retries_left && idempotent && is_transient_status(response.status()) =>
                {
                    warn!(%url, status = response.status().as_u16(), attempt, "request_retry");
                }
                Ok(response) => return Err(api_error(response).await),
                Err(e) if retries_left && is_transient_error(&e, idempotent) => {
                    warn!(%url, error = %e, attempt, "request_retry");
                }
                Err(e) => return Err(ClientError::Transport(e)),
            }

            attempt += 1;
            tokio::time::sleep(RETRY_BACKOFF * attempt).await;
        }
    }

    fn request(&self, method: Method, url: Url, body: Option<i64>) -> RequestBuilder {
        let request = self
            .http
            .request(method, url)
            .timeout(self.config.attempt_timeout);
        match body {
            Some(points) => request.json(&points),
            None => request,
        }
    }
}

fn is_transient_status(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
}

/// Connect failures never reached the server; timeouts may have, so they
/// only count for idempotent requests.
fn is_transient_error(e: &reqwest::Error, idempotent: bool) -> bool {
    e.is_connect() || (idempotent && e.is_timeout())
}

async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    // Body may be empty or not problem details (proxies, default pages)
    let problem = response.json::<ProblemDetails>().await.ok();
    ClientError::Api { status, problem }
}
