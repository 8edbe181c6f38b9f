//! Access log: one `request_completed` event per request, at `info` for
//! success, `warn` for 4xx and `error` for 5xx.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;

/// Fields of the completion event, captured before the request is consumed
struct Completed {
    method: String,
    path: String,
    trace_id: String,
    started: Instant,
}

impl Completed {
    fn emit(&self, status: StatusCode) {
        let (method, path, trace_id) = (&self.method, &self.path, &self.trace_id);
        let status_code = status.as_u16();
        let duration_us = self.started.elapsed().as_micros() as u64;

        if status.is_server_error() {
            error!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
        } else if status.is_client_error() {
            warn!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
        } else {
            info!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
        }
    }
}

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let completed = Completed {
            method: req.method().to_string(),
            path: req.path().to_string(),
            trace_id: TraceId::of(&req, "unknown"),
            started: Instant::now(),
        };
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            completed.emit(match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            });
            result
        })
    }
}
