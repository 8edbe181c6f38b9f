use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use leaderboard_api::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use leaderboard_api::{AppError, AppState, ErrorCode};

use crate::support::create_test_app;

async fn validation() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(ErrorCode::InvalidPoints, "Points must be zero or greater"))
}

async fn conflict() -> Result<HttpResponse, AppError> {
    Err(DomainError::conflict(ConflictKind::DuplicateScore, "written concurrently").into())
}

async fn timeout() -> Result<HttpResponse, AppError> {
    Err(DomainError::infra(InfraErrorKind::Timeout, "Database timeout").into())
}

async fn corruption() -> Result<HttpResponse, AppError> {
    Err(DomainError::infra(InfraErrorKind::DataCorruption, "bad guid").into())
}

async fn db() -> Result<HttpResponse, AppError> {
    Err(AppError::db("Database operation failed"))
}

#[actix_web::test]
async fn every_error_kind_renders_problem_details() {
    let app = create_test_app(AppState::without_db())
        .with_routes(|cfg| {
            cfg.route("/_test/validation", web::get().to(validation))
                .route("/_test/conflict", web::get().to(conflict))
                .route("/_test/timeout", web::get().to(timeout))
                .route("/_test/corruption", web::get().to(corruption))
                .route("/_test/db", web::get().to(db));
        })
        .build()
        .await;

    let cases = [
        ("/_test/validation", "INVALID_POINTS", StatusCode::BAD_REQUEST),
        ("/_test/conflict", "SCORE_CONFLICT", StatusCode::CONFLICT),
        ("/_test/timeout", "DB_TIMEOUT", StatusCode::GATEWAY_TIMEOUT),
        ("/_test/corruption", "DATA_CORRUPTION", StatusCode::INTERNAL_SERVER_ERROR),
        ("/_test/db", "DB_ERROR", StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (uri, code, status) in cases {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let problem = assert_problem_details_from_service_response(resp, code, status, None).await;
        assert!(!problem.title.is_empty());
        assert_ne!(problem.trace_id, "unknown", "trace scope missing for {uri}");
    }
}
