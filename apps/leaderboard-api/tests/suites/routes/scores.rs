use std::sync::Arc;
use std::time::Duration;

use actix_http::Request;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use leaderboard_api::repos::gamers;
use leaderboard_api::AppState;
use serde_json::Value;
use uuid::Uuid;

use crate::common::ok_json;
use crate::support::factory::{recording, FailingNotifier};
use crate::support::test_state::{build_seeded_state, build_seeded_state_with};
use crate::support::create_test_app;

fn post_score(path: &str, body: &str) -> Request {
    test::TestRequest::post()
        .uri(path)
        .insert_header(("content-type", "application/json"))
        .set_payload(body.to_string())
        .to_request()
}

fn get(path: &str) -> Request {
    test::TestRequest::get().uri(path).to_request()
}

async fn seeded() -> AppState {
    build_seeded_state().await.expect("seeded state")
}

#[actix_web::test]
async fn higher_score_is_stored_and_listed() {
    let app = create_test_app(seeded().await).with_prod_routes().build().await;

    let resp = test::call_service(&app, post_score("/api/scores/LX360/Pacman", "2000")).await;
    let body = ok_json(resp).await;
    assert_eq!(body["outcome"], "raised");
    assert_eq!(body["points"], 2000);
    assert_eq!(body["game"], "Pacman");
    assert_eq!(body["nickname"], "LX360");

    let list = ok_json(test::call_service(&app, get("/api/scores/Pacman")).await).await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["points"], 2000);
    assert_eq!(rows[0]["game"], "Pacman");
    assert_eq!(rows[0]["gamer"]["nickname"], "LX360");
    let guid = rows[0]["gamer"]["gamer_guid"].as_str().unwrap();
    assert!(Uuid::parse_str(guid).is_ok());
}

#[actix_web::test]
async fn lower_score_after_raise_is_rejected_and_row_kept() {
    let app = create_test_app(seeded().await).with_prod_routes().build().await;

    ok_json(test::call_service(&app, post_score("/api/scores/LX360/Pacman", "2000")).await).await;

    let resp = test::call_service(&app, post_score("/api/scores/LX360/Pacman", "1000")).await;
    assert_problem_details_from_service_response(
        resp,
        "SCORE_NOT_IMPROVED",
        StatusCode::BAD_REQUEST,
        Some("1000"),
    )
    .await;

    let list = ok_json(test::call_service(&app, get("/api/scores/Pacman")).await).await;
    assert_eq!(list[0]["points"], 2000);
}

#[actix_web::test]
async fn equal_score_is_rejected() {
    let app = create_test_app(seeded().await).with_prod_routes().build().await;

    let resp = test::call_service(&app, post_score("/api/scores/LX360/Pacman", "1337")).await;
    assert_problem_details_from_service_response(
        resp,
        "SCORE_NOT_IMPROVED",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn unknown_nickname_is_bad_request_and_writes_nothing() {
    let app = create_test_app(seeded().await).with_prod_routes().build().await;

    let resp = test::call_service(&app, post_score("/api/scores/Unknown/Pacman", "50")).await;
    assert_problem_details_from_service_response(
        resp,
        "GAMER_NOT_FOUND",
        StatusCode::BAD_REQUEST,
        Some("Unknown"),
    )
    .await;

    let list = ok_json(test::call_service(&app, get("/api/scores/Pacman")).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["gamer"]["nickname"], "LX360");
}

#[actix_web::test]
async fn nickname_match_ignores_case() {
    let app = create_test_app(seeded().await).with_prod_routes().build().await;

    let resp = test::call_service(&app, post_score("/api/scores/lx360/Pacman", "5000")).await;
    let body = ok_json(resp).await;
    assert_eq!(body["outcome"], "raised");
    // Stored casing is reported back
    assert_eq!(body["nickname"], "LX360");
}

#[actix_web::test]
async fn non_ascii_nickname_resolves() {
    let state = seeded().await;
    let db = state.db().expect("db");
    gamers::create_gamer(db, "Ödön").await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(
        &app,
        post_score("/api/scores/%C3%96d%C3%B6n/Pacman", "10"),
    )
    .await;
    let body = ok_json(resp).await;
    assert_eq!(body["outcome"], "created");
    assert_eq!(body["nickname"], "Ödön");
}

#[actix_web::test]
async fn game_match_is_case_sensitive() {
    let app = create_test_app(seeded().await).with_prod_routes().build().await;

    let resp = test::call_service(&app, post_score("/api/scores/LX360/pacman", "10")).await;
    assert_eq!(ok_json(resp).await["outcome"], "created");

    let lower = ok_json(test::call_service(&app, get("/api/scores/pacman")).await).await;
    assert_eq!(lower.as_array().unwrap().len(), 1);
    assert_eq!(lower[0]["points"], 10);

    let upper = ok_json(test::call_service(&app, get("/api/scores/Pacman")).await).await;
    assert_eq!(upper[0]["points"], 1337);
}

#[actix_web::test]
async fn first_score_of_zero_is_created() {
    let app = create_test_app(seeded().await).with_prod_routes().build().await;

    let resp = test::call_service(&app, post_score("/api/scores/LeekGeek/Pacman", "0")).await;
    let body = ok_json(resp).await;
    assert_eq!(body["outcome"], "created");
    assert_eq!(body["points"], 0);

    let list = ok_json(test::call_service(&app, get("/api/scores/Pacman")).await).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn negative_points_are_invalid() {
    let app = create_test_app(seeded().await).with_prod_routes().build().await;

    let resp = test::call_service(&app, post_score("/api/scores/LX360/Pacman", "-5")).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_POINTS",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn non_integer_body_is_bad_request() {
    let app = create_test_app(seeded().await).with_prod_routes().build().await;

    for body in ["\"2000\"", "12.5", "{\"points\": 3}", ""] {
        let resp = test::call_service(&app, post_score("/api/scores/LX360/Pacman", body)).await;
        assert_problem_details_from_service_response(
            resp,
            "BAD_REQUEST",
            StatusCode::BAD_REQUEST,
            Some("Invalid JSON"),
        )
        .await;
    }
}

#[actix_web::test]
async fn percent_encoded_game_is_decoded() {
    let app = create_test_app(seeded().await).with_prod_routes().build().await;

    let list = ok_json(test::call_service(&app, get("/api/scores/Space%20Invaders")).await).await;
    assert_eq!(list[0]["points"], 6510);
    assert_eq!(list[0]["gamer"]["nickname"], "LeekGeek");
}

#[actix_web::test]
async fn unknown_game_lists_nothing() {
    let app = create_test_app(seeded().await).with_prod_routes().build().await;

    let list = ok_json(test::call_service(&app, get("/api/scores/Tetris")).await).await;
    assert_eq!(list, Value::Array(vec![]));
}

#[actix_web::test]
async fn accepted_score_sends_notification() {
    let notifier = recording();
    let state = build_seeded_state_with(notifier.clone()).await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    ok_json(test::call_service(&app, post_score("/api/scores/LX360/Pacman", "2000")).await).await;

    let messages = notifier.wait_for(1).await;
    assert_eq!(messages, vec!["New high score of 2000 for game 'Pacman'"]);
}

#[actix_web::test]
async fn rejected_score_sends_no_notification() {
    let notifier = recording();
    let state = build_seeded_state_with(notifier.clone()).await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, post_score("/api/scores/LX360/Pacman", "1")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(notifier.messages().is_empty());
}

#[actix_web::test]
async fn failing_notifier_does_not_change_outcome() {
    let notifier = Arc::new(FailingNotifier::default());
    let state = build_seeded_state_with(notifier.clone()).await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, post_score("/api/scores/LX360/Pacman", "4242")).await;
    assert_eq!(ok_json(resp).await["points"], 4242);

    let list = ok_json(test::call_service(&app, get("/api/scores/Pacman")).await).await;
    assert_eq!(list[0]["points"], 4242);

    for _ in 0..100 {
        if notifier.attempts() > 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(notifier.attempts(), 1);
}

#[actix_web::test]
async fn overlong_nickname_is_invalid_path_segment() {
    let app = create_test_app(seeded().await).with_prod_routes().build().await;

    let path = format!("/api/scores/{}/Pacman", "n".repeat(65));
    let resp = test::call_service(&app, post_score(&path, "1")).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_PATH_SEGMENT",
        StatusCode::BAD_REQUEST,
        Some("nickname"),
    )
    .await;
}

#[actix_web::test]
async fn routes_without_database_are_unavailable() {
    let state = AppState::without_db();
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, get("/api/scores/Pacman")).await;
    assert_problem_details_from_service_response(
        resp,
        "DB_UNAVAILABLE",
        StatusCode::SERVICE_UNAVAILABLE,
        None,
    )
    .await;

    let resp = test::call_service(&app, post_score("/api/scores/LX360/Pacman", "1")).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
