use leaderboard_api::db::require_db;
use leaderboard_api::errors::domain::{DomainError, NotFoundKind, RejectionKind, ValidationKind};
use leaderboard_api::repos::scores;
use leaderboard_api::services::{ScoreService, SubmitOutcome};

use crate::support::build_test_state;
use crate::support::factory::{create_gamer, create_score};

#[tokio::test]
async fn first_submission_creates_row() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();
    let gamer = create_gamer(db, "first").await.unwrap();

    let result = ScoreService::new()
        .submit(db, &gamer.nickname, "Galaga", 120)
        .await
        .unwrap();

    assert_eq!(result.outcome, SubmitOutcome::Created);
    assert_eq!(result.previous, None);
    let stored = scores::find_top_for_gamer_and_game(db, gamer.id, "Galaga")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.points, 120);
    assert_eq!(stored.id, result.score_id);
}

#[tokio::test]
async fn improvement_updates_in_place() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();
    let gamer = create_gamer(db, "improve").await.unwrap();
    let original = create_score(db, &gamer, "Galaga", 100).await.unwrap();

    let result = ScoreService::new()
        .submit(db, &gamer.nickname, "Galaga", 150)
        .await
        .unwrap();

    assert_eq!(result.outcome, SubmitOutcome::Raised);
    assert_eq!(result.previous, Some(100));
    assert_eq!(result.score_id, original.id);

    let rows = scores::scores_for_game(db, "Galaga").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].score.points, 150);
    assert!(rows[0].score.updated_at >= original.updated_at);
}

#[tokio::test]
async fn non_improvement_leaves_storage_unchanged() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();
    let gamer = create_gamer(db, "same").await.unwrap();
    create_score(db, &gamer, "Galaga", 100).await.unwrap();

    for points in [100, 99, 0] {
        let err = ScoreService::new()
            .submit(db, &gamer.nickname, "Galaga", points)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Rejected(RejectionKind::ScoreNotImproved, _)
        ));
    }

    let rows = scores::scores_for_game(db, "Galaga").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].score.points, 100);
}

#[tokio::test]
async fn unknown_gamer_is_not_found_and_writes_nothing() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();

    let err = ScoreService::new()
        .submit(db, "nobody-here", "Galaga", 10)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Gamer, _)));

    assert!(scores::scores_for_game(db, "Galaga").await.unwrap().is_empty());
}

#[tokio::test]
async fn negative_points_fail_before_lookup() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();

    // Unknown gamer would be NotFound; validation wins
    let err = ScoreService::new()
        .submit(db, "nobody-here", "Galaga", -1)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidPoints, _)
    ));
}

#[tokio::test]
async fn nickname_lookup_ignores_case() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();
    let gamer = create_gamer(db, "MixedCase").await.unwrap();

    let result = ScoreService::new()
        .submit(db, &gamer.nickname.to_uppercase(), "Galaga", 5)
        .await
        .unwrap();
    assert_eq!(result.nickname, gamer.nickname);
}

#[tokio::test]
async fn scores_for_game_joins_gamer() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();
    let a = create_gamer(db, "a").await.unwrap();
    let b = create_gamer(db, "b").await.unwrap();
    create_score(db, &a, "Joust", 10).await.unwrap();
    create_score(db, &b, "Joust", 20).await.unwrap();
    create_score(db, &b, "Other", 30).await.unwrap();

    let rows = ScoreService::new().scores_for_game(db, "Joust").await.unwrap();
    let summary: Vec<_> = rows
        .iter()
        .map(|r| (r.nickname.as_str(), r.points, r.gamer_guid))
        .collect();
    assert_eq!(
        summary,
        vec![
            (a.nickname.as_str(), 10, a.gamer_guid),
            (b.nickname.as_str(), 20, b.gamer_guid)
        ]
    );
}
