use leaderboard_api::db::require_db;
use leaderboard_api::services::LeaderboardService;

use crate::support::build_test_state;
use crate::support::factory::{create_gamer, create_score};

#[tokio::test]
async fn rows_come_back_in_insertion_order() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();
    let a = create_gamer(db, "lb-a").await.unwrap();
    let b = create_gamer(db, "lb-b").await.unwrap();
    create_score(db, &b, "Zaxxon", 5).await.unwrap();
    create_score(db, &a, "Asteroids", 50).await.unwrap();
    create_score(db, &b, "Asteroids", 40).await.unwrap();

    let rows = LeaderboardService::new().high_scores(db, None).await.unwrap();
    let triples: Vec<_> = rows
        .iter()
        .map(|r| (r.game.as_str(), r.nickname.as_str(), r.points))
        .collect();
    assert_eq!(
        triples,
        vec![
            ("Zaxxon", b.nickname.as_str(), 5),
            ("Asteroids", a.nickname.as_str(), 50),
            ("Asteroids", b.nickname.as_str(), 40),
        ]
    );
}

#[tokio::test]
async fn limit_truncates_and_zero_means_all() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();
    let g = create_gamer(db, "lb-limit").await.unwrap();
    for game in ["One", "Two", "Three"] {
        create_score(db, &g, game, 1).await.unwrap();
    }

    let service = LeaderboardService::new();
    assert_eq!(service.high_scores(db, Some(2)).await.unwrap().len(), 2);
    assert_eq!(service.high_scores(db, Some(0)).await.unwrap().len(), 3);
    assert_eq!(service.high_scores(db, Some(99)).await.unwrap().len(), 3);
    assert_eq!(service.high_scores(db, Some(u64::MAX)).await.unwrap().len(), 3);
}
