use leaderboard_api::adapters::scores_sea::{self, ScoreCreate};
use leaderboard_api::db::require_db;
use leaderboard_api::errors::domain::{ConflictKind, DomainError};
use leaderboard_api::infra::db_errors::map_db_err;

use crate::support::build_test_state;
use crate::support::factory::create_gamer;

fn dto(gamer_id: i64, game: &str, points: i64) -> ScoreCreate {
    ScoreCreate {
        gamer_id,
        game: game.to_string(),
        points,
    }
}

#[tokio::test]
async fn raise_only_applies_to_lower_values() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();
    let gamer = create_gamer(db, "raise").await.unwrap();
    let score = scores_sea::create_score(db, dto(gamer.id, "Defender", 100))
        .await
        .unwrap();

    assert_eq!(scores_sea::raise_points(db, score.id, 150).await.unwrap(), 1);
    // Stored 150 is no longer below either value
    assert_eq!(scores_sea::raise_points(db, score.id, 150).await.unwrap(), 0);
    assert_eq!(scores_sea::raise_points(db, score.id, 120).await.unwrap(), 0);

    let top = scores_sea::find_top_for_gamer_and_game(db, gamer.id, "Defender")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(top.points, 150);
}

#[tokio::test]
async fn second_row_for_same_pair_is_duplicate_score() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();
    let gamer = create_gamer(db, "dup").await.unwrap();
    scores_sea::create_score(db, dto(gamer.id, "Defender", 1))
        .await
        .unwrap();

    let err = scores_sea::create_score(db, dto(gamer.id, "Defender", 2))
        .await
        .unwrap_err();
    assert!(matches!(
        map_db_err(err),
        DomainError::Conflict(ConflictKind::DuplicateScore, _)
    ));

    // Same gamer, differently cased game is a separate key
    scores_sea::create_score(db, dto(gamer.id, "defender", 3))
        .await
        .unwrap();
}

#[tokio::test]
async fn game_filter_is_exact() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();
    let gamer = create_gamer(db, "exact").await.unwrap();
    scores_sea::create_score(db, dto(gamer.id, "Tempest", 7))
        .await
        .unwrap();

    assert!(scores_sea::find_top_for_gamer_and_game(db, gamer.id, "tempest")
        .await
        .unwrap()
        .is_none());
    assert_eq!(
        scores_sea::find_by_game_with_gamer(db, "Tempest")
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn listing_is_ordered_by_id_and_limited() {
    let state = build_test_state().await.unwrap();
    let db = require_db(&state).unwrap();
    let gamer = create_gamer(db, "order").await.unwrap();
    let mut ids = Vec::new();
    for game in ["c", "a", "b"] {
        ids.push(
            scores_sea::create_score(db, dto(gamer.id, game, 1))
                .await
                .unwrap()
                .id,
        );
    }

    let all = scores_sea::find_all_with_gamer(db, None).await.unwrap();
    let listed: Vec<i64> = all.iter().map(|(s, _)| s.id).collect();
    assert_eq!(listed, ids);
    assert!(all.iter().all(|(_, g)| g.as_ref().map(|g| g.id) == Some(gamer.id)));

    let two = scores_sea::find_all_with_gamer(db, Some(2)).await.unwrap();
    assert_eq!(two.len(), 2);
}
