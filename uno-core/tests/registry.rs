use std::sync::Arc;

use uno_core::{error::GameError, player::Identity, registry::GameRegistry};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn alice() -> Identity {
    Identity::new(1, "Alice")
}

fn bob() -> Identity {
    Identity::new(2, "Bob")
}

fn carol() -> Identity {
    Identity::new(3, "Carol")
}

#[tokio::test]
async fn started_game_deals_5_cards_and_is_findable_by_all_players() {
    init_tracing();
    let registry = GameRegistry::new();

    let game = registry.start_game(alice(), vec![bob()]).await.unwrap();

    {
        let game = game.lock().await;
        let snapshot = game.status_snapshot();
        assert_eq!(
            snapshot.players,
            vec![("Alice".to_string(), 5), ("Bob".to_string(), 5)]
        );
    }

    let found_by_alice = registry.find_game(&alice()).await.unwrap();
    let found_by_bob = registry.find_game(&bob()).await.unwrap();
    assert!(Arc::ptr_eq(&found_by_alice, &game));
    assert!(Arc::ptr_eq(&found_by_bob, &game));
}

#[tokio::test]
async fn starting_without_invitees_fails() {
    init_tracing();
    let registry = GameRegistry::new();

    let error = registry.start_game(alice(), vec![]).await.unwrap_err();

    assert_eq!(error, GameError::NoInvitees);
    assert!(registry.find_game(&alice()).await.is_none());
}

#[tokio::test]
async fn a_player_sits_in_at_most_one_game() {
    init_tracing();
    let registry = GameRegistry::new();

    registry.start_game(alice(), vec![bob()]).await.unwrap();

    // Busy initiator.
    let error = registry.start_game(alice(), vec![carol()]).await.unwrap_err();
    assert_eq!(error, GameError::AlreadyInGame);

    // Busy invitee fails the whole start; carol stays free.
    let error = registry.start_game(carol(), vec![bob()]).await.unwrap_err();
    assert_eq!(error, GameError::AlreadyInGame);
    assert!(registry.find_game(&carol()).await.is_none());

    assert_eq!(registry.active_games().await, 1);
}

#[tokio::test]
async fn inviting_yourself_fails() {
    init_tracing();
    let registry = GameRegistry::new();

    let error = registry.start_game(alice(), vec![alice()]).await.unwrap_err();

    assert_eq!(error, GameError::AlreadyInGame);
    assert!(registry.find_game(&alice()).await.is_none());
}

#[tokio::test]
async fn find_game_returns_none_for_strangers() {
    init_tracing();
    let registry = GameRegistry::new();

    registry.start_game(alice(), vec![bob()]).await.unwrap();

    assert!(registry.find_game(&carol()).await.is_none());
}

#[tokio::test]
async fn ending_a_game_releases_every_participant() {
    init_tracing();
    let registry = GameRegistry::new();

    registry.start_game(alice(), vec![bob()]).await.unwrap();
    registry.end_game(&bob()).await.unwrap();

    assert!(registry.find_game(&alice()).await.is_none());
    assert!(registry.find_game(&bob()).await.is_none());
    assert_eq!(registry.active_games().await, 0);

    // Both are free to start again.
    registry.start_game(bob(), vec![alice()]).await.unwrap();
}

#[tokio::test]
async fn ending_without_a_game_fails() {
    init_tracing();
    let registry = GameRegistry::new();

    let error = registry.end_game(&alice()).await.unwrap_err();

    assert_eq!(error, GameError::NotInGame);
}

#[tokio::test]
async fn a_locked_game_does_not_block_lookups_for_other_games() {
    init_tracing();
    let registry = GameRegistry::new();

    let first = registry.start_game(alice(), vec![bob()]).await.unwrap();
    registry
        .start_game(carol(), vec![Identity::new(4, "Dave")])
        .await
        .unwrap();

    // Simulate the first game suspended mid-play on a color choice.
    let _held = first.lock().await;

    assert!(registry.find_game(&carol()).await.is_some());
}
