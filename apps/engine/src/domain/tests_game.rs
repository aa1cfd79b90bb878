use crate::domain::actions::{Action, ActionOutcome};
use crate::domain::cup::{Cup, DiceCup};
use crate::domain::game::Game;
use crate::domain::player::Player;
use crate::domain::rules::N_DICE;
use crate::domain::score_types::{Category, ScoreSection};
use crate::domain::test_prelude::{generate_players, pinned};
use crate::errors::domain::DomainError;

fn aces() -> Action {
    Action::pick(ScoreSection::Upper, "Aces")
}

#[test]
fn rejects_empty_roster() {
    assert_eq!(Game::new(Vec::new()).unwrap_err(), DomainError::InvalidPlayers);
}

#[test]
fn remembers_player_list_and_starts_on_turn_one() {
    let game = Game::new(generate_players(3)).unwrap();
    let names: Vec<_> = game.players().iter().map(Player::name).collect();
    assert_eq!(names, ["Tester 1", "Tester 2", "Tester 3"]);
    assert_eq!(game.turn(), 1);
    assert_eq!(game.current_player_index(), 0);
    assert_eq!(game.now_playing().name(), "Tester 1");
}

#[tokio::test]
async fn roll_rolls_dice_for_currently_playing_user() {
    let (value, source) = pinned(0.0);
    let mut players = generate_players(2);
    players[0] = Player::new("Pinned", Cup::new(source));
    let mut game = Game::new(players).unwrap();
    let before = game.now_playing().cup().dice_values();
    let other_before = game.players()[1].cup().dice_values();

    *value.lock() = 1.0 - f64::EPSILON;
    let outcome = game.dispatch(Action::Roll).await.unwrap();

    assert_eq!(outcome, ActionOutcome::Rolled { rolls: 1 });
    assert_ne!(game.now_playing().cup().dice_values(), before);
    assert_eq!(game.players()[1].cup().dice_values(), other_before);
    assert_eq!(game.players()[1].cup().rolls(), 0);
}

#[tokio::test]
async fn hold_and_release_target_the_die_at_index() {
    let mut game = Game::new(generate_players(3)).unwrap();
    let index = N_DICE - 2;
    let held = |game: &Game| game.now_playing().cup().dice()[index].is_held();

    assert!(!held(&game));
    game.dispatch(Action::HoldDie { index }).await.unwrap();
    assert!(held(&game));
    game.dispatch(Action::HoldDie { index }).await.unwrap();
    assert!(held(&game));

    game.dispatch(Action::ReleaseDie { index }).await.unwrap();
    assert!(!held(&game));
    game.dispatch(Action::ReleaseDie { index }).await.unwrap();
    assert!(!held(&game));
}

#[tokio::test]
async fn out_of_range_die_index_is_reported() {
    let mut game = Game::new(generate_players(1)).unwrap();
    let err = game
        .dispatch(Action::HoldDie { index: N_DICE })
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::invalid_die_index(N_DICE, N_DICE));
    assert_eq!(game.turn(), 1);
}

#[tokio::test]
async fn pick_score_ends_players_turn_and_records_score() {
    let mut game = Game::new(generate_players(3)).unwrap();

    game.dispatch(Action::Roll).await.unwrap();
    let outcome = game.dispatch(aces()).await.unwrap();

    assert!(matches!(
        outcome,
        ActionOutcome::ScorePicked {
            category: Category::Aces,
            next_player: 1,
            turn: 1,
            ..
        }
    ));
    assert_eq!(game.current_player_index(), 1);
    assert!(game.players()[0].score_sheet().is_used(Category::Aces));
}

#[tokio::test]
async fn pick_score_gives_the_next_turn_a_fresh_cup() {
    let mut game = Game::new(generate_players(1)).unwrap();
    game.dispatch(Action::Roll).await.unwrap();
    game.dispatch(Action::HoldDie { index: 0 }).await.unwrap();
    game.dispatch(Action::Roll).await.unwrap();
    game.dispatch(aces()).await.unwrap();

    let cup = game.now_playing().cup();
    assert_eq!(cup.rolls(), 0);
    assert!(cup.dice().iter().all(|d| !d.is_held()));
}

#[tokio::test]
async fn three_players_complete_a_turn() {
    let mut game = Game::new(generate_players(3)).unwrap();
    for _ in 0..3 {
        game.dispatch(Action::Roll).await.unwrap();
        game.dispatch(aces()).await.unwrap();
    }
    assert_eq!(game.turn(), 2);
    assert_eq!(game.current_player_index(), 0);
}

#[tokio::test]
async fn turn_is_not_incremented_when_non_last_player_picks() {
    let mut game = Game::new(generate_players(2)).unwrap();
    game.dispatch(Action::Roll).await.unwrap();
    game.dispatch(aces()).await.unwrap();
    assert_eq!(game.turn(), 1);

    game.dispatch(Action::Roll).await.unwrap();
    game.dispatch(aces()).await.unwrap();
    assert_eq!(game.turn(), 2);
}

#[tokio::test]
async fn repeated_pick_is_rejected_without_advancing() {
    let mut game = Game::new(generate_players(1)).unwrap();
    game.dispatch(Action::Roll).await.unwrap();
    game.dispatch(aces()).await.unwrap();
    assert_eq!(game.turn(), 2);

    let err = game.dispatch(aces()).await.unwrap_err();
    assert!(matches!(err, DomainError::ScoreUsed { .. }));
    assert_eq!(game.turn(), 2);
    assert_eq!(game.current_player_index(), 0);
}

#[tokio::test]
async fn unknown_score_name_does_not_advance() {
    let mut game = Game::new(generate_players(2)).unwrap();
    game.dispatch(Action::Roll).await.unwrap();
    let before = game.snapshot();

    let err = game
        .dispatch(Action::pick(ScoreSection::Lower, "Big Straight"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::ScoreDoesNotExist { .. }));
    assert_eq!(game.snapshot(), before);
}

#[tokio::test]
async fn picked_value_matches_candidate_at_pick_time() {
    let mut game = Game::new(generate_players(1)).unwrap();
    game.dispatch(Action::Roll).await.unwrap();
    let expected = game
        .now_playing()
        .score_sheet()
        .candidate(Category::Chance)
        .unwrap();

    let outcome = game
        .dispatch(Action::pick_category(Category::Chance))
        .await
        .unwrap();

    assert!(matches!(outcome, ActionOutcome::ScorePicked { value, .. } if value == expected));
    assert_eq!(game.now_playing().score_sheet().total_score(), expected);
}

#[tokio::test]
async fn game_ends_when_every_sheet_is_full() {
    let mut game = Game::new(generate_players(2)).unwrap();
    for category in Category::ALL {
        for _ in 0..2 {
            assert!(game.any_player_can_play());
            game.dispatch(Action::Roll).await.unwrap();
            game.dispatch(Action::pick_category(category)).await.unwrap();
        }
    }
    assert!(!game.any_player_can_play());
    assert_eq!(game.turn(), Category::ALL.len() as u32 + 1);
}
