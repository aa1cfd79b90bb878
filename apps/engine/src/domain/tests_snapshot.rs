use serde_json::Value;

use crate::domain::actions::Action;
use crate::domain::cup::Cup;
use crate::domain::game::Game;
use crate::domain::player::Player;
use crate::domain::score_types::ScoreSection;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::test_prelude::generate_players;

#[test]
fn score_sheet_snapshot_has_exactly_the_public_keys() {
    let player = Player::new("Tester 1", Cup::new(|| 0.0));
    let json = serde_json::to_value(player.score_sheet().serialize()).unwrap();

    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["canPlay", "points", "scores", "usedScores"]);

    assert_eq!(json["scores"]["upper"]["Aces"], Value::from(5));
    assert_eq!(json["scores"]["lower"]["Yahtzee"], Value::from(50));
    assert_eq!(json["usedScores"]["upper"], serde_json::json!({}));
    assert_eq!(json["canPlay"], Value::Bool(true));
    assert_eq!(json["points"], Value::from(0));
}

#[tokio::test]
async fn game_snapshot_reflects_turn_and_players() {
    let mut game = Game::new(generate_players(2)).unwrap();
    game.dispatch(Action::Roll).await.unwrap();
    game.dispatch(Action::HoldDie { index: 2 }).await.unwrap();

    let snap = game.snapshot();
    assert_eq!(snap.turn, 1);
    assert_eq!(snap.current_player, 0);
    assert_eq!(snap.players.len(), 2);
    assert_eq!(snap.players[0].name, "Tester 1");
    assert_eq!(snap.players[0].rolls, 1);
    assert!(snap.players[0].dice[2].is_held());
    assert_eq!(snap.players[1].rolls, 0);

    game.dispatch(Action::pick(ScoreSection::Upper, "Aces"))
        .await
        .unwrap();
    let snap = game.snapshot();
    assert_eq!(snap.current_player, 1);
    assert_eq!(snap.players[0].sheet.used_scores[&ScoreSection::Upper].len(), 1);
}

#[test]
fn game_snapshot_survives_json() {
    let game = Game::new(generate_players(3)).unwrap();
    let snap = game.snapshot();
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("\"currentPlayer\":0"));
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn game_snapshot_rejects_impossible_faces() {
    let game = Game::new(generate_players(1)).unwrap();
    let mut json = serde_json::to_value(game.snapshot()).unwrap();
    json["players"][0]["dice"][0]["value"] = Value::from(9);

    assert!(serde_json::from_value::<GameSnapshot>(json).is_err());
}
