//! End-to-end tests for the action/undo state machine
//!
//! These verify the perform-and-record discipline: every undoable action
//! leaves exactly one history entry, and undoing it restores the prior
//! state. Whole-state snapshots (which exclude the report buffer) are
//! compared before and after each round trip.

use orchard_sim::game::GameState;
use orchard_sim::history::HistoryEntry;
use similar_asserts::assert_eq;

fn capturing_game() -> GameState {
    let mut game = GameState::new();
    game.logger.enable_capture();
    game
}

fn snapshot(game: &GameState) -> serde_json::Value {
    serde_json::to_value(game).expect("game state must serialize")
}

#[test]
fn test_grab_undo_round_trip() {
    let mut game = capturing_game();
    let before = snapshot(&game);

    game.grab("apple");
    assert_eq!(game.experience_points(), 5);
    assert_eq!(game.history.len(), 1);

    game.undo();
    assert_eq!(snapshot(&game), before);
}

#[test]
fn test_drop_undo_round_trip() {
    let mut game = capturing_game();
    game.set_experience_points(100);
    let before = snapshot(&game);

    game.drop_fruit("pomegranate");
    assert_eq!(game.experience_points(), 89);

    game.undo();
    assert_eq!(snapshot(&game), before);
}

#[test]
fn test_rest_undo_round_trip() {
    let mut game = capturing_game();
    let before = snapshot(&game);

    game.rest();
    assert_eq!(game.experience_points(), 2);

    game.undo();
    assert_eq!(snapshot(&game), before);
}

#[test]
fn test_undo_consumes_history_in_reverse_order() {
    let mut game = capturing_game();

    game.grab("fig"); // +3
    game.rest(); // +2
    game.grab("apple"); // +5
    assert_eq!(game.experience_points(), 10);
    assert_eq!(game.history.len(), 3);

    game.undo(); // undoes grab apple
    assert_eq!(game.experience_points(), 5);

    game.undo(); // undoes rest
    assert_eq!(game.experience_points(), 3);

    game.undo(); // undoes grab fig
    assert_eq!(game.experience_points(), 0);
    assert!(game.history.is_empty());
}

#[test]
fn test_full_sequence_rewinds_to_initial_state() {
    let mut game = capturing_game();
    let initial = snapshot(&game);

    game.grab("apple");
    game.rest();
    game.drop_fruit("pear");
    game.rest();

    for _ in 0..4 {
        game.undo();
    }

    assert_eq!(snapshot(&game), initial);

    // One more undo is a reported no-op
    game.undo();
    assert_eq!(snapshot(&game), initial);
    assert!(game
        .logger
        .logs()
        .iter()
        .any(|entry| entry.message == "No actions to undo"));
}

#[test]
fn test_each_undoable_action_records_one_entry() {
    let mut game = capturing_game();

    game.grab("apple");
    assert_eq!(
        game.history.peek(),
        Some(&HistoryEntry::Grab {
            fruit: "apple".to_string()
        })
    );

    game.drop_fruit("pear");
    assert_eq!(
        game.history.peek(),
        Some(&HistoryEntry::Drop {
            fruit: "pear".to_string()
        })
    );

    game.rest();
    assert_eq!(game.history.peek(), Some(&HistoryEntry::Rest { points: 2 }));
    assert_eq!(game.history.len(), 3);
}

#[test]
fn test_non_undoable_operations_record_nothing() {
    let mut game = capturing_game();

    game.use_item("apple");
    game.examine("place1");
    game.walk("forward");
    game.fly(1, 2);
    game.grow();
    game.shrink();

    assert!(game.history.is_empty());
}

#[test]
fn test_undo_reversal_reports() {
    let mut game = capturing_game();
    game.grab("apple");
    game.logger.clear_logs();

    game.undo();

    let messages: Vec<String> = game
        .logger
        .logs()
        .iter()
        .map(|entry| entry.message.clone())
        .collect();
    assert!(messages.contains(&"Undoing last action".to_string()));
    assert!(messages.contains(&"Dropping apple".to_string()));
    assert!(messages.contains(&"You lost 5 experience points.".to_string()));
    assert!(messages.contains(&"Last action (grab) undone: Dropped apple".to_string()));
}

#[test]
fn test_undo_of_drop_reports_grab() {
    let mut game = capturing_game();
    game.drop_fruit("pear");
    game.logger.clear_logs();

    game.undo();

    assert_eq!(game.experience_points(), 0);
    assert!(game
        .logger
        .logs()
        .iter()
        .any(|entry| entry.message == "Last action (drop) undone: Grabbed pear"));
}
