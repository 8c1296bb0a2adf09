//! Snapshot and history serialization
//!
//! Drivers and the binary emit these as JSON; field names are part of the
//! output contract.

use blockfall::core::{GameSession, ScriptedSource, TickOutcome};
use blockfall::types::{ShapeKind, COLUMNS, ROWS};
use serde_json::Value;

#[test]
fn test_snapshot_json_fields() {
    let mut session = GameSession::with_source(ScriptedSource::repeat(ShapeKind::Stair));
    session.start();
    session.on_tick();

    let json = serde_json::to_value(session.snapshot()).unwrap();
    let obj = json.as_object().unwrap();

    for key in ["board", "active", "state", "score", "game_number", "interval_ms"] {
        assert!(obj.contains_key(key), "missing key {}", key);
    }
    assert_eq!(obj["state"], "running");
    assert_eq!(obj["score"], 1);

    let board = obj["board"].as_array().unwrap();
    assert_eq!(board.len(), ROWS as usize);
    assert!(board
        .iter()
        .all(|row| row.as_array().map(|r| r.len()) == Some(COLUMNS as usize)));

    let active = obj["active"].as_object().unwrap();
    assert_eq!(active["kind"], "stair");
    assert_eq!(active["color"], "yellow");
    assert_eq!(active["cells"].as_array().unwrap().len(), 4);
}

#[test]
fn test_idle_snapshot_has_null_active() {
    let session = GameSession::new(3);
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["active"], Value::Null);
    assert_eq!(json["state"], "idle");
}

#[test]
fn test_history_serializes_as_array() {
    let mut session = GameSession::with_source(ScriptedSource::repeat(ShapeKind::I));
    session.start();
    while !matches!(session.on_tick(), TickOutcome::GameOver(_)) {}
    session.set_player_name("Lin");
    session.start();
    session.on_tick();
    session.retry();

    let json = serde_json::to_value(session.history()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "game_number": 1, "name": "Game 1", "score": 25 },
            { "game_number": 2, "name": "Lin", "score": 1 },
        ])
    );
}
