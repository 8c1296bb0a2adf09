//! Score history - finished games of the current process
//!
//! Nothing here is persisted; callers that want to keep records serialize
//! them (every type is `Serialize`).

use serde::Serialize;

/// Result of one finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// 1-based number of the game within this process
    pub game_number: u32,
    /// Player name, or `Game N` when none was given
    pub name: String,
    pub score: u32,
}

impl GameRecord {
    /// Default name for a game played without a player name
    pub fn default_name(game_number: u32) -> String {
        format!("Game {}", game_number)
    }
}

/// Append-only list of finished games
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreHistory {
    records: Vec<GameRecord>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: GameRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&GameRecord> {
        self.records.last()
    }

    /// Highest score so far; the earliest game wins ties
    pub fn best(&self) -> Option<&GameRecord> {
        self.records
            .iter()
            .fold(None, |best: Option<&GameRecord>, r| match best {
                Some(b) if b.score >= r.score => Some(b),
                _ => Some(r),
            })
    }

    /// Most recent `n` records, newest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &GameRecord> {
        self.records.iter().rev().take(n)
    }
}
