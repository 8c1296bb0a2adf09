//! GameView: maps a `core::GameSnapshot` into lines of colored text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, ScoreHistory};
use crate::types::{Color, SessionState, COLUMNS, ROWS};

/// A run of text drawn in one color (`None` = terminal default)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Option<Color>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// One terminal row
pub type Line = Vec<Span>;

/// Everything besides the snapshot that the side panel shows
#[derive(Debug, Clone, Copy)]
pub struct ViewStatus<'a> {
    pub history: &'a ScoreHistory,
    pub player: Option<&'a str>,
    /// The last game ended by topping out (cleared again on start)
    pub game_over: bool,
}

/// Banner text for the current state
pub fn status_text(snap: &GameSnapshot, game_over: bool) -> &'static str {
    match snap.state {
        SessionState::Running => "",
        SessionState::Paused => "Game Paused",
        SessionState::Idle if game_over => "Game Over",
        SessionState::Idle => "Press Enter to start",
    }
}

/// Number of finished games listed in the side panel
const HISTORY_ROWS: usize = 8;

/// Text layout of the board and side panel
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: usize,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: usize) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render the board with a border and the side panel to its right
    pub fn render(&self, snap: &GameSnapshot, status: &ViewStatus<'_>) -> Vec<Line> {
        let panel = self.side_panel(snap, status);
        let border = format!("+{}+", "-".repeat(COLUMNS as usize * self.cell_w));

        let mut lines = Vec::with_capacity(ROWS as usize + 2);
        lines.push(vec![Span::plain(border.clone())]);
        for row in 0..ROWS as i8 {
            let mut line = vec![Span::plain("|")];
            for col in 0..COLUMNS as i8 {
                line.push(self.cell_span(snap.code_at(col, row)));
            }
            line.push(Span::plain("|"));
            if let Some(text) = panel.get(row as usize) {
                line.push(Span::plain(format!("  {}", text)));
            }
            lines.push(line);
        }
        lines.push(vec![Span::plain(border)]);
        lines
    }

    fn cell_span(&self, code: u8) -> Span {
        match Color::from_code(code) {
            Some(color) => Span::colored("#".repeat(self.cell_w), color),
            None => Span::plain(format!("{:<width$}", ".", width = self.cell_w)),
        }
    }

    fn side_panel(&self, snap: &GameSnapshot, status: &ViewStatus<'_>) -> Vec<String> {
        let mut panel = vec![
            format!("Score  {}", snap.score),
            format!("Speed  {}ms", snap.interval_ms),
            format!("Games  {}", snap.game_number),
            format!("Player {}", status.player.unwrap_or("-")),
            String::new(),
            status_text(snap, status.game_over).to_string(),
            String::new(),
        ];

        if !status.history.is_empty() {
            panel.push("History".to_string());
            for record in status.history.recent(HISTORY_ROWS) {
                panel.push(format!("{:<12} {:>4}", record.name, record.score));
            }
            if let Some(best) = status.history.best() {
                panel.push(format!("Best: {} ({})", best.score, best.name));
            }
            panel.push(String::new());
        }

        panel.push("a/d/s  move".to_string());
        panel.push("enter  start".to_string());
        panel.push("p      pause".to_string());
        panel.push("r      retry".to_string());
        panel.push("q      quit".to_string());
        panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRecord, GameSession};

    fn text(line: &Line) -> String {
        line.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_status_text() {
        let mut snap = GameSnapshot::default();
        assert_eq!(status_text(&snap, false), "Press Enter to start");
        assert_eq!(status_text(&snap, true), "Game Over");
        snap.state = SessionState::Paused;
        assert_eq!(status_text(&snap, true), "Game Paused");
        snap.state = SessionState::Running;
        assert_eq!(status_text(&snap, false), "");
    }

    #[test]
    fn test_history_listed_newest_first() {
        let mut session = GameSession::new(1);
        session.start();
        session.retry();
        session.set_player_name("Ada");
        session.start();
        session.retry();

        let status = ViewStatus {
            history: session.history(),
            player: session.player_name(),
            game_over: false,
        };
        let lines = GameView::default().render(&session.snapshot(), &status);
        let all: Vec<String> = lines.iter().map(text).collect();
        let row = |name: &str| format!("{:<12} {:>4}", name, 0);
        let ada = all.iter().position(|l| l.contains(&row("Ada"))).unwrap();
        let game1 = all
            .iter()
            .position(|l| l.contains(&row(&GameRecord::default_name(1))))
            .unwrap();
        assert!(ada < game1);
        assert!(all.iter().any(|l| l.contains("Player Ada")));
    }
}
