//! Game session module - the engine's public contract
//!
//! Ties the board, the active piece, the piece source and the speed ramp
//! together. The external driver owns the timer: it calls [`GameSession::on_tick`]
//! every [`GameSession::interval_ms`] while the session is running, and forwards
//! player commands to [`GameSession::handle_direction`] or
//! [`GameSession::apply_action`]. Nothing blocks and nothing runs concurrently.

use log::{debug, info, trace};

use crate::active::{ActivePiece, MoveDelta};
use crate::board::Board;
use crate::history::{GameRecord, ScoreHistory};
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{SpeedRamp, SCORE_PER_PIECE};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{CellPos, Color, Direction, GameAction, SessionState, ShapeKind};

/// What a tick changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session is not running; nothing happened
    Ignored,
    /// A new piece appeared above the grid and the score went up
    Spawned {
        kind: ShapeKind,
        score: u32,
        /// Set when the speed ramp changed the interval; the timer must be rescheduled
        new_interval_ms: Option<u32>,
    },
    /// The active piece fell one row
    Moved(MoveDelta),
    /// The active piece could not fall and was committed to the board
    Locked { cells: [CellPos; 4], color: Color },
    /// The active piece topped out; the game was recorded and the session is idle
    GameOver(GameRecord),
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    board: Board,
    active: Option<ActivePiece>,
    source: R,
    ramp: SpeedRamp,
    state: SessionState,
    score: u32,
    /// Number of finished games in this session
    game_number: u32,
    interval_ms: u32,
    player_name: Option<String>,
    history: ScoreHistory,
}

impl GameSession<SimpleRng> {
    /// Create an idle session drawing pieces from a seeded LCG
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl Default for GameSession<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: PieceSource> GameSession<R> {
    /// Create an idle session drawing pieces from `source`
    pub fn with_source(source: R) -> Self {
        let ramp = SpeedRamp::default();
        Self {
            board: Board::new(),
            active: None,
            source,
            ramp,
            state: SessionState::Idle,
            score: 0,
            game_number: 0,
            interval_ms: ramp.base_ms,
            player_name: None,
            history: ScoreHistory::new(),
        }
    }

    /// Replace the speed ramp (takes effect from the next start)
    pub fn with_ramp(mut self, ramp: SpeedRamp) -> Self {
        self.ramp = ramp;
        if self.state == SessionState::Idle {
            self.interval_ms = ramp.base_ms;
        }
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    /// Whether the driver's timer should be running
    pub fn is_ticking(&self) -> bool {
        self.state.is_ticking()
    }

    /// Name used for the next finished games; blank restores `Game N` naming
    pub fn set_player_name(&mut self, name: &str) {
        let name = name.trim();
        self.player_name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
    }

    /// Idle -> Running, with the timer at the ramp's base interval
    pub fn start(&mut self) -> SessionState {
        if self.state == SessionState::Idle {
            self.state = SessionState::Running;
            self.interval_ms = self.ramp.base_ms;
            info!(
                "game {} started (interval {}ms)",
                self.game_number + 1,
                self.interval_ms
            );
        }
        self.state
    }

    /// Running -> Paused; board and piece are frozen
    pub fn pause(&mut self) -> SessionState {
        if self.state == SessionState::Running {
            self.state = SessionState::Paused;
            info!("paused at score {}", self.score);
        }
        self.state
    }

    /// Paused -> Running, keeping the current interval
    pub fn resume(&mut self) -> SessionState {
        if self.state == SessionState::Paused {
            self.state = SessionState::Running;
            info!("resumed (interval {}ms)", self.interval_ms);
        }
        self.state
    }

    /// Abandon the current game exactly as a loss would, then go idle
    pub fn retry(&mut self) -> SessionState {
        self.end_game();
        self.state
    }

    /// End the game in progress and record its score
    ///
    /// Returns `None` when no game is in progress.
    pub fn end_game(&mut self) -> Option<GameRecord> {
        match self.state {
            SessionState::Idle => None,
            SessionState::Running | SessionState::Paused => Some(self.finish_game()),
        }
    }

    fn finish_game(&mut self) -> GameRecord {
        self.game_number += 1;
        let name = self
            .player_name
            .clone()
            .unwrap_or_else(|| GameRecord::default_name(self.game_number));
        let record = GameRecord {
            game_number: self.game_number,
            name,
            score: self.score,
        };
        info!(
            "game {} over: {} scored {}",
            record.game_number, record.name, record.score
        );
        self.history.push(record.clone());

        self.score = 0;
        self.board.clear();
        self.active = None;
        self.state = SessionState::Idle;
        record
    }

    /// Player movement command
    ///
    /// Uses the same validator as gravity. Returns the changed cells, or `None`
    /// when the move was rejected or the session is not running.
    pub fn handle_direction(&mut self, direction: Direction) -> Option<MoveDelta> {
        if self.state != SessionState::Running {
            return None;
        }
        let piece = self.active.as_mut()?;
        let delta = piece.try_move(&self.board, direction)?;
        trace!("moved {} to {:?}", direction.as_str(), piece.cells());
        Some(delta)
    }

    /// Timer callback
    ///
    /// With no active piece, spawns one and scores it. Otherwise the piece
    /// falls one row; if it cannot, it either locks (fully on the grid) or
    /// ends the game (any cell still above the grid).
    pub fn on_tick(&mut self) -> TickOutcome {
        if self.state != SessionState::Running {
            return TickOutcome::Ignored;
        }

        let Some(mut piece) = self.active else {
            return self.spawn_piece();
        };

        if let Some(delta) = piece.try_move(&self.board, Direction::Down) {
            self.active = Some(piece);
            return TickOutcome::Moved(delta);
        }

        if piece.is_above_grid() {
            debug!("{} piece topped out at {:?}", piece.kind().as_str(), piece.cells());
            return TickOutcome::GameOver(self.finish_game());
        }

        self.board.occupy_piece(&piece);
        self.active = None;
        debug!("locked {} piece at {:?}", piece.kind().as_str(), piece.cells());
        TickOutcome::Locked {
            cells: *piece.cells(),
            color: piece.color(),
        }
    }

    fn spawn_piece(&mut self) -> TickOutcome {
        let kind = self.source.next_shape();
        self.active = Some(ActivePiece::spawn(kind));
        self.score += SCORE_PER_PIECE;

        let mut new_interval_ms = None;
        if self.ramp.is_step(self.score) {
            let next = self.ramp.interval_ms(self.score);
            if next != self.interval_ms {
                debug!("speed up: {}ms -> {}ms", self.interval_ms, next);
                self.interval_ms = next;
                new_interval_ms = Some(next);
            }
        }

        debug!("spawned {} piece, score {}", kind.as_str(), self.score);
        TickOutcome::Spawned {
            kind,
            score: self.score,
            new_interval_ms,
        }
    }

    /// Apply a driver command
    ///
    /// Returns whether the command changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::MoveDown => action
                .direction()
                .and_then(|direction| self.handle_direction(direction))
                .is_some(),
            GameAction::Start => {
                let before = self.state;
                self.start() != before
            }
            GameAction::TogglePause => match self.state {
                SessionState::Running => {
                    self.pause();
                    true
                }
                SessionState::Paused => {
                    self.resume();
                    true
                }
                SessionState::Idle => false,
            },
            GameAction::Retry => self.end_game().is_some(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.state = self.state;
        out.score = self.score;
        out.game_number = self.game_number;
        out.interval_ms = self.interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
