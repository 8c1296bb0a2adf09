//! Tick driver - a session paired with the clock that paces it
//!
//! Front ends feed it wall-clock time and player commands. Time is charged to
//! the state the session was in while it passed: call [`TickDriver::elapse`]
//! with the time spent waiting for input *before* applying the command that
//! input produced. A start or resume then always begins with a full interval.

use log::debug;

use crate::clock::TickClock;
use crate::rng::{PieceSource, SimpleRng};
use crate::session::{GameSession, TickOutcome};
use crate::types::{GameAction, SessionState};

/// Session plus tick clock, kept in step
#[derive(Debug, Clone)]
pub struct TickDriver<R = SimpleRng> {
    session: GameSession<R>,
    clock: TickClock,
    /// The last game ended by topping out (cleared again on start)
    game_over: bool,
}

impl<R: PieceSource> TickDriver<R> {
    pub fn new(session: GameSession<R>) -> Self {
        let mut clock = TickClock::new(session.interval_ms());
        if session.is_ticking() {
            clock.start(session.interval_ms());
        }
        Self {
            session,
            clock,
            game_over: false,
        }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Milliseconds until the next tick, `None` while the session is not running
    pub fn next_tick_in(&self) -> Option<u32> {
        self.clock
            .is_running()
            .then(|| self.clock.remaining_ms())
    }

    /// Let `elapsed_ms` pass and run every tick that fell due
    ///
    /// Returns the number of ticks run.
    pub fn elapse(&mut self, elapsed_ms: u32) -> usize {
        let mut ticks = 0;
        let mut due = self.clock.advance(elapsed_ms);
        while due {
            ticks += 1;
            match self.session.on_tick() {
                TickOutcome::Spawned {
                    new_interval_ms: Some(ms),
                    ..
                } => self.clock.reschedule(ms),
                TickOutcome::GameOver(_) => {
                    self.game_over = true;
                    self.clock.stop();
                }
                _ => {}
            }
            due = self.clock.poll();
        }
        ticks
    }

    /// Apply a player command, starting or stopping the clock to follow it
    pub fn apply(&mut self, action: GameAction) -> bool {
        let before = self.session.state();
        let changed = self.session.apply_action(action);
        let now = self.session.state();

        if now != before {
            if before == SessionState::Idle {
                self.game_over = false;
            }
            if now.is_ticking() {
                // A restarted timer waits a full interval.
                self.clock.start(self.session.interval_ms());
            } else {
                self.clock.stop();
            }
            debug!("clock follows {:?} -> {:?}", before, now);
        }
        changed
    }

    pub fn set_player_name(&mut self, name: &str) {
        self.session.set_player_name(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;
    use crate::types::{ShapeKind, BASE_INTERVAL_MS};

    fn driver(kind: ShapeKind) -> TickDriver<ScriptedSource> {
        TickDriver::new(GameSession::with_source(ScriptedSource::repeat(kind)))
    }

    #[test]
    fn test_wait_before_start_is_not_charged() {
        let mut driver = driver(ShapeKind::T);

        // Time spent idle waiting for the key press.
        assert_eq!(driver.elapse(200), 0);
        assert!(driver.apply(GameAction::Start));
        assert_eq!(driver.next_tick_in(), Some(BASE_INTERVAL_MS));

        assert_eq!(driver.elapse(BASE_INTERVAL_MS - 1), 0);
        assert_eq!(driver.session().score(), 0);
        assert_eq!(driver.elapse(1), 1);
        assert_eq!(driver.session().score(), 1);
    }

    #[test]
    fn test_resume_waits_full_interval() {
        let mut driver = driver(ShapeKind::T);
        driver.apply(GameAction::Start);
        assert_eq!(driver.elapse(BASE_INTERVAL_MS), 1);
        driver.elapse(600);

        assert!(driver.apply(GameAction::TogglePause));
        assert_eq!(driver.next_tick_in(), None);
        assert_eq!(driver.elapse(5000), 0);

        assert!(driver.apply(GameAction::TogglePause));
        assert_eq!(driver.next_tick_in(), Some(BASE_INTERVAL_MS));
    }

    #[test]
    fn test_rejected_command_leaves_clock_alone() {
        let mut driver = driver(ShapeKind::T);
        driver.apply(GameAction::Start);
        driver.elapse(400);

        assert!(!driver.apply(GameAction::Start));
        assert_eq!(driver.next_tick_in(), Some(BASE_INTERVAL_MS - 400));
    }

    #[test]
    fn test_ramp_reschedules_clock() {
        let mut driver = driver(ShapeKind::I);
        driver.apply(GameAction::Start);
        while driver.session().score() < 10 {
            driver.elapse(100);
        }
        assert_eq!(driver.clock().interval_ms(), BASE_INTERVAL_MS - 100);
        assert_eq!(driver.clock().interval_ms(), driver.session().interval_ms());
    }

    #[test]
    fn test_game_over_stops_clock_until_start() {
        let mut driver = driver(ShapeKind::I);
        driver.set_player_name("Kim");
        driver.apply(GameAction::Start);
        driver.elapse(10_000_000);

        assert!(driver.game_over());
        assert_eq!(driver.next_tick_in(), None);
        assert_eq!(driver.session().state(), SessionState::Idle);
        assert_eq!(driver.session().history().last().map(|r| r.name.as_str()), Some("Kim"));

        assert!(driver.apply(GameAction::Start));
        assert!(!driver.game_over());
        assert_eq!(driver.next_tick_in(), Some(BASE_INTERVAL_MS));
    }
}
