//! Scoring module - piece count score and the speed ramp
//!
//! A game scores one point per spawned piece. Every `SPEED_RAMP_EVERY` points the
//! tick interval shrinks by `SPEED_STEP_MS`, down to `MIN_INTERVAL_MS`.

use crate::types::{BASE_INTERVAL_MS, MIN_INTERVAL_MS, SPEED_RAMP_EVERY, SPEED_STEP_MS};

/// Points awarded for each spawned piece
pub const SCORE_PER_PIECE: u32 = 1;

/// Parameters of the interval ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedRamp {
    pub base_ms: u32,
    pub step_ms: u32,
    pub every: u32,
    pub floor_ms: u32,
}

impl SpeedRamp {
    /// Tick interval for a given score
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::SpeedRamp;
    ///
    /// let ramp = SpeedRamp::default();
    /// assert_eq!(ramp.interval_ms(0), 1000);
    /// assert_eq!(ramp.interval_ms(9), 1000);
    /// assert_eq!(ramp.interval_ms(10), 900);
    /// assert_eq!(ramp.interval_ms(500), 100);
    /// ```
    pub fn interval_ms(&self, score: u32) -> u32 {
        let steps = score / self.every.max(1);
        self.base_ms
            .saturating_sub(steps.saturating_mul(self.step_ms))
            .max(self.floor_ms)
    }

    /// Whether reaching `score` moves the ramp to its next step
    pub fn is_step(&self, score: u32) -> bool {
        score > 0 && score % self.every.max(1) == 0
    }
}

impl Default for SpeedRamp {
    fn default() -> Self {
        Self {
            base_ms: BASE_INTERVAL_MS,
            step_ms: SPEED_STEP_MS,
            every: SPEED_RAMP_EVERY,
            floor_ms: MIN_INTERVAL_MS,
        }
    }
}

/// Tick interval for `score` under the default ramp
pub fn speed_ramp(score: u32) -> u32 {
    SpeedRamp::default().interval_ms(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ramp_steps() {
        assert_eq!(speed_ramp(0), 1000);
        assert_eq!(speed_ramp(1), 1000);
        assert_eq!(speed_ramp(10), 900);
        assert_eq!(speed_ramp(19), 900);
        assert_eq!(speed_ramp(20), 800);
        assert_eq!(speed_ramp(90), 100);
    }

    #[test]
    fn test_ramp_floor() {
        assert_eq!(speed_ramp(100), MIN_INTERVAL_MS);
        assert_eq!(speed_ramp(u32::MAX), MIN_INTERVAL_MS);
    }

    #[test]
    fn test_each_step_is_exactly_one_step_ms() {
        for score in (10..=90).step_by(10) {
            assert_eq!(speed_ramp(score - 1) - speed_ramp(score), SPEED_STEP_MS);
        }
    }

    #[test]
    fn test_is_step() {
        let ramp = SpeedRamp::default();
        assert!(!ramp.is_step(0));
        assert!(!ramp.is_step(9));
        assert!(ramp.is_step(10));
        assert!(ramp.is_step(30));
    }

    #[test]
    fn test_custom_ramp() {
        let ramp = SpeedRamp {
            base_ms: 500,
            step_ms: 50,
            every: 5,
            floor_ms: 200,
        };
        assert_eq!(ramp.interval_ms(4), 500);
        assert_eq!(ramp.interval_ms(5), 450);
        assert_eq!(ramp.interval_ms(50), 200);
    }
}
