//! Fixed-step accumulator
//!
//! Converts variable frame times into a whole number of simulation ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    max_substeps: u32,
    max_frame_dt: f32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            max_frame_dt: MAX_FRAME_DT,
            accumulator: 0.0,
        }
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add a frame's elapsed time and return how many ticks are due.
    ///
    /// Long frames are clamped, and anything beyond `max_substeps` ticks is
    /// dropped rather than carried, so a stall never causes a catch-up burst.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.accumulator += dt.min(self.max_frame_dt);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }

    /// Fraction of a tick left in the accumulator, for interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_step() {
        let mut clock = FixedTimestep::new(0.0625, 8);
        assert_eq!(clock.advance(0.0625), 1);
        assert_eq!(clock.advance(0.03125), 0);
        assert!((clock.alpha() - 0.5).abs() < 1e-6);
        assert_eq!(clock.advance(0.03125), 1);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut clock = FixedTimestep::new(0.03125, 8);
        // 5 seconds of stall only accounts for 0.1 s, three whole ticks
        assert_eq!(clock.advance(5.0), 3);
    }

    #[test]
    fn test_substeps_capped() {
        let mut clock = FixedTimestep::new(0.01, 3);
        assert_eq!(clock.advance(0.1), 3);
        assert!(clock.alpha() <= 1.0);
        // The backlog was discarded, not carried over
        assert!(clock.advance(0.005) <= 1);
    }

    #[test]
    fn test_ignores_bad_deltas() {
        let mut clock = FixedTimestep::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f32::NAN), 0);
        // Rejected deltas never reach the accumulator
        assert_eq!(clock.alpha(), 0.0);
    }
}
