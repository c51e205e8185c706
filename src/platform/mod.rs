//! Platform abstraction layer
//!
//! Handles everything outside the simulation:
//! - Time/ticks (fixed-step accumulator)
//! - Input sources and presenters (the contracts a frontend implements)
//! - The loop driver that ties them together

pub mod clock;
pub mod driver;
pub mod present;

pub use clock::FixedTimestep;
pub use driver::Driver;
pub use present::{HudLogger, JsonLines};

use crate::scene::Scene;
use crate::sim::{GameState, TickInput};

/// Supplies one input snapshot per simulation tick
pub trait InputSource {
    /// Input for the next tick. The state is read-only.
    fn poll(&mut self, state: &GameState) -> TickInput;

    /// Checked once per frame; returning true ends the loop
    fn quit_requested(&self) -> bool {
        false
    }
}

/// Draws (or otherwise consumes) one scene per frame
pub trait Presenter {
    fn present(&mut self, scene: &Scene);
}

/// Input source that never presses anything
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl InputSource for Idle {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        TickInput::default()
    }
}
