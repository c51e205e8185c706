//! Loop driver
//!
//! Owns the game, its RNG and the clock. Each frame runs the ticks that are
//! due, then hands one read-only [`Scene`] to the presenter.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{FixedTimestep, InputSource, Presenter};
use crate::highscores::HighScores;
use crate::scene::Scene;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::Tuning;

pub struct Driver<I, P> {
    state: GameState,
    rng: Pcg32,
    clock: FixedTimestep,
    input: I,
    presenter: P,
    high_scores: HighScores,
    /// Ticks executed by this driver, across restarts
    ticks_run: u64,
    max_ticks: Option<u64>,
}

impl<I: InputSource, P: Presenter> Driver<I, P> {
    pub fn new(seed: u64, tuning: Tuning, input: I, presenter: P) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::with_tuning(tuning, &mut rng);
        log::info!("New session with seed {}", seed);
        Self {
            state,
            rng,
            clock: FixedTimestep::default(),
            input,
            presenter,
            high_scores: HighScores::new(),
            ticks_run: 0,
            max_ticks: None,
        }
    }

    pub fn from_settings(settings: &Settings, input: I, presenter: P) -> Self {
        let mut driver = Self::new(
            settings.effective_seed(),
            Tuning::default(),
            input,
            presenter,
        );
        driver.max_ticks = settings.max_ticks;
        driver
    }

    pub fn with_tick_limit(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Tick limit reached or the input source asked to quit
    pub fn should_quit(&self) -> bool {
        self.input.quit_requested() || self.max_ticks.is_some_and(|max| self.ticks_run >= max)
    }

    /// Poll input and run exactly one simulation tick
    pub fn step(&mut self) -> Vec<GameEvent> {
        let input = self.input.poll(&self.state);
        let events = tick(&mut self.state, &input, &mut self.rng);
        self.ticks_run += 1;

        for event in &events {
            if let GameEvent::GameOver { .. } = event {
                let rank = self.high_scores.add_score(
                    self.state.score,
                    self.state.level,
                    self.state.time_ticks,
                );
                match rank {
                    Some(rank) => log::info!(
                        "Final score {} ranks #{} this session",
                        self.state.score,
                        rank
                    ),
                    None => log::info!("Final score {}", self.state.score),
                }
            }
        }
        events
    }

    /// Run the ticks due for `dt` seconds, then present once.
    /// Returns false once the loop should stop.
    pub fn run_frame(&mut self, dt: f32) -> bool {
        if self.should_quit() {
            return false;
        }
        let due = self.clock.advance(dt);
        for _ in 0..due {
            if self.should_quit() {
                break;
            }
            self.step();
        }
        let scene = Scene::capture(&self.state);
        self.presenter.present(&scene);
        !self.should_quit()
    }

    /// Drive frames until quit. With `realtime` the loop sleeps to hold the
    /// tick rate; otherwise every frame is exactly one tick long.
    pub fn run(&mut self, realtime: bool) {
        let step = self.clock.step();
        let frame = Duration::from_secs_f32(step);
        let mut last = Instant::now();

        loop {
            let dt = if realtime {
                let now = Instant::now();
                let dt = now.duration_since(last).as_secs_f32();
                last = now;
                dt
            } else {
                step
            };

            if !self.run_frame(dt) {
                break;
            }

            if realtime {
                let spent = last.elapsed();
                if spent < frame {
                    std::thread::sleep(frame - spent);
                }
            }
        }

        log::info!(
            "Session ended after {} ticks; best score {}",
            self.ticks_run,
            self.high_scores.top_score().unwrap_or(self.state.score)
        );
    }
}
