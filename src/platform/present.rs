//! Headless presenters
//!
//! A real frontend draws the [`Scene`]; these stand in for it on the
//! terminal and in tests.

use std::io::Write;

use super::Presenter;
use crate::scene::Scene;

/// Writes each scene as one line of JSON
pub struct JsonLines<W: Write> {
    out: W,
    failed: bool,
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonLines<W> {
    fn present(&mut self, scene: &Scene) {
        if self.failed {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, scene)
            .map_err(std::io::Error::from)
            .and_then(|_| self.out.write_all(b"\n"));
        if let Err(e) = result {
            // Usually a closed pipe; stop writing instead of spamming
            log::warn!("Scene output disabled: {}", e);
            self.failed = true;
        }
    }
}

/// Logs the HUD every `interval` simulation ticks
#[derive(Debug, Clone)]
pub struct HudLogger {
    interval: u64,
    last_bucket: Option<u64>,
}

impl HudLogger {
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            last_bucket: None,
        }
    }
}

impl Presenter for HudLogger {
    fn present(&mut self, scene: &Scene) {
        if self.interval == 0 {
            return;
        }
        let bucket = scene.time_ticks / self.interval;
        if self.last_bucket == Some(bucket) {
            return;
        }
        self.last_bucket = Some(bucket);
        let hud = &scene.hud;
        log::info!(
            "{} | {} | {} | {:?} | enemies={} bullets={} particles={}",
            hud.score_text(),
            hud.lives_text(),
            hud.level_text(),
            hud.phase,
            scene.enemies.len(),
            scene.bullets.len(),
            scene.particles.len()
        );
    }
}

impl<P: Presenter> Presenter for Option<P> {
    fn present(&mut self, scene: &Scene) {
        if let Some(presenter) = self {
            presenter.present(scene);
        }
    }
}

impl<A: Presenter, B: Presenter> Presenter for (A, B) {
    fn present(&mut self, scene: &Scene) {
        self.0.present(scene);
        self.1.present(scene);
    }
}
