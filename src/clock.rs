use serde::{Deserialize, Serialize};

/// Elapsed play time, advanced by frame deltas from the host.
///
/// Only whole seconds are reported; the remainder carries over to the
/// next tick.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GameClock {
    elapsed_secs: u64,
    since_last_second: f64,
    paused: bool,
    stopped: bool,
}

impl GameClock {
    pub fn new() -> GameClock {
        GameClock::default()
    }

    /// Returns the number of whole seconds added by this tick.
    pub fn tick(&mut self, dt: f64) -> u64 {
        if self.paused || self.stopped || !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.since_last_second += dt;
        let whole = self.since_last_second.floor();
        self.since_last_second -= whole;
        let added = whole as u64;
        self.elapsed_secs = self.elapsed_secs.saturating_add(added);
        added
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freezes the clock until [`GameClock::reset`].
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn reset(&mut self) {
        *self = GameClock::default();
    }
}
