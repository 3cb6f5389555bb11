//! Playback over a materialized run
//!
//! Runs are recorded eagerly, so playback is only an index into a
//! `Vec<Frame>`. [`advance`] is the pure timing rule; [`Player`] wraps it with
//! the play/pause/step/restart state the front end drives.

use crate::constants::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
use crate::frame::Frame;
use std::time::Duration;

/// Autoplay rate in steps per second, clamped to `MIN_SPEED..=MAX_SPEED`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u32);

impl Speed {
    pub fn new(steps_per_second: u32) -> Self {
        Speed(steps_per_second.clamp(MIN_SPEED, MAX_SPEED))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Time between two autoplay steps
    pub fn interval(self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.0))
    }

    pub fn faster(self) -> Self {
        Speed::new(self.0.saturating_add(1))
    }

    pub fn slower(self) -> Self {
        Speed::new(self.0.saturating_sub(1))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::new(DEFAULT_SPEED)
    }
}

/// Index reached after playing for `elapsed` from `current` at `speed`.
///
/// Never moves backwards and never passes the last frame.
pub fn advance(frames: &[Frame], current: usize, elapsed: Duration, speed: Speed) -> usize {
    let Some(last) = frames.len().checked_sub(1) else {
        return 0;
    };
    let steps = elapsed.as_millis() / speed.interval().as_millis().max(1);
    let steps = usize::try_from(steps).unwrap_or(usize::MAX);
    current.saturating_add(steps).min(last)
}

/// Cursor over a run's frames plus autoplay state
#[derive(Debug, Clone)]
pub struct Player {
    frames: Vec<Frame>,
    index: usize,
    playing: bool,
    speed: Speed,
    /// Autoplay time not yet spent on a step
    pending: Duration,
}

impl Player {
    pub fn new(frames: Vec<Frame>, speed: Speed) -> Self {
        Player {
            frames,
            index: 0,
            playing: false,
            speed,
            pending: Duration::ZERO,
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Frame> {
        self.frames.get(self.index)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn at_end(&self) -> bool {
        self.index + 1 >= self.frames.len()
    }

    /// Start autoplay; a run already at its last frame stays paused
    pub fn play(&mut self) {
        self.playing = !self.at_end();
        self.pending = Duration::ZERO;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Move one frame forward; returns whether the index changed
    pub fn step_forward(&mut self) -> bool {
        self.pause();
        if self.at_end() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move one frame back; returns whether the index changed
    pub fn step_backward(&mut self) -> bool {
        self.pause();
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn restart(&mut self) {
        self.pause();
        self.index = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.pause();
        self.index = self.frames.len().saturating_sub(1);
    }

    /// Feed elapsed wall time to autoplay; returns whether the index changed
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.playing {
            return false;
        }
        self.pending += elapsed;
        let next = advance(&self.frames, self.index, self.pending, self.speed);
        let moved = next - self.index;
        if moved > 0 {
            let spent = self.speed.interval() * u32::try_from(moved).unwrap_or(u32::MAX);
            self.pending = self.pending.saturating_sub(spent);
            self.index = next;
        }
        if self.at_end() {
            self.playing = false;
            self.pending = Duration::ZERO;
        }
        moved > 0
    }
}
