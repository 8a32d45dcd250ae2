//! # Note Animation State
//!
//! Cosmetic displacement of the note card after a swipe: the card moves
//! `offset` points in the swipe direction over `duration`, then returns to
//! rest over the same duration.
//!
//! The animation is fire-and-forget. It is sampled every frame from the
//! current time and never gates input; starting a new animation replaces the
//! running one (last write wins).

use shared::NoteMotion;

#[derive(Debug, Clone, Copy, PartialEq)]
struct RunningAnimation {
    motion: NoteMotion,
    started_at: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteAnimationState {
    offset: f32,
    /// Duration of each half (out and back), in seconds
    half_duration: f64,
    running: Option<RunningAnimation>,
}

impl NoteAnimationState {
    pub fn new(offset: f32, duration_ms: u64) -> Self {
        Self {
            offset,
            half_duration: duration_ms as f64 / 1000.0,
            running: None,
        }
    }

    /// Start (or restart) the displacement at time `now` in seconds
    pub fn start(&mut self, motion: NoteMotion, now: f64) {
        self.running = Some(RunningAnimation { motion, started_at: now });
    }

    pub fn is_active(&self, now: f64) -> bool {
        match self.running {
            Some(running) => now - running.started_at < 2.0 * self.half_duration,
            None => false,
        }
    }

    /// Vertical displacement of the note card at time `now`
    pub fn offset_at(&self, now: f64) -> f32 {
        let Some(running) = self.running else {
            return 0.0;
        };
        if self.half_duration <= 0.0 {
            return 0.0;
        }

        let elapsed = (now - running.started_at).max(0.0);
        let progress = if elapsed < self.half_duration {
            elapsed / self.half_duration
        } else if elapsed < 2.0 * self.half_duration {
            1.0 - (elapsed - self.half_duration) / self.half_duration
        } else {
            0.0
        };

        running.motion.sign() * self.offset * progress as f32
    }

    /// Drop a finished animation so idle frames stop repainting
    pub fn settle(&mut self, now: f64) {
        if !self.is_active(now) {
            self.running = None;
        }
    }
}
