//! Vertical swipe classification for the note carousel.
//!
//! Screen coordinates grow downwards, so a negative vertical displacement is
//! an upward swipe. Displacements whose magnitude does not exceed the
//! threshold are ignored.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SWIPE_THRESHOLD: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    Up,
    Down,
}

/// Classifies a released drag by its vertical displacement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeClassifier {
    threshold: f32,
}

impl SwipeClassifier {
    pub fn new(threshold: f32) -> Self {
        Self { threshold: threshold.abs() }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a drag in progress has moved far enough to be claimed as a swipe
    pub fn should_claim(&self, dy: f32) -> bool {
        dy.abs() > self.threshold
    }

    /// One classification per release; `None` means the gesture is ignored
    pub fn classify(&self, dy: f32) -> Option<SwipeDirection> {
        if dy < -self.threshold {
            Some(SwipeDirection::Up)
        } else if dy > self.threshold {
            Some(SwipeDirection::Down)
        } else {
            None
        }
    }
}

impl Default for SwipeClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}
