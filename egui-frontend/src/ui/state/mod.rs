//! # State Modules
//!
//! - `alert_state` - Queue of blocking alerts
//! - `animation_state` - Cosmetic note displacement timeline
//! - `screen_state` - Per-screen state owned by the mounted screen

pub mod alert_state;
pub mod animation_state;
pub mod screen_state;

pub use alert_state::AlertState;
pub use animation_state::NoteAnimationState;
pub use screen_state::{ActiveScreen, LoadScreenState, UnloadScreenState};
