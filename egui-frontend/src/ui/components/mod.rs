//! # UI Components Module
//!
//! ## Module Organization:
//! - `load_screen` - Note carousel with swipe gestures and the Load button
//! - `unload_screen` - Address card, balance card and the Unload button
//! - `modals` - Confirmation, amount entry and alert dialogs
//! - `styling` - Global egui style and drawing helpers
//! - `theme` - Color constants

pub mod load_screen;
pub mod modals;
pub mod styling;
pub mod theme;
pub mod unload_screen;

pub use styling::{draw_card_container, draw_screen_background, setup_wallet_style, styled_button};
pub use theme::*;
