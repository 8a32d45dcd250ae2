use serde::{Deserialize, Serialize};
use std::fmt;

pub mod address;
pub mod amount_entry;
pub mod balance_adjuster;
pub mod config;
pub mod denominations;
pub mod effects;
pub mod gesture;

pub use address::abbreviate_address;
pub use amount_entry::{AmountEntry, AmountEntryEvent, AmountEntryState};
pub use balance_adjuster::{BalanceAdjuster, BalanceAdjusterState, BalanceEvent};
pub use config::{ConfigError, WalletConfig};
pub use denominations::{DenominationError, Denominations};
pub use effects::{dispatch, Effect, EffectHandler, Transition};
pub use gesture::{SwipeClassifier, SwipeDirection};

/// Screens reachable through the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Note carousel screen for loading money into the wallet
    Load,
    /// Amount entry screen for unloading money from the wallet
    Unload,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Load => "Load",
            Screen::Unload => "Unload",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Payload handed to the navigator when a screen confirms a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub target: Screen,
    /// Opaque wallet address, passed through unchanged
    pub public_address: String,
    /// Confirmed amount in whole currency units, when the screen produced one
    pub amount: Option<u64>,
}

/// Kind of alert shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    /// A guard rejected the user's action
    ActionNotAllowed,
}

/// Blocking single-button alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn not_allowed(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::ActionNotAllowed,
            title: "Action not allowed".to_string(),
            message: message.into(),
        }
    }
}

/// Direction of the cosmetic note displacement after a balance change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteMotion {
    Up,
    Down,
}

impl NoteMotion {
    /// Sign of the vertical displacement in screen coordinates (y grows downwards)
    pub fn sign(&self) -> f32 {
        match self {
            NoteMotion::Up => -1.0,
            NoteMotion::Down => 1.0,
        }
    }
}

/// Format a whole-unit amount with its currency symbol, e.g. "₹10"
pub fn format_amount(currency_symbol: &str, amount: u64) -> String {
    format!("{}{}", currency_symbol, amount)
}
