pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod effect_adapter;
pub mod state;

pub use app_state::WalletApp;
pub use components::*;
