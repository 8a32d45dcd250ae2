//! # App State Module
//!
//! Central application state for the wallet and the glue between user input
//! and the screen state machines.
//!
//! ## Key Types:
//! - `WalletApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` / `from_config()` - Initialize the app and mount the Load screen
//! - `handle_balance_event()` - Apply a Load screen event and dispatch its effects
//! - `handle_amount_event()` - Apply an Unload screen event and dispatch its effects
//! - `navigate()` - Replace the mounted screen, discarding its state
//!
//! ## Input Blocking:
//! While an alert is pending, screen events are dropped. The alert has to be
//! acknowledged first, the same way a native modal alert would behave.

use anyhow::Result;
use log::{debug, info, warn};
use shared::{
    dispatch, AmountEntryEvent, BalanceAdjuster, BalanceEvent, NavigationRequest, Screen, WalletConfig,
};

use crate::ui::effect_adapter::ScreenEffects;
use crate::ui::state::{ActiveScreen, AlertState, LoadScreenState, NoteAnimationState, UnloadScreenState};

/// Main application struct for the egui wallet
pub struct WalletApp {
    pub config: WalletConfig,

    /// Load screen template; mounted per navigation with the payload's address
    load_template: BalanceAdjuster,

    pub screen: ActiveScreen,
    pub alerts: AlertState,
}

impl WalletApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: WalletConfig) -> Result<Self> {
        info!("🚀 Initializing WalletApp");
        crate::ui::setup_wallet_style(&cc.egui_ctx);
        Self::from_config(config)
    }

    /// Build the app without an egui context; the Load screen is mounted first
    pub fn from_config(config: WalletConfig) -> Result<Self> {
        let load_template = config.balance_adjuster()?;
        let screen = ActiveScreen::Load(Self::mount_load(&config, load_template.clone()));

        info!(
            "Mounted {} screen for {}",
            screen.screen(),
            shared::abbreviate_address(&config.public_address)
        );

        Ok(Self {
            config,
            load_template,
            screen,
            alerts: AlertState::new(),
        })
    }

    fn mount_load(config: &WalletConfig, adjuster: BalanceAdjuster) -> LoadScreenState {
        LoadScreenState::new(
            adjuster,
            config.swipe_classifier(),
            NoteAnimationState::new(config.animation_offset, config.animation_duration_ms),
        )
    }

    pub fn current_screen(&self) -> Screen {
        self.screen.screen()
    }

    /// Apply a Load screen event at time `now` (seconds)
    pub fn handle_balance_event(&mut self, event: BalanceEvent, now: f64) {
        if self.alerts.is_blocking() {
            debug!("Ignoring {:?} while an alert is shown", event);
            return;
        }
        let ActiveScreen::Load(screen) = &mut self.screen else {
            warn!("Balance event {:?} outside the Load screen", event);
            return;
        };

        let transition = screen.adjuster.apply_event(screen.state, event);
        screen.state = transition.state;

        let mut effects = ScreenEffects::new(&mut self.alerts, Some(&mut screen.animation), now);
        dispatch(transition.effects, &mut effects);
        if let Some(request) = effects.into_navigation() {
            self.navigate(request);
        }
    }

    /// Apply an Unload screen event
    pub fn handle_amount_event(&mut self, event: AmountEntryEvent, now: f64) {
        if self.alerts.is_blocking() {
            debug!("Ignoring {:?} while an alert is shown", event);
            return;
        }
        let ActiveScreen::Unload(screen) = &mut self.screen else {
            warn!("Amount event {:?} outside the Unload screen", event);
            return;
        };

        let transition = screen.entry.apply_event(screen.state.clone(), event);
        screen.state = transition.state;

        let mut effects = ScreenEffects::new(&mut self.alerts, None, now);
        dispatch(transition.effects, &mut effects);
        if let Some(request) = effects.into_navigation() {
            self.navigate(request);
        }
    }

    /// Replace the mounted screen with a fresh instance of the target
    pub fn navigate(&mut self, request: NavigationRequest) {
        let payload = serde_json::to_string(&request).unwrap_or_else(|_| format!("{:?}", request));
        info!("🧭 Navigating {} -> {} with {}", self.screen.screen(), request.target, payload);

        self.screen = match request.target {
            Screen::Load => ActiveScreen::Load(Self::mount_load(
                &self.config,
                self.load_template.for_address(request.public_address),
            )),
            Screen::Unload => ActiveScreen::Unload(UnloadScreenState::new(
                shared::AmountEntry::new(request.public_address),
                request.amount,
            )),
        };
    }

    /// Dismiss the alert on screen
    pub fn acknowledge_alert(&mut self) {
        if let Some(alert) = self.alerts.acknowledge() {
            debug!("Acknowledged alert '{}'", alert.title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::balance_adjuster::{EMPTY_AMOUNT_MESSAGE, INSUFFICIENT_BALANCE_MESSAGE, LARGEST_NOTE_MESSAGE};
    use shared::NotificationKind;

    const ADDRESS: &str = "0x9f2c4e7b1a3d5f6e8c0b2a4d6f8e1c3b5a7d9e0f";

    fn create_test_app() -> WalletApp {
        WalletApp::from_config(WalletConfig {
            public_address: ADDRESS.to_string(),
            ..WalletConfig::default()
        })
        .unwrap()
    }

    fn load_screen(app: &WalletApp) -> &LoadScreenState {
        match &app.screen {
            ActiveScreen::Load(screen) => screen,
            ActiveScreen::Unload(_) => panic!("expected the Load screen"),
        }
    }

    fn unload_screen(app: &WalletApp) -> &UnloadScreenState {
        match &app.screen {
            ActiveScreen::Unload(screen) => screen,
            ActiveScreen::Load(_) => panic!("expected the Unload screen"),
        }
    }

    #[test]
    fn test_starts_on_load_screen() {
        let app = create_test_app();
        assert_eq!(app.current_screen(), Screen::Load);
        assert_eq!(load_screen(&app).selected_note(), 5);
        assert!(!app.alerts.is_blocking());
    }

    #[test]
    fn test_invalid_config_fails_startup() {
        let result = WalletApp::from_config(WalletConfig {
            initial_note_index: 99,
            ..WalletConfig::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_swipe_load_and_confirm() {
        let mut app = create_test_app();

        app.handle_balance_event(BalanceEvent::SwipeUp, 0.0);
        app.handle_balance_event(BalanceEvent::SwipeUp, 0.5);
        assert_eq!(load_screen(&app).state.balance, 10);
        assert!(load_screen(&app).animation.is_active(0.55));

        app.handle_balance_event(BalanceEvent::RequestConfirmation, 1.0);
        assert!(load_screen(&app).state.modal_visible);

        app.handle_balance_event(BalanceEvent::Confirm, 1.5);

        assert_eq!(app.current_screen(), Screen::Unload);
        let unload = unload_screen(&app);
        assert_eq!(unload.entry.public_address(), ADDRESS);
        assert_eq!(unload.loaded_amount, Some(10));

        let alert = app.alerts.current().unwrap();
        assert_eq!(alert.kind, NotificationKind::Success);
        assert_eq!(alert.message, "You entered: ₹10");
    }

    #[test]
    fn test_confirm_without_balance_stays_put() {
        let mut app = create_test_app();

        app.handle_balance_event(BalanceEvent::RequestConfirmation, 0.0);
        app.handle_balance_event(BalanceEvent::Confirm, 0.1);

        assert_eq!(app.current_screen(), Screen::Load);
        assert!(!load_screen(&app).state.modal_visible);
        assert_eq!(load_screen(&app).state.balance, 0);
        assert_eq!(app.alerts.current().unwrap().message, EMPTY_AMOUNT_MESSAGE);
    }

    #[test]
    fn test_largest_note_guard() {
        let mut app = create_test_app();

        for _ in 0..7 {
            app.handle_balance_event(BalanceEvent::SelectNext, 0.0);
        }
        assert_eq!(load_screen(&app).selected_note(), 2000);
        assert!(!app.alerts.is_blocking());

        app.handle_balance_event(BalanceEvent::SelectNext, 0.0);
        assert_eq!(load_screen(&app).selected_note(), 2000);
        assert_eq!(app.alerts.current().unwrap().message, LARGEST_NOTE_MESSAGE);
    }

    #[test]
    fn test_insufficient_balance_guard() {
        let mut app = create_test_app();

        app.handle_balance_event(BalanceEvent::SwipeUp, 0.0);
        app.handle_balance_event(BalanceEvent::SelectNext, 0.0);
        assert_eq!(load_screen(&app).selected_note(), 10);

        app.handle_balance_event(BalanceEvent::SwipeDown, 0.0);

        assert_eq!(load_screen(&app).state.balance, 5);
        assert_eq!(app.alerts.current().unwrap().message, INSUFFICIENT_BALANCE_MESSAGE);
    }

    #[test]
    fn test_input_is_blocked_while_alert_is_shown() {
        let mut app = create_test_app();

        app.handle_balance_event(BalanceEvent::SelectPrevious, 0.0);
        app.handle_balance_event(BalanceEvent::SelectPrevious, 0.0);
        assert!(app.alerts.is_blocking());

        app.handle_balance_event(BalanceEvent::SwipeUp, 0.0);
        assert_eq!(load_screen(&app).state.balance, 0);

        app.acknowledge_alert();
        assert!(!app.alerts.is_blocking());
        app.handle_balance_event(BalanceEvent::SwipeUp, 0.0);
        assert_eq!(load_screen(&app).state.balance, 2);
    }

    #[test]
    fn test_unload_round_trip_remounts_fresh_load_screen() {
        let mut app = create_test_app();
        app.handle_balance_event(BalanceEvent::SwipeUp, 0.0);
        app.handle_balance_event(BalanceEvent::SelectNext, 0.0);
        app.handle_balance_event(BalanceEvent::Confirm, 0.0);
        app.acknowledge_alert();
        assert_eq!(app.current_screen(), Screen::Unload);

        app.handle_amount_event(AmountEntryEvent::Open, 0.0);
        app.handle_amount_event(AmountEntryEvent::Submit, 0.0);
        assert_eq!(app.current_screen(), Screen::Unload);
        assert!(unload_screen(&app).state.modal_visible);
        app.acknowledge_alert();

        app.handle_amount_event(AmountEntryEvent::InputChanged("25".to_string()), 0.0);
        app.handle_amount_event(AmountEntryEvent::Submit, 0.0);
        assert_eq!(app.alerts.current().unwrap().message, "You entered: 25");

        assert_eq!(app.current_screen(), Screen::Load);
        let load = load_screen(&app);
        assert_eq!(load.state, load.adjuster.initial_state());
        assert_eq!(load.adjuster.public_address(), ADDRESS);
    }

    #[test]
    fn test_events_for_other_screen_are_ignored() {
        let mut app = create_test_app();
        app.handle_amount_event(AmountEntryEvent::Open, 0.0);
        assert_eq!(app.current_screen(), Screen::Load);
        assert!(!load_screen(&app).state.modal_visible);
    }
}
