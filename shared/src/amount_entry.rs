//! # Amount Entry
//!
//! State machine behind the Unload screen: a modal with a single text field.
//! The typed amount is not parsed; any non-blank input is accepted and handed
//! off to the Load screen together with the wallet address.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::effects::{Effect, Transition};
use crate::{NavigationRequest, Notification, Screen};

pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountEntryEvent {
    Open,
    InputChanged(String),
    Submit,
    Cancel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountEntryState {
    pub modal_visible: bool,
    pub amount: String,
}

/// Immutable context of one Unload screen instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountEntry {
    public_address: String,
}

impl AmountEntry {
    pub fn new(public_address: impl Into<String>) -> Self {
        Self {
            public_address: public_address.into(),
        }
    }

    pub fn public_address(&self) -> &str {
        &self.public_address
    }

    pub fn apply_event(&self, state: AmountEntryState, event: AmountEntryEvent) -> Transition<AmountEntryState> {
        debug!("Amount entry event {:?}", event);
        match event {
            AmountEntryEvent::Open => Transition::quiet(AmountEntryState {
                modal_visible: true,
                ..state
            }),
            AmountEntryEvent::InputChanged(amount) => Transition::quiet(AmountEntryState { amount, ..state }),
            AmountEntryEvent::Submit => self.submit(state),
            // The typed text survives a cancel
            AmountEntryEvent::Cancel => Transition::quiet(AmountEntryState {
                modal_visible: false,
                ..state
            }),
        }
    }

    fn submit(&self, state: AmountEntryState) -> Transition<AmountEntryState> {
        if state.amount.trim().is_empty() {
            return Transition::with(
                state,
                vec![Effect::Notify(Notification::error(INVALID_AMOUNT_MESSAGE))],
            );
        }

        let message = format!("You entered: {}", state.amount);
        Transition::with(
            AmountEntryState::default(),
            vec![
                Effect::Notify(Notification::success(message)),
                Effect::Navigate(NavigationRequest {
                    target: Screen::Load,
                    public_address: self.public_address.clone(),
                    amount: None,
                }),
            ],
        )
    }
}

/// Keep only what a numeric keypad could produce: digits and one decimal point
pub fn sanitize_numeric_input(input: &str) -> String {
    let mut seen_point = false;
    input
        .chars()
        .filter(|&c| match c {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NotificationKind;

    fn open_with(amount: &str) -> AmountEntryState {
        AmountEntryState {
            modal_visible: true,
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_open_and_type() {
        let entry = AmountEntry::new("0xabc");
        let opened = entry.apply_event(AmountEntryState::default(), AmountEntryEvent::Open).state;
        assert!(opened.modal_visible);

        let typed = entry
            .apply_event(opened, AmountEntryEvent::InputChanged("42".to_string()))
            .state;
        assert_eq!(typed, open_with("42"));
    }

    #[test]
    fn test_submit_hands_off_to_load_screen() {
        let entry = AmountEntry::new("0xabc");

        let transition = entry.apply_event(open_with("250"), AmountEntryEvent::Submit);

        assert_eq!(transition.state, AmountEntryState::default());
        assert_eq!(transition.notification().unwrap().message, "You entered: 250");
        assert_eq!(
            transition.navigation(),
            Some(&NavigationRequest {
                target: Screen::Load,
                public_address: "0xabc".to_string(),
                amount: None,
            })
        );
    }

    #[test]
    fn test_submit_blank_keeps_modal_open() {
        let entry = AmountEntry::new("0xabc");

        let transition = entry.apply_event(open_with("   "), AmountEntryEvent::Submit);

        assert_eq!(transition.state, open_with("   "));
        assert!(transition.navigation().is_none());
        let alert = transition.notification().unwrap();
        assert_eq!(alert.kind, NotificationKind::Error);
        assert_eq!(alert.message, INVALID_AMOUNT_MESSAGE);
    }

    #[test]
    fn test_cancel_keeps_typed_amount() {
        let entry = AmountEntry::new("0xabc");
        let transition = entry.apply_event(open_with("12"), AmountEntryEvent::Cancel);
        assert_eq!(
            transition.state,
            AmountEntryState {
                modal_visible: false,
                amount: "12".to_string(),
            }
        );
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn test_sanitize_numeric_input() {
        assert_eq!(sanitize_numeric_input("12.50"), "12.50");
        assert_eq!(sanitize_numeric_input("1.2.3"), "1.23");
        assert_eq!(sanitize_numeric_input("₹ 1,000"), "1000");
        assert_eq!(sanitize_numeric_input("abc"), "");
    }
}
