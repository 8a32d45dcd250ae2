//! # Balance Adjuster
//!
//! State machine behind the Load screen. The user picks a note from a fixed
//! list of denominations, swipes it up to add it to the pending balance or down
//! to take it back out, and finally confirms the balance in a modal.
//!
//! ## Invariants:
//! - `selected_index` is always a valid index into the denominations
//! - `balance` never goes below zero; a swipe down needs `balance >= note`
//! - guard violations only emit an alert, the state is returned unchanged
//!
//! All transitions go through [`BalanceAdjuster::apply_event`], which is pure.
//! Effects (alerts, navigation, note animation) are returned to the caller.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::denominations::{DenominationError, Denominations};
use crate::effects::{Effect, Transition};
use crate::{format_amount, NavigationRequest, NoteMotion, Notification, Screen};

pub const DEFAULT_INITIAL_NOTE_INDEX: usize = 1;

pub const LARGEST_NOTE_MESSAGE: &str = "You are already at the largest note!";
pub const SMALLEST_NOTE_MESSAGE: &str = "You are already at the smallest note!";
pub const INSUFFICIENT_BALANCE_MESSAGE: &str = "You don't have enough balance to deduct this amount!";
pub const BALANCE_LIMIT_MESSAGE: &str = "The balance cannot grow any further!";
pub const EMPTY_AMOUNT_MESSAGE: &str = "Please select an amount.";

/// User actions on the Load screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceEvent {
    SelectNext,
    SelectPrevious,
    SwipeUp,
    SwipeDown,
    RequestConfirmation,
    Confirm,
    Cancel,
}

/// Mutable part of the Load screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceAdjusterState {
    pub selected_index: usize,
    /// Pending amount in whole currency units
    pub balance: u64,
    pub modal_visible: bool,
}

/// Immutable context of one Load screen instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceAdjuster {
    denominations: Denominations,
    public_address: String,
    currency_symbol: String,
    initial_index: usize,
}

impl BalanceAdjuster {
    pub fn new(
        denominations: Denominations,
        public_address: impl Into<String>,
        currency_symbol: impl Into<String>,
        initial_index: usize,
    ) -> Result<Self, DenominationError> {
        let initial_index = denominations.check_index(initial_index)?;
        Ok(Self {
            denominations,
            public_address: public_address.into(),
            currency_symbol: currency_symbol.into(),
            initial_index,
        })
    }

    /// Same notes and settings, mounted for another wallet address
    pub fn for_address(&self, public_address: impl Into<String>) -> Self {
        Self {
            public_address: public_address.into(),
            ..self.clone()
        }
    }

    pub fn denominations(&self) -> &Denominations {
        &self.denominations
    }

    pub fn public_address(&self) -> &str {
        &self.public_address
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// State on mount: initial note selected, empty balance, modal hidden
    pub fn initial_state(&self) -> BalanceAdjusterState {
        BalanceAdjusterState {
            selected_index: self.initial_index,
            balance: 0,
            modal_visible: false,
        }
    }

    pub fn selected_note(&self, state: &BalanceAdjusterState) -> u64 {
        self.denominations.at(state.selected_index)
    }

    pub fn format(&self, amount: u64) -> String {
        format_amount(&self.currency_symbol, amount)
    }

    /// Title of the confirmation modal for the given state
    pub fn confirmation_title(&self, state: &BalanceAdjusterState) -> String {
        format!("Transferring Amount: {}", self.format(state.balance))
    }

    pub fn apply_event(
        &self,
        state: BalanceAdjusterState,
        event: BalanceEvent,
    ) -> Transition<BalanceAdjusterState> {
        debug!("Balance adjuster event {:?} on {:?}", event, state);
        match event {
            BalanceEvent::SelectNext => self.select_next(state),
            BalanceEvent::SelectPrevious => self.select_previous(state),
            BalanceEvent::SwipeUp => self.on_swipe_up(state),
            BalanceEvent::SwipeDown => self.on_swipe_down(state),
            BalanceEvent::RequestConfirmation => self.request_confirmation(state),
            BalanceEvent::Confirm => self.confirm(state),
            BalanceEvent::Cancel => self.cancel(state),
        }
    }

    pub fn select_next(&self, state: BalanceAdjusterState) -> Transition<BalanceAdjusterState> {
        if state.selected_index >= self.denominations.last_index() {
            return reject(state, LARGEST_NOTE_MESSAGE);
        }
        Transition::quiet(BalanceAdjusterState {
            selected_index: state.selected_index + 1,
            ..state
        })
    }

    pub fn select_previous(&self, state: BalanceAdjusterState) -> Transition<BalanceAdjusterState> {
        if state.selected_index == 0 {
            return reject(state, SMALLEST_NOTE_MESSAGE);
        }
        Transition::quiet(BalanceAdjusterState {
            selected_index: state.selected_index - 1,
            ..state
        })
    }

    pub fn on_swipe_up(&self, state: BalanceAdjusterState) -> Transition<BalanceAdjusterState> {
        let note = self.selected_note(&state);
        match state.balance.checked_add(note) {
            Some(balance) => Transition::with(
                BalanceAdjusterState { balance, ..state },
                vec![Effect::Animate(NoteMotion::Up)],
            ),
            None => reject(state, BALANCE_LIMIT_MESSAGE),
        }
    }

    pub fn on_swipe_down(&self, state: BalanceAdjusterState) -> Transition<BalanceAdjusterState> {
        let note = self.selected_note(&state);
        if state.balance < note {
            return reject(state, INSUFFICIENT_BALANCE_MESSAGE);
        }
        Transition::with(
            BalanceAdjusterState {
                balance: state.balance - note,
                ..state
            },
            vec![Effect::Animate(NoteMotion::Down)],
        )
    }

    pub fn request_confirmation(&self, state: BalanceAdjusterState) -> Transition<BalanceAdjusterState> {
        Transition::quiet(BalanceAdjusterState {
            modal_visible: true,
            ..state
        })
    }

    /// Hand the balance off to the Unload screen. A zero balance is rejected
    /// but the modal still closes.
    pub fn confirm(&self, state: BalanceAdjusterState) -> Transition<BalanceAdjusterState> {
        let closed = BalanceAdjusterState {
            modal_visible: false,
            ..state
        };

        if state.balance == 0 {
            debug!("Rejected confirmation of an empty balance");
            return Transition::with(
                closed,
                vec![Effect::Notify(Notification::error(EMPTY_AMOUNT_MESSAGE))],
            );
        }

        let amount = state.balance;
        Transition::with(
            BalanceAdjusterState { balance: 0, ..closed },
            vec![
                Effect::Notify(Notification::success(format!(
                    "You entered: {}",
                    self.format(amount)
                ))),
                Effect::Navigate(NavigationRequest {
                    target: Screen::Unload,
                    public_address: self.public_address.clone(),
                    amount: Some(amount),
                }),
            ],
        )
    }

    pub fn cancel(&self, state: BalanceAdjusterState) -> Transition<BalanceAdjusterState> {
        Transition::quiet(BalanceAdjusterState {
            modal_visible: false,
            ..state
        })
    }
}

fn reject(state: BalanceAdjusterState, message: &str) -> Transition<BalanceAdjusterState> {
    debug!("Rejected action: {}", message);
    Transition::with(state, vec![Effect::Notify(Notification::not_allowed(message))])
}
