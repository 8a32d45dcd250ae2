//! # Screen State Module
//!
//! Per-screen state. Each value is created when the screen is mounted by
//! the navigator and dropped when the navigator replaces it, so nothing
//! survives a navigation.

use shared::{
    AmountEntry, AmountEntryState, BalanceAdjuster, BalanceAdjusterState, BalanceEvent, SwipeClassifier,
    SwipeDirection,
};

use super::animation_state::NoteAnimationState;

/// Load screen: note carousel, pending balance and swipe tracking
#[derive(Debug)]
pub struct LoadScreenState {
    pub adjuster: BalanceAdjuster,
    pub state: BalanceAdjusterState,
    pub classifier: SwipeClassifier,
    pub animation: NoteAnimationState,
    /// Vertical displacement of the drag in progress
    drag_dy: f32,
}

impl LoadScreenState {
    pub fn new(adjuster: BalanceAdjuster, classifier: SwipeClassifier, animation: NoteAnimationState) -> Self {
        let state = adjuster.initial_state();
        Self {
            adjuster,
            state,
            classifier,
            animation,
            drag_dy: 0.0,
        }
    }

    pub fn selected_note(&self) -> u64 {
        self.adjuster.selected_note(&self.state)
    }

    pub fn drag_moved(&mut self, dy: f32) {
        self.drag_dy += dy;
    }

    /// Whether the drag in progress already counts as a swipe
    pub fn is_swiping(&self) -> bool {
        self.classifier.should_claim(self.drag_dy)
    }

    /// Classify the finished drag and reset the tracker
    pub fn drag_released(&mut self) -> Option<BalanceEvent> {
        let dy = std::mem::take(&mut self.drag_dy);
        self.classifier.classify(dy).map(|direction| match direction {
            SwipeDirection::Up => BalanceEvent::SwipeUp,
            SwipeDirection::Down => BalanceEvent::SwipeDown,
        })
    }
}

/// Unload screen: address card and amount entry modal
#[derive(Debug)]
pub struct UnloadScreenState {
    pub entry: AmountEntry,
    pub state: AmountEntryState,
    /// Amount handed over by the Load screen, if any
    pub loaded_amount: Option<u64>,
}

impl UnloadScreenState {
    pub fn new(entry: AmountEntry, loaded_amount: Option<u64>) -> Self {
        Self {
            entry,
            state: AmountEntryState::default(),
            loaded_amount,
        }
    }
}

/// The mounted screen
#[derive(Debug)]
pub enum ActiveScreen {
    Load(LoadScreenState),
    Unload(UnloadScreenState),
}

impl ActiveScreen {
    pub fn screen(&self) -> shared::Screen {
        match self {
            ActiveScreen::Load(_) => shared::Screen::Load,
            ActiveScreen::Unload(_) => shared::Screen::Unload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::WalletConfig;

    fn create_test_screen() -> LoadScreenState {
        let config = WalletConfig::default();
        LoadScreenState::new(
            config.balance_adjuster().unwrap(),
            config.swipe_classifier(),
            NoteAnimationState::new(50.0, 100),
        )
    }

    #[test]
    fn test_drag_accumulates_until_release() {
        let mut screen = create_test_screen();

        screen.drag_moved(-12.0);
        assert!(!screen.is_swiping());
        screen.drag_moved(-12.0);
        assert!(screen.is_swiping());

        assert_eq!(screen.drag_released(), Some(BalanceEvent::SwipeUp));
        assert!(!screen.is_swiping());
        assert_eq!(screen.drag_released(), None);
    }

    #[test]
    fn test_small_drags_are_ignored() {
        let mut screen = create_test_screen();
        screen.drag_moved(15.0);
        screen.drag_moved(-5.0);
        assert_eq!(screen.drag_released(), None);
    }

    #[test]
    fn test_downward_drag() {
        let mut screen = create_test_screen();
        screen.drag_moved(30.0);
        assert_eq!(screen.drag_released(), Some(BalanceEvent::SwipeDown));
    }

    #[test]
    fn test_mount_state() {
        let screen = create_test_screen();
        assert_eq!(screen.selected_note(), 5);
        assert_eq!(screen.state.balance, 0);

        let unload = UnloadScreenState::new(AmountEntry::new("0xabc"), Some(10));
        assert_eq!(unload.state, AmountEntryState::default());
        assert_eq!(ActiveScreen::Unload(unload).screen(), shared::Screen::Unload);
    }
}
