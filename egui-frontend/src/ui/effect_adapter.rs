//! Bridges state-machine effects to the egui app: alerts go to the alert
//! queue, note motions start the card animation, and the navigation request
//! is held until the screen that produced it has finished its transition.

use shared::{EffectHandler, NavigationRequest, NoteMotion, Notification};

use crate::ui::state::{AlertState, NoteAnimationState};

pub struct ScreenEffects<'a> {
    alerts: &'a mut AlertState,
    animation: Option<&'a mut NoteAnimationState>,
    navigation: Option<NavigationRequest>,
    now: f64,
}

impl<'a> ScreenEffects<'a> {
    pub fn new(alerts: &'a mut AlertState, animation: Option<&'a mut NoteAnimationState>, now: f64) -> Self {
        Self {
            alerts,
            animation,
            navigation: None,
            now,
        }
    }

    /// Navigation requested during dispatch, if any
    pub fn into_navigation(self) -> Option<NavigationRequest> {
        self.navigation
    }
}

impl EffectHandler for ScreenEffects<'_> {
    fn notify(&mut self, notification: Notification) {
        self.alerts.push(notification);
    }

    fn navigate(&mut self, request: NavigationRequest) {
        // Only one handoff per transition; a later one wins
        self.navigation = Some(request);
    }

    fn animate(&mut self, motion: NoteMotion) {
        if let Some(animation) = self.animation.as_deref_mut() {
            animation.start(motion, self.now);
        }
    }
}
