//! Side effects produced by the screen state machines.
//!
//! Transitions are pure: they return the next state together with a list of
//! effects. A screen adapter hands that list to an [`EffectHandler`], which is
//! the only place notifications, navigation and animations actually happen.

use crate::{NavigationRequest, NoteMotion, Notification};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notification),
    Navigate(NavigationRequest),
    /// Cosmetic note displacement; carries no state
    Animate(NoteMotion),
}

/// Result of applying one event to a state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S> {
    pub state: S,
    pub effects: Vec<Effect>,
}

impl<S> Transition<S> {
    pub fn quiet(state: S) -> Self {
        Self { state, effects: Vec::new() }
    }

    pub fn with(state: S, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    /// Whether the transition raised an alert
    pub fn notification(&self) -> Option<&Notification> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Notify(notification) => Some(notification),
            _ => None,
        })
    }

    pub fn navigation(&self) -> Option<&NavigationRequest> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Navigate(request) => Some(request),
            _ => None,
        })
    }
}

/// Receiver of effects at transition boundaries
pub trait EffectHandler {
    fn notify(&mut self, notification: Notification);

    fn navigate(&mut self, request: NavigationRequest);

    fn animate(&mut self, _motion: NoteMotion) {}
}

/// Hand every effect to the handler, in emission order
pub fn dispatch<H: EffectHandler + ?Sized>(effects: Vec<Effect>, handler: &mut H) {
    for effect in effects {
        match effect {
            Effect::Notify(notification) => handler.notify(notification),
            Effect::Navigate(request) => handler.navigate(request),
            Effect::Animate(motion) => handler.animate(motion),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::Screen;

    /// Records every effect it receives
    #[derive(Debug, Default)]
    pub struct RecordingHandler {
        pub notifications: Vec<Notification>,
        pub navigations: Vec<NavigationRequest>,
        pub motions: Vec<NoteMotion>,
    }

    impl EffectHandler for RecordingHandler {
        fn notify(&mut self, notification: Notification) {
            self.notifications.push(notification);
        }

        fn navigate(&mut self, request: NavigationRequest) {
            self.navigations.push(request);
        }

        fn animate(&mut self, motion: NoteMotion) {
            self.motions.push(motion);
        }
    }

    struct NoAnimations {
        seen: usize,
    }

    impl EffectHandler for NoAnimations {
        fn notify(&mut self, _notification: Notification) {
            self.seen += 1;
        }

        fn navigate(&mut self, _request: NavigationRequest) {
            self.seen += 1;
        }
    }

    fn sample_request() -> NavigationRequest {
        NavigationRequest {
            target: Screen::Unload,
            public_address: "addr".to_string(),
            amount: Some(7),
        }
    }

    #[test]
    fn test_dispatch_preserves_order() {
        let mut handler = RecordingHandler::default();
        dispatch(
            vec![
                Effect::Animate(NoteMotion::Up),
                Effect::Notify(Notification::success("ok")),
                Effect::Navigate(sample_request()),
            ],
            &mut handler,
        );

        assert_eq!(handler.motions, vec![NoteMotion::Up]);
        assert_eq!(handler.notifications.len(), 1);
        assert_eq!(handler.navigations, vec![sample_request()]);
    }

    #[test]
    fn test_animate_defaults_to_noop() {
        let mut handler = NoAnimations { seen: 0 };
        dispatch(
            vec![Effect::Animate(NoteMotion::Down), Effect::Navigate(sample_request())],
            &mut handler,
        );
        assert_eq!(handler.seen, 1);
    }

    #[test]
    fn test_transition_accessors() {
        let quiet: Transition<u8> = Transition::quiet(1);
        assert!(quiet.notification().is_none());
        assert!(quiet.navigation().is_none());

        let loud = Transition::with(
            2u8,
            vec![
                Effect::Notify(Notification::error("bad")),
                Effect::Navigate(sample_request()),
            ],
        );
        assert_eq!(loud.notification().map(|n| n.message.as_str()), Some("bad"));
        assert_eq!(loud.navigation(), Some(&sample_request()));
    }
}
