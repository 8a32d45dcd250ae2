//! # Alert State Module
//!
//! Queue of blocking, single-button alerts. Only the front alert is shown;
//! while any alert is pending the active screen ignores input. Pressing
//! "OK" acknowledges the front alert and reveals the next one.

use std::collections::VecDeque;

use log::info;
use shared::Notification;

#[derive(Debug, Default)]
pub struct AlertState {
    pending: VecDeque<Notification>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        info!("🔔 Alert [{}]: {}", notification.title, notification.message);
        self.pending.push_back(notification);
    }

    /// Alert currently on screen
    pub fn current(&self) -> Option<&Notification> {
        self.pending.front()
    }

    pub fn is_blocking(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn acknowledge(&mut self) -> Option<Notification> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_are_fifo() {
        let mut alerts = AlertState::new();
        assert!(!alerts.is_blocking());

        alerts.push(Notification::success("first"));
        alerts.push(Notification::error("second"));

        assert!(alerts.is_blocking());
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts.current().unwrap().message, "first");

        assert_eq!(alerts.acknowledge().unwrap().message, "first");
        assert_eq!(alerts.current().unwrap().message, "second");

        alerts.acknowledge();
        assert!(!alerts.is_blocking());
        assert!(alerts.acknowledge().is_none());
    }
}
