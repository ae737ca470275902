// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns every live notification and drives their timers from
//! the tick subscription. Notifications are independent: there is no cap,
//! no queue and no de-duplication.

use super::notification::{Kind, Notification, NotificationId, Timing};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close control pressed on a notification.
    Dismiss(NotificationId),
    /// Timer tick carrying the current instant.
    Tick(Instant),
}

/// Manages the displayed notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Live notifications, oldest first.
    notifications: Vec<Notification>,
    timing: Timing,
}

impl Manager {
    #[must_use]
    pub fn new(timing: Timing) -> Self {
        Self {
            notifications: Vec::new(),
            timing,
        }
    }

    #[must_use]
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Creates a notification from a message key and kind name and displays it.
    ///
    /// Unrecognized kind names are shown as info.
    pub fn show(&mut self, message_key: &str, kind: &str, now: Instant) -> NotificationId {
        self.push(Notification::new_at(Kind::parse(kind), message_key, now))
    }

    /// Displays a prepared notification.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();
        tracing::debug!(
            key = notification.message_key(),
            kind = ?notification.kind(),
            "showing notification"
        );
        self.notifications.push(notification);
        id
    }

    /// Starts dismissing a notification.
    ///
    /// Returns `false` when the notification is unknown or already leaving.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        self.notifications
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.begin_dismiss(now))
    }

    /// Advances every timer and drops notifications whose exit finished.
    pub fn tick(&mut self, now: Instant) {
        let timing = self.timing;
        for notification in &mut self.notifications {
            notification.advance(now, &timing);
        }
        self.notifications.retain(|n| !n.is_removed());
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, Instant::now());
            }
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    /// Returns the notifications currently attached to the overlay.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    /// Whether any toast is sliding in or out at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.notifications
            .iter()
            .any(|n| n.is_animating(now, &self.timing))
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::notification::Phase;
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::default();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn show_has_no_cap() {
        let mut manager = Manager::default();
        let now = Instant::now();
        for _ in 0..10 {
            manager.show("same-message", "info", now);
        }
        assert_eq!(manager.visible_count(), 10);
    }

    #[test]
    fn show_with_unknown_kind_uses_info() {
        let mut manager = Manager::default();
        let id = manager.show("x", "warning", Instant::now());
        assert_eq!(manager.get(id).map(Notification::kind), Some(Kind::Info));
    }

    #[test]
    fn manual_dismiss_then_auto_timer_is_noop() {
        let mut manager = Manager::default();
        let t0 = Instant::now();
        let id = manager.show("x", "success", t0);

        assert!(manager.dismiss(id, t0 + ms(100)));
        assert!(!manager.dismiss(id, t0 + ms(150)));

        manager.tick(t0 + ms(400));
        assert!(!manager.has_notifications());

        // Auto-dismiss deadline fires after removal
        manager.tick(t0 + ms(5000));
        assert!(!manager.dismiss(id, t0 + ms(5000)));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn notifications_are_timed_independently() {
        let mut manager = Manager::default();
        let t0 = Instant::now();
        let first = manager.show("first", "info", t0);
        let second = manager.show("second", "error", t0 + ms(2000));

        manager.tick(t0 + ms(5000));
        assert!(matches!(
            manager.get(first).map(Notification::phase),
            Some(Phase::Dismissing { .. })
        ));
        assert_eq!(manager.get(second).map(Notification::phase), Some(Phase::Shown));

        manager.tick(t0 + ms(5300));
        assert!(manager.get(first).is_none());
        assert!(manager.get(second).is_some());

        manager.tick(t0 + ms(7000));
        manager.tick(t0 + ms(7300));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_unknown_returns_false() {
        let mut manager = Manager::default();
        let fake_id = Notification::success("temp").id();
        assert!(!manager.dismiss(fake_id, Instant::now()));
    }

    #[test]
    fn is_animating_during_entrance_and_exit_only() {
        let mut manager = Manager::default();
        let t0 = Instant::now();
        let id = manager.show("x", "info", t0);

        assert!(manager.is_animating(t0 + ms(50)));
        assert!(!manager.is_animating(t0 + ms(1000)));

        manager.dismiss(id, t0 + ms(1000));
        assert!(manager.is_animating(t0 + ms(1100)));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::default();
        let id = manager.push(Notification::success("test"));

        manager.handle_message(&Message::Dismiss(id));
        assert!(matches!(
            manager.get(id).map(Notification::phase),
            Some(Phase::Dismissing { .. })
        ));
    }
}
