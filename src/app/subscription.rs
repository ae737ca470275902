// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Frame interval while something on screen is moving.
const ANIMATION_TICK: Duration = Duration::from_millis(16);
/// Interval that is enough to honor toast timeouts.
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Creates the periodic tick driving toast timers, slides and image fades.
///
/// Ticks at frame rate while animating, slower while toasts wait for their
/// timeout, and not at all otherwise.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else if has_notifications {
        time::every(IDLE_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Reports window size changes so the layout can follow.
pub fn create_resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}
