// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear in the top-right corner, slide in after a short
//! entrance delay, dismiss themselves after a fixed timeout and slide out
//! before being removed. The close control and the timer may race; only the
//! first one has an effect.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with its `Shown → Dismissing → Removed` lifecycle
//! - [`manager`] - `Manager` holding independent, uncapped notifications
//! - [`toast`] - Toast widget rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Timing};
//!
//! let mut manager = Manager::new(Timing::default());
//! manager.show("notification-contact-sent", "success", Instant::now());
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager, &i18n, now).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId, Phase, Timing};
pub use toast::Toast;
