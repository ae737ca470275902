// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A notification lives through exactly one lifecycle:
//! `Shown` → `Dismissing` → `Removed`. Every transition takes the current
//! `Instant` explicitly so the state machine stays deterministic under test.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of message; selects the toast background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Info,
    Success,
    Error,
}

impl Kind {
    /// Parses a kind name. Unrecognized names fall back to [`Kind::Info`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Kind::Success,
            "error" => Kind::Error,
            _ => Kind::Info,
        }
    }

    /// Returns the background color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::NOTIFY_SUCCESS,
            Kind::Error => palette::NOTIFY_ERROR,
            Kind::Info => palette::NOTIFY_INFO,
        }
    }
}

/// Lifecycle timings shared by every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay before the entrance slide starts.
    pub entrance_delay: Duration,
    /// Age at which the notification dismisses itself.
    pub auto_dismiss: Duration,
    /// Length of the slide transitions; removal happens this long after dismissal.
    pub exit_transition: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        use crate::app::config::{
            DEFAULT_AUTO_DISMISS_MS, DEFAULT_ENTRANCE_DELAY_MS, DEFAULT_EXIT_TRANSITION_MS,
        };
        Self {
            entrance_delay: Duration::from_millis(DEFAULT_ENTRANCE_DELAY_MS),
            auto_dismiss: Duration::from_millis(DEFAULT_AUTO_DISMISS_MS),
            exit_transition: Duration::from_millis(DEFAULT_EXIT_TRANSITION_MS),
        }
    }
}

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// On screen (sliding in, then resting).
    Shown,
    /// Exit transition running since the given instant.
    Dismissing { since: Instant },
    /// Detached from the overlay.
    Removed,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    created_at: Instant,
    phase: Phase,
}

impl Notification {
    /// Creates a notification created at `now`.
    pub fn new_at(kind: Kind, message_key: impl Into<String>, now: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: now,
            phase: Phase::Shown,
        }
    }

    pub fn new(kind: Kind, message_key: impl Into<String>) -> Self {
        Self::new_at(kind, message_key, Instant::now())
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Info, message_key)
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Success, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }

    /// Starts the exit transition.
    ///
    /// Returns `false` (and changes nothing) unless the notification is
    /// still `Shown`, so the close button and the auto-dismiss timer can
    /// both call this without double-removal.
    pub fn begin_dismiss(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Shown => {
                self.phase = Phase::Dismissing { since: now };
                true
            }
            Phase::Dismissing { .. } | Phase::Removed => false,
        }
    }

    /// Applies any timer-driven transition that is due at `now`.
    ///
    /// Returns `true` if the phase changed.
    pub fn advance(&mut self, now: Instant, timing: &Timing) -> bool {
        match self.phase {
            Phase::Shown => {
                if now.saturating_duration_since(self.created_at) >= timing.auto_dismiss {
                    self.begin_dismiss(now)
                } else {
                    false
                }
            }
            Phase::Dismissing { since } => {
                if now.saturating_duration_since(since) >= timing.exit_transition {
                    self.phase = Phase::Removed;
                    true
                } else {
                    false
                }
            }
            Phase::Removed => false,
        }
    }

    /// Fraction of the toast width pushed off-screen to the right
    /// (1.0 = fully hidden, 0.0 = resting position).
    #[must_use]
    pub fn slide_offset(&self, now: Instant, timing: &Timing) -> f32 {
        let progress = |elapsed: Duration| {
            if timing.exit_transition.is_zero() {
                1.0
            } else {
                (elapsed.as_secs_f32() / timing.exit_transition.as_secs_f32()).min(1.0)
            }
        };

        match self.phase {
            Phase::Shown => {
                let age = now.saturating_duration_since(self.created_at);
                match age.checked_sub(timing.entrance_delay) {
                    Some(sliding_for) => 1.0 - progress(sliding_for),
                    None => 1.0,
                }
            }
            Phase::Dismissing { since } => progress(now.saturating_duration_since(since)),
            Phase::Removed => 1.0,
        }
    }

    /// Whether a slide transition is in flight at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant, timing: &Timing) -> bool {
        let offset = self.slide_offset(now, timing);
        match self.phase {
            Phase::Shown => offset > 0.0,
            Phase::Dismissing { .. } => true,
            Phase::Removed => false,
        }
    }
}
