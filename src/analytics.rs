// SPDX-License-Identifier: MPL-2.0
//! Interaction analytics.
//!
//! Events are `(category, action, label)` triples. Where they go is up to the
//! [`EventSink`]; the default sink writes them to the log under the
//! `iced_folio::analytics` target. The tracker also keeps a bounded history
//! of recent events, oldest first.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Number of events kept in the in-memory history.
pub const HISTORY_CAPACITY: usize = 256;

/// A tracked interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
    pub at: DateTime<Utc>,
}

/// Destination for analytics events.
pub trait EventSink: Send {
    fn send(&mut self, event: &AnalyticsEvent);
}

/// Writes events to the `tracing` log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn send(&mut self, event: &AnalyticsEvent) {
        tracing::info!(
            target: "iced_folio::analytics",
            category = %event.category,
            action = %event.action,
            label = %event.label,
            "event tracked"
        );
    }
}

/// Records events and forwards them to a sink.
pub struct Tracker {
    sink: Box<dyn EventSink>,
    history: VecDeque<AnalyticsEvent>,
    capacity: usize,
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("history_len", &self.history.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(Box::new(LogSink))
    }
}

impl Tracker {
    #[must_use]
    pub fn new(sink: Box<dyn EventSink>) -> Self {
        Self::with_capacity(sink, HISTORY_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(sink: Box<dyn EventSink>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            sink,
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn track(&mut self, category: &str, action: &str, label: &str) {
        let event = AnalyticsEvent {
            category: category.to_owned(),
            action: action.to_owned(),
            label: label.to_owned(),
            at: Utc::now(),
        };
        self.sink.send(&event);

        if self.history.len() >= self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(event);
    }

    /// Recent events, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &AnalyticsEvent> {
        self.history.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

/// Events emitted by the page.
pub mod events {
    pub fn primary_cta() -> (&'static str, &'static str, &'static str) {
        ("Button", "Click", "Primary CTA")
    }

    pub fn project_card() -> (&'static str, &'static str, &'static str) {
        ("Content", "Click", "Project Card")
    }

    pub fn scroll_depth(percent: u8) -> (&'static str, &'static str, String) {
        ("Scroll", "Depth", format!("{percent}%"))
    }
}
