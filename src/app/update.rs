// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler mutates the `App` and returns the follow-up task (scrolling,
//! clipboard writes, image loads).

use super::{App, Message, ScrollPosition, SCROLLABLE_ID};
use crate::analytics::events;
use crate::ui::forms::contact::Event as ContactEvent;
use crate::ui::images;
use crate::ui::layout::{Anchor, PageLayout};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{Kind, Notification};
use crate::ui::page;
use crate::ui::state::{IntersectionRule, ReadingProgress};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{clipboard, Size, Task};

pub(super) fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.page) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollTo(anchor) => scroll_to_anchor(app, anchor),
        NavbarEvent::DarkModeToggled(notification) => {
            app.notifications.push(notification);
            Task::none()
        }
    }
}

pub(super) fn handle_page_message(app: &mut App, message: page::Message) -> Task<Message> {
    match message {
        page::Message::PrimaryCta => {
            let (category, action, label) = events::primary_cta();
            app.analytics.track(category, action, label);
            scroll_to_anchor(app, Anchor::Projects)
        }
        page::Message::OpenProject(index) => {
            let (category, action, label) = events::project_card();
            app.analytics.track(category, action, label);
            let link = app.content.projects.get(index).map(|project| project.link.clone());
            match link {
                Some(link) => copy_link(app, link),
                None => Task::none(),
            }
        }
        page::Message::CopyLink(link) => copy_link(app, link),
        page::Message::JumpToSection(index) => {
            let nav_offset = app.nav_offset;
            match app.layout.article_section_tops.get(index).copied() {
                Some(top) => scroll_to_offset(app, top - nav_offset),
                None => Task::none(),
            }
        }
        page::Message::Search => {
            app.notifications
                .push(Notification::new(Kind::Info, "notification-search-coming-soon"));
            Task::none()
        }
        page::Message::Contact(message) => {
            let recipient = app.content.contact.email.clone();
            match app.contact.update(message, &recipient) {
                ContactEvent::None => Task::none(),
                ContactEvent::Sent {
                    mailto,
                    notification,
                } => {
                    app.notifications.push(notification);
                    match mailto {
                        Some(url) => clipboard::write(url.to_string()),
                        None => Task::none(),
                    }
                }
                ContactEvent::Rejected { notification } => {
                    app.notifications.push(notification);
                    Task::none()
                }
            }
        }
        page::Message::Newsletter(message) => {
            if let Some(notification) = app.newsletter.update(message) {
                app.notifications.push(notification);
            }
            Task::none()
        }
    }
}

/// Applies a user scroll: header flags first, then everything tracked.
pub(super) fn handle_scroll(app: &mut App, position: ScrollPosition) -> Task<Message> {
    if position.viewport_height > 0.0 {
        app.viewport.height = position.viewport_height;
    }
    app.page.on_scroll(position.top);
    track_scroll(app, position.top)
}

/// Recomputes the layout for a new window size, keeping the scroll offset.
pub(super) fn handle_resize(app: &mut App, size: Size) -> Task<Message> {
    app.viewport = size;
    let layout = PageLayout::compute(&app.content, size.width);
    if layout != app.layout {
        app.reading_progress = ReadingProgress::new(layout.article);
        app.layout = layout;
    }
    let top = app.page.last_scroll_top;
    track_scroll(app, top)
}

/// Updates reading progress, scroll depth, section reveal and lazy images
/// for a scroll offset. Header flags are left alone.
pub(super) fn track_scroll(app: &mut App, top: f32) -> Task<Message> {
    let viewport_height = app.viewport.height;

    app.reading_progress.on_scroll(top, viewport_height);

    if let Some(milestone) = app
        .page
        .record_scroll_depth(top, app.layout.content_height, viewport_height)
    {
        let (category, action, label) = events::scroll_depth(milestone);
        app.analytics.track(category, action, &label);
    }

    let revealed = app.reveal.update(
        &app.layout.section_spans(),
        IntersectionRule::REVEAL,
        top,
        viewport_height,
    );
    if !revealed.is_empty() {
        tracing::debug!(?revealed, "sections revealed");
    }

    let visible_cards: Vec<usize> = (0..app.layout.cards.len())
        .filter(|&index| {
            app.layout.card_image(index).is_some_and(|span| {
                IntersectionRule::LAZY_IMAGE.is_intersecting(span, top, viewport_height)
            })
        })
        .collect();

    let loads = app
        .images
        .start(&visible_cards)
        .into_iter()
        .map(|(index, path)| {
            Task::perform(images::load(path), move |result| Message::ImageLoaded {
                index,
                result,
            })
        });

    Task::batch(loads)
}

fn scroll_to_anchor(app: &mut App, anchor: Anchor) -> Task<Message> {
    match app.layout.scroll_target(anchor, app.nav_offset) {
        Some(target) => scroll_to_offset(app, target),
        None => {
            tracing::debug!(?anchor, "navigation target not on this page");
            Task::none()
        }
    }
}

/// Scrolls the page to `target`.
///
/// Progress, depth, reveal and images are applied at the target right away.
/// The header flags wait for the scrollable to report the new offset, so the
/// move is seen as a single scroll from the previous position.
fn scroll_to_offset(app: &mut App, target: f32) -> Task<Message> {
    let max_offset = (app.layout.content_height - app.viewport.height).max(0.0);
    let y = target.clamp(0.0, max_offset);

    let scroll = operation::scroll_to(Id::new(SCROLLABLE_ID), AbsoluteOffset { x: 0.0, y });
    let tracked = track_scroll(app, y);
    Task::batch([scroll, tracked])
}

fn copy_link(app: &mut App, link: String) -> Task<Message> {
    app.notifications.push(
        Notification::new(Kind::Info, "notification-link-copied").with_arg("url", link.clone()),
    );
    clipboard::write(link)
}
