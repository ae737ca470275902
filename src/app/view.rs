// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page scrolls underneath a fixed layer holding the reading progress
//! bar and the header. Toasts and the floating search button sit on top.

use super::{Message, ScrollPosition, SCROLLABLE_ID};
use crate::content::PageContent;
use crate::i18n::fluent::I18n;
use crate::ui::forms::{ContactForm, NewsletterForm};
use crate::ui::images::{ImageSlot, LazyImages};
use crate::ui::layout::PageLayout;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::page::{self, ViewContext as PageViewContext};
use crate::ui::state::{toc, PageState, ReadingProgress, RevealSet};
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length, Size};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: &'a PageContent,
    pub layout: &'a PageLayout,
    pub page: &'a PageState,
    pub reading_progress: &'a ReadingProgress,
    pub reveal: &'a RevealSet,
    pub images: &'a LazyImages,
    pub headshot: &'a ImageSlot,
    pub contact: &'a ContactForm,
    pub newsletter: &'a NewsletterForm,
    pub notifications: &'a notifications::Manager,
    pub viewport: Size,
    pub now: Instant,
}

/// Renders the page with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scroll_top = ctx.page.last_scroll_top;

    let body = page::view(PageViewContext {
        i18n: ctx.i18n,
        content: ctx.content,
        layout: ctx.layout,
        reveal: ctx.reveal,
        images: ctx.images,
        headshot: ctx.headshot,
        contact: ctx.contact,
        newsletter: ctx.newsletter,
        active_section: toc::active_section(&ctx.layout.article_section_tops, scroll_top),
        now: ctx.now,
    })
    .map(Message::Page);

    let scrollable = Scrollable::new(body)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| {
            Message::Scrolled(ScrollPosition {
                top: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
        });

    let anchors = ctx.layout.anchors();
    let section_tops: Vec<f32> = ctx.layout.sections.iter().map(|(_, span)| span.top).collect();
    let current = toc::active_section(&section_tops, scroll_top)
        .and_then(|index| anchors.get(index).copied());

    let header = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        page: ctx.page,
        name: &ctx.content.profile.name,
        initials: &ctx.content.profile.initials,
        anchors,
        current,
        viewport_width: ctx.viewport.width,
    })
    .map(Message::Navbar);

    let mut top_layer = Column::new().width(Length::Fill);
    if let Some(percent) = ctx.reading_progress.percent() {
        top_layer = top_layer.push(page::reading_progress_bar(percent));
    }
    top_layer = top_layer.push(header);

    let search = page::search_button().map(Message::Page);
    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n, ctx.now).map(Message::Notification);

    let stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable)
        .push(top_layer)
        .push(search)
        .push(toasts);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
