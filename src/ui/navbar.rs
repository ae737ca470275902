// SPDX-License-Identifier: MPL-2.0
//! Sticky page header.
//!
//! Shows the profile initials and name, the section links, the dark mode
//! toggle and the contact call-to-action. On narrow windows the links move
//! into a dropdown opened by the menu button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::{Anchor, HEADER_HEIGHT, TWO_COLUMN_MIN_WIDTH};
use crate::ui::notifications::Notification;
use crate::ui::state::PageState;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a PageState,
    pub name: &'a str,
    pub initials: &'a str,
    /// Sections present on the page, in order.
    pub anchors: Vec<Anchor>,
    /// Section currently under the header, highlighted in the links.
    pub current: Option<Anchor>,
    pub viewport_width: f32,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    Navigate(Anchor),
    ToggleDarkMode,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ScrollTo(Anchor),
    DarkModeToggled(Notification),
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, page: &mut PageState) -> Event {
    match message {
        Message::ToggleMenu => {
            page.toggle_menu();
            Event::None
        }
        Message::Navigate(anchor) => {
            page.close_menu_on_navigate();
            Event::ScrollTo(anchor)
        }
        Message::ToggleDarkMode => Event::DarkModeToggled(page.toggle_dark_mode()),
    }
}

/// Whether the links collapse into the menu button at this width.
#[must_use]
pub fn is_compact(viewport_width: f32) -> bool {
    viewport_width < TWO_COLUMN_MIN_WIDTH
}

/// Render the header. Returns an empty element while hidden.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.page.header_hidden {
        return Space::new().height(Length::Shrink).into();
    }

    let compact = is_compact(ctx.viewport_width);
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx, compact));

    if compact && ctx.page.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::header(ctx.page.header_scrolled))
        .into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>, compact: bool) -> Element<'a, Message> {
    let avatar = Container::new(Text::new(ctx.initials.to_string()).size(typography::TITLE_SM))
        .width(Length::Fixed(sizing::AVATAR))
        .height(Length::Fixed(sizing::AVATAR))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::avatar);

    let brand = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(avatar)
            .push(Text::new(ctx.name.to_string()).size(typography::TITLE_SM)),
    )
    .on_press(Message::Navigate(Anchor::Home))
    .padding(0.0)
    .style(styles::button::nav_link(false));

    let mut row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .height(Length::Fixed(HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if !compact {
        for &anchor in &ctx.anchors {
            row = row.push(nav_link(ctx, anchor));
        }
    }

    let dark_icon = if ctx.page.dark_mode_on { "☀" } else { "☾" };
    let dark_toggle = button(Text::new(dark_icon).size(typography::TITLE_SM))
        .on_press(Message::ToggleDarkMode)
        .padding(spacing::XS)
        .style(styles::button::icon);
    row = row.push(dark_toggle);

    if compact {
        let menu_button = button(Text::new("☰").size(typography::TITLE_SM))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::icon);
        row = row.push(menu_button);
    } else {
        let cta = button(Text::new(ctx.i18n.tr("header-cta")))
            .on_press(Message::Navigate(Anchor::Contact))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);
        row = row.push(cta);
    }

    row.into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = ctx
        .anchors
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, &anchor| {
            column.push(nav_link(ctx, anchor))
        });

    Container::new(Container::new(links).padding(spacing::SM).style(styles::container::menu))
        .padding([0.0, spacing::LG])
        .width(Length::Fill)
        .into()
}

fn nav_link<'a>(ctx: &ViewContext<'a>, anchor: Anchor) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr(anchor.label_key())).size(typography::BODY))
        .on_press(Message::Navigate(anchor))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link(ctx.current == Some(anchor)))
        .into()
}
