// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the page.
//!
//! The `App` struct wires together the page content, the scroll-driven state,
//! the forms and the toast notifications, and translates messages into side
//! effects like scrolling, clipboard writes or image loading. Policy decisions
//! (window size, how a navigation scroll is applied) stay close to the update
//! loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, ScrollPosition};

use crate::analytics::Tracker;
use crate::content::{self, PageContent};
use crate::i18n::fluent::I18n;
use crate::ui::forms::{ContactForm, NewsletterForm};
use crate::ui::images::{self, ImageSlot, LazyImages};
use crate::ui::layout::PageLayout;
use crate::ui::notifications::{self, Kind, Notification};
use crate::ui::state::{PageState, ReadingProgress, RevealSet};
use crate::ui::theming;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Id of the page scrollable, target of navigation scrolls.
pub const SCROLLABLE_ID: &str = "page-scrollable";

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    content: PageContent,
    layout: PageLayout,
    page: PageState,
    reading_progress: ReadingProgress,
    reveal: RevealSet,
    images: LazyImages,
    headshot: ImageSlot,
    contact: ContactForm,
    newsletter: NewsletterForm,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    analytics: Tracker,
    /// Space left above a section when navigating to it.
    nav_offset: f32,
    viewport: Size,
    /// Time of the last processed message; drives animations in `view`.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("viewport", &self.viewport)
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_content(
            PageContent::builtin(),
            I18n::default(),
            &config::Config::default(),
        )
    }
}

impl App {
    /// Builds the initial state for a page without starting any task.
    fn with_content(content: PageContent, i18n: I18n, config: &config::Config) -> Self {
        let viewport = Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT);
        let layout = PageLayout::compute(&content, viewport.width);
        let images = LazyImages::new(
            content
                .projects
                .iter()
                .map(|project| project.image.clone())
                .collect(),
        );

        Self {
            i18n,
            reading_progress: ReadingProgress::new(layout.article),
            reveal: RevealSet::new(layout.sections.len()),
            page: PageState::new(
                config.header.thresholds(),
                config.general.theme_mode.is_dark(),
            ),
            images,
            headshot: ImageSlot::Idle,
            contact: ContactForm::default(),
            newsletter: NewsletterForm::default(),
            notifications: notifications::Manager::new(config.notifications.timing()),
            analytics: Tracker::default(),
            nav_offset: config.header.nav_offset(),
            viewport,
            now: Instant::now(),
            layout,
            content,
        }
    }

    /// Loads config and content, then starts the images visible on the
    /// first screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));
        let content_path = flags
            .content_path
            .map(PathBuf::from)
            .or_else(|| config.content.path.clone());
        let (content, content_warning) = content::load(content_path.as_deref());
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::with_content(content, i18n, &config);

        for key in [config_warning, content_warning].into_iter().flatten() {
            app.notifications
                .push(Notification::new(Kind::Error, key));
        }

        let headshot_task = app.start_headshot();
        let scroll_task = update::track_scroll(&mut app, 0.0);
        (app, Task::batch([headshot_task, scroll_task]))
    }

    fn start_headshot(&mut self) -> Task<Message> {
        let Some(path) = self.content.profile.headshot.clone() else {
            return Task::none();
        };
        if !self.headshot.begin_loading() {
            return Task::none();
        }
        Task::perform(images::load(path), Message::HeadshotLoaded)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.content.profile.name.is_empty() {
            app_name
        } else {
            format!("{} - {app_name}", self.content.profile.name)
        }
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.page.dark_mode_on)
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = self.notifications.is_animating(self.now)
            || self.images.is_fading(self.now)
            || self.headshot.is_fading(self.now);
        let tick_sub =
            subscription::create_tick_subscription(animating, self.notifications.has_notifications());
        let resize_sub = subscription::create_resize_subscription();

        Subscription::batch([tick_sub, resize_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match &message {
            Message::Tick(now) => *now,
            _ => Instant::now(),
        };

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(self, navbar_message),
            Message::Page(page_message) => update::handle_page_message(self, page_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Scrolled(position) => update::handle_scroll(self, position),
            Message::WindowResized(size) => update::handle_resize(self, size),
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::ImageLoaded { index, result } => {
                self.images.finish(index, result, self.now);
                Task::none()
            }
            Message::HeadshotLoaded(result) => {
                self.headshot
                    .finish(result, self.now, self.content.profile.headshot.as_deref());
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            content: &self.content,
            layout: &self.layout,
            page: &self.page,
            reading_progress: &self.reading_progress,
            reveal: &self.reveal,
            images: &self.images,
            headshot: &self.headshot,
            contact: &self.contact,
            newsletter: &self.newsletter,
            notifications: &self.notifications,
            viewport: self.viewport,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::Anchor;
    use crate::ui::navbar;
    use crate::ui::page;
    use crate::ui::forms::contact;

    fn scroll(app: &mut App, top: f32) {
        let _ = app.update(Message::Scrolled(ScrollPosition {
            top,
            viewport_height: WINDOW_DEFAULT_HEIGHT,
        }));
    }

    #[test]
    fn default_app_starts_at_top_in_light_mode() {
        let app = App::default();
        assert!(!app.page.dark_mode_on);
        assert!(!app.page.header_scrolled);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn scrolling_updates_header_flags() {
        let mut app = App::default();
        scroll(&mut app, 150.0);
        assert!(app.page.header_scrolled);
        assert!(!app.page.header_hidden);

        scroll(&mut app, 400.0);
        assert!(app.page.header_hidden);

        scroll(&mut app, 300.0);
        assert!(!app.page.header_hidden);
        assert_eq!(app.page.last_scroll_top, 300.0);
    }

    #[test]
    fn dark_mode_toggle_switches_theme_and_notifies() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleDarkMode));
        assert_eq!(app.theme(), Theme::Dark);
        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect();
        assert_eq!(keys, vec!["notification-dark-mode-on"]);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleDarkMode));
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.notifications.visible_count(), 2);
    }

    #[test]
    fn navigating_closes_menu_and_moves_to_section() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.page.menu_open);

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Anchor::Contact)));
        assert!(!app.page.menu_open);
    }

    #[test]
    fn navigation_header_follows_reported_scroll() {
        let mut app = App::default();
        let max_offset = app.layout.content_height - WINDOW_DEFAULT_HEIGHT;
        let target = app
            .layout
            .scroll_target(Anchor::Contact, app.nav_offset)
            .expect("contact section on page")
            .min(max_offset);
        assert!(target > app.page.thresholds().hide);

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Anchor::Contact)));
        assert_eq!(app.page.last_scroll_top, 0.0);
        assert!(!app.page.header_hidden);

        // The scrollable reports the offset it moved to
        scroll(&mut app, target);
        assert!(app.page.header_hidden);
        assert!(app.page.header_scrolled);
        assert_eq!(app.page.last_scroll_top, target);
    }

    #[test]
    fn navigation_tracks_depth_before_scroll_is_reported() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Anchor::Contact)));
        assert!(app.page.scroll_depth.max() > 0);
    }

    #[test]
    fn sections_taller_than_viewport_are_revealed() {
        let mut page_content = PageContent::builtin();
        page_content.projects = (0..60)
            .map(|index| content::Project {
                title: format!("Project {index}"),
                link: format!("https://example.com/{index}"),
                ..content::Project::default()
            })
            .collect();
        let mut app = App::with_content(page_content, I18n::default(), &config::Config::default());

        let (_, projects) = app
            .layout
            .sections
            .iter()
            .copied()
            .find(|(anchor, _)| *anchor == Anchor::Projects)
            .expect("projects section");
        assert!(projects.height > 10.0 * WINDOW_DEFAULT_HEIGHT);

        let max_offset = app.layout.content_height - WINDOW_DEFAULT_HEIGHT;
        let mut top = 0.0;
        while top <= max_offset {
            scroll(&mut app, top);
            top += 10.0;
        }

        for index in 0..app.layout.sections.len() {
            assert!(app.reveal.is_revealed(index), "section {index} never revealed");
        }
    }

    #[test]
    fn primary_cta_is_tracked() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::PrimaryCta));
        let event = app.analytics.history().last().cloned();
        let event = event.expect("event tracked");
        assert_eq!(
            (event.category.as_str(), event.action.as_str(), event.label.as_str()),
            ("Button", "Click", "Primary CTA")
        );
    }

    #[test]
    fn incomplete_contact_form_shows_error_and_keeps_values() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::Contact(
            contact::Message::NameChanged("Ada".into()),
        )));
        let _ = app.update(Message::Page(page::Message::Contact(contact::Message::Submit)));

        assert_eq!(app.contact.name, "Ada");
        let notification = app.notifications.visible().last().cloned();
        let notification = notification.expect("notification shown");
        assert_eq!(notification.kind(), Kind::Error);
    }

    #[test]
    fn search_shows_coming_soon() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::Search));
        let notification = app.notifications.visible().last().cloned();
        assert_eq!(
            notification.map(|n| n.message_key().to_string()),
            Some("notification-search-coming-soon".to_string())
        );
    }

    #[test]
    fn scroll_depth_milestones_are_tracked() {
        let mut app = App::default();
        let scrollable = app.layout.content_height - WINDOW_DEFAULT_HEIGHT;
        scroll(&mut app, scrollable * 0.25);
        scroll(&mut app, scrollable * 0.5);

        let labels: Vec<_> = app
            .analytics
            .history()
            .filter(|event| event.category == "Scroll")
            .map(|event| event.label.clone())
            .collect();
        assert_eq!(labels, vec!["25%", "50%"]);
    }

    #[test]
    fn resize_to_narrow_window_uses_single_column() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(Size::new(500.0, 700.0)));
        assert_eq!(app.layout.columns, 1);
        assert_eq!(app.viewport, Size::new(500.0, 700.0));
    }

    #[test]
    fn failed_card_image_shows_placeholder() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded {
            index: 0,
            result: Err(crate::error::Error::Io("broken".into())),
        });
        assert!(app.images.slot(0).is_some_and(ImageSlot::is_failed));
    }
}
