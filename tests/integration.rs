// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::config::{self, Config};
use iced_folio::content::{self, PageContent};
use iced_folio::i18n::fluent::I18n;
use iced_folio::ui::forms::contact::{self, ContactForm, Event as ContactEvent};
use iced_folio::ui::layout::{Anchor, PageLayout};
use iced_folio::ui::notifications::{Kind, Manager, Phase, Timing};
use iced_folio::ui::state::reading_progress::compute_progress;
use iced_folio::ui::state::{HeaderThresholds, PageState, ReadingProgress, ScrollDepth};
use iced_folio::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn page() -> PageState {
    PageState::new(HeaderThresholds::default(), false)
}

#[test]
fn header_scrolled_tracks_threshold() {
    for offset in [0.0, 50.0, 100.0, 100.5, 150.0, 5000.0] {
        let mut state = page();
        state.on_scroll(offset);
        assert_eq!(state.header_scrolled, offset > 100.0, "offset {offset}");
    }
}

#[test]
fn header_hides_only_when_scrolling_down_past_threshold() {
    let mut down = page();
    down.on_scroll(150.0);
    down.on_scroll(250.0);
    assert!(down.header_hidden);

    let mut up = page();
    up.on_scroll(250.0);
    up.on_scroll(150.0);
    assert!(!up.header_hidden);
}

#[test]
fn menu_toggle_twice_restores_state() {
    let mut state = page();
    state.toggle_menu();
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn reading_progress_examples_and_monotonicity() {
    assert_eq!(compute_progress(0.0, 0.0, 1000.0, 800.0), 40.0);
    assert_eq!(compute_progress(600.0, 0.0, 1000.0, 800.0), 100.0);

    let mut previous = 0.0;
    for step in 0..200 {
        let progress = compute_progress(step as f32 * 10.0, 300.0, 1500.0, 700.0);
        assert!((0.0..=100.0).contains(&progress));
        assert!(progress >= previous);
        previous = progress;
    }
}

#[test]
fn reading_progress_is_inactive_without_article() {
    let mut progress = ReadingProgress::new(None);
    progress.on_scroll(500.0, 800.0);
    assert_eq!(progress.percent(), None);
}

#[test]
fn manual_dismiss_then_timeout_is_harmless() {
    let t0 = Instant::now();
    let mut manager = Manager::new(Timing::default());
    let id = manager.show("notification-contact-sent", "success", t0);

    assert!(manager.dismiss(id, t0 + Duration::from_millis(1000)));
    manager.tick(t0 + Duration::from_millis(5000));
    assert!(!manager.dismiss(id, t0 + Duration::from_millis(5001)));
    manager.tick(t0 + Duration::from_millis(5400));
    assert!(!manager.has_notifications());
}

#[test]
fn notification_lifecycle_follows_timing() {
    let t0 = Instant::now();
    let mut manager = Manager::new(Timing::default());
    let id = manager.show("x", "bogus", t0);
    assert_eq!(manager.get(id).map(|n| n.kind()), Some(Kind::Info));

    manager.tick(t0 + Duration::from_millis(4999));
    assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Shown));

    manager.tick(t0 + Duration::from_millis(5000));
    assert!(matches!(
        manager.get(id).map(|n| n.phase()),
        Some(Phase::Dismissing { .. })
    ));

    manager.tick(t0 + Duration::from_millis(5300));
    assert!(manager.get(id).is_none());
}

#[test]
fn contact_submit_with_empty_name_is_rejected() {
    let mut form = ContactForm {
        name: String::new(),
        email: "a@b.com".into(),
        body: "hi".into(),
    };

    match form.update(contact::Message::Submit, "me@example.com") {
        ContactEvent::Rejected { notification } => {
            assert_eq!(notification.kind(), Kind::Error);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(form.email, "a@b.com");
    assert_eq!(form.body, "hi");
}

#[test]
fn scroll_depth_skips_unaligned_milestones() {
    let mut depth = ScrollDepth::default();
    // content 2000, viewport 1000: percent == scroll_y / 10
    assert_eq!(depth.record(230.0, 2000.0, 1000.0), None);
    assert_eq!(depth.record(270.0, 2000.0, 1000.0), None);
    assert_eq!(depth.record(500.0, 2000.0, 1000.0), Some(50));
    assert_eq!(depth.record(400.0, 2000.0, 1000.0), None);
    assert_eq!(depth.max(), 50);
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[general]\nlanguage = \"fr\"\ntheme_mode = \"dark\"\n\n[header]\nhide_threshold = 300.0\n",
    )
    .expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");

    assert_eq!(loaded.general.language.as_deref(), Some("fr"));
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.header.thresholds().hide, 300.0);
    assert_eq!(loaded.header.thresholds().scrolled, 100.0);
}

#[test]
fn broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\nlanguage =").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    std::fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    std::fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("notification-dark-mode-off"), "Mode clair activé");
}

#[test]
fn content_file_drives_layout() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("page.toml");
    std::fs::write(
        &path,
        r#"
[profile]
name = "Sam"
initials = "S"
headline = "Hello"

[[projects]]
title = "One"
link = "https://example.com/one"
image = "one.png"

[contact]
email = "sam@example.com"
"#,
    )
    .expect("write content");

    let (content, warning) = content::load(Some(&path));
    assert!(warning.is_none());
    assert_eq!(content.projects[0].image, Some(dir.path().join("one.png")));

    let layout = PageLayout::compute(&content, 1024.0);
    assert!(layout.article.is_none());
    assert_eq!(layout.anchor_top(Anchor::Article), None);
    assert!(layout.anchor_top(Anchor::Contact).is_some());
}

#[test]
fn missing_content_file_uses_builtin_page() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (content, warning) = content::load(Some(&dir.path().join("missing.toml")));
    assert_eq!(content, PageContent::builtin());
    assert_eq!(warning.as_deref(), Some("notification-content-load-error"));
}
