// SPDX-License-Identifier: MPL-2.0
//! Page geometry.
//!
//! Every section is drawn with a fixed height so the positions used for
//! anchors, reading progress, reveal and lazy loading can be computed from
//! the content alone.

use crate::content::PageContent;
use crate::ui::state::reading_progress::ArticleGeometry;
use crate::ui::state::reveal::Span;

pub const HEADER_HEIGHT: f32 = 72.0;
pub const HERO_HEIGHT: f32 = 460.0;
pub const ABOUT_HEIGHT: f32 = 400.0;
pub const SECTION_TITLE_HEIGHT: f32 = 80.0;
pub const CARD_HEIGHT: f32 = 240.0;
pub const CARD_IMAGE_HEIGHT: f32 = 110.0;
pub const CARD_GAP: f32 = 24.0;
pub const ARTICLE_HEADER_HEIGHT: f32 = 140.0;
pub const ARTICLE_HEADING_HEIGHT: f32 = 56.0;
pub const PARAGRAPH_HEIGHT: f32 = 110.0;
pub const CONTACT_HEIGHT: f32 = 480.0;
pub const FOOTER_HEIGHT: f32 = 80.0;

/// Below this width project cards use a single column.
pub const TWO_COLUMN_MIN_WIDTH: f32 = 640.0;

/// Navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    About,
    Projects,
    Article,
    Contact,
}

impl Anchor {
    /// i18n key of the nav link label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Anchor::Home => "nav-home",
            Anchor::About => "nav-about",
            Anchor::Projects => "nav-projects",
            Anchor::Article => "nav-article",
            Anchor::Contact => "nav-contact",
        }
    }
}

/// Positions of everything the page tracks, in content coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    /// Revealable sections with their anchor, in page order.
    pub sections: Vec<(Anchor, Span)>,
    /// One span per project card.
    pub cards: Vec<Span>,
    pub columns: usize,
    /// Body of the article, from the first section heading to its end.
    pub article: Option<ArticleGeometry>,
    /// Tops of the article sections, for the table of contents.
    pub article_section_tops: Vec<f32>,
    pub content_height: f32,
}

impl PageLayout {
    #[must_use]
    pub fn compute(content: &PageContent, viewport_width: f32) -> Self {
        let columns = if viewport_width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
        let mut layout = Self {
            columns,
            ..Self::default()
        };

        let mut cursor = HEADER_HEIGHT;
        layout.sections.push((Anchor::Home, Span::new(cursor, HERO_HEIGHT)));
        cursor += HERO_HEIGHT;

        layout.sections.push((Anchor::About, Span::new(cursor, ABOUT_HEIGHT)));
        cursor += ABOUT_HEIGHT;

        let rows = content.projects.len().div_ceil(columns);
        let projects_height = SECTION_TITLE_HEIGHT + rows as f32 * (CARD_HEIGHT + CARD_GAP);
        let cards_top = cursor + SECTION_TITLE_HEIGHT;
        layout.cards = (0..content.projects.len())
            .map(|index| {
                let row = (index / columns) as f32;
                Span::new(cards_top + row * (CARD_HEIGHT + CARD_GAP), CARD_HEIGHT)
            })
            .collect();
        layout.sections.push((Anchor::Projects, Span::new(cursor, projects_height)));
        cursor += projects_height;

        if let Some(article) = &content.article {
            let article_top = cursor;
            let body_top = article_top + ARTICLE_HEADER_HEIGHT;
            let mut section_top = body_top;
            for section in &article.sections {
                layout.article_section_tops.push(section_top);
                section_top += ARTICLE_HEADING_HEIGHT + section.paragraphs.len() as f32 * PARAGRAPH_HEIGHT;
            }
            layout.article = Some(ArticleGeometry {
                top: body_top,
                height: section_top - body_top,
            });
            layout.sections.push((
                Anchor::Article,
                Span::new(article_top, section_top - article_top),
            ));
            cursor = section_top;
        }

        layout.sections.push((Anchor::Contact, Span::new(cursor, CONTACT_HEIGHT)));
        cursor += CONTACT_HEIGHT;

        layout.content_height = cursor + FOOTER_HEIGHT;
        layout
    }

    /// Top of an anchor's section, `None` when the page lacks it.
    #[must_use]
    pub fn anchor_top(&self, anchor: Anchor) -> Option<f32> {
        if anchor == Anchor::Home {
            return Some(0.0);
        }
        self.sections
            .iter()
            .find(|(candidate, _)| *candidate == anchor)
            .map(|(_, span)| span.top)
    }

    /// Scroll offset that brings an anchor just below the header.
    #[must_use]
    pub fn scroll_target(&self, anchor: Anchor, nav_offset: f32) -> Option<f32> {
        self.anchor_top(anchor).map(|top| (top - nav_offset).max(0.0))
    }

    /// Image area of a project card.
    #[must_use]
    pub fn card_image(&self, index: usize) -> Option<Span> {
        self.cards
            .get(index)
            .map(|card| Span::new(card.top, CARD_IMAGE_HEIGHT))
    }

    /// Spans of the revealable sections in page order.
    #[must_use]
    pub fn section_spans(&self) -> Vec<Span> {
        self.sections.iter().map(|(_, span)| *span).collect()
    }

    #[must_use]
    pub fn anchors(&self) -> Vec<Anchor> {
        self.sections.iter().map(|(anchor, _)| *anchor).collect()
    }
}
