// SPDX-License-Identifier: MPL-2.0
//! Scrollable page body: hero, about, projects, article, contact and footer.
//!
//! Each section is drawn at the height `PageLayout` assigned to it so the
//! scroll offsets the app tracks match what is on screen. Sections that have
//! not been revealed yet keep their space but draw nothing.

use crate::content::{Article, PageContent, Project};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::forms::{contact, newsletter, ContactForm, NewsletterForm};
use crate::ui::images::{ImageSlot, LazyImages, PLACEHOLDER_ALT_KEY};
use crate::ui::layout::{
    Anchor, PageLayout, ARTICLE_HEADER_HEIGHT, ARTICLE_HEADING_HEIGHT, CARD_GAP, CARD_HEIGHT,
    CARD_IMAGE_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, PARAGRAPH_HEIGHT, SECTION_TITLE_HEIGHT,
};
use crate::ui::state::RevealSet;
use crate::ui::styles;
use iced::widget::{button, image::Image, text_input, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Color, ContentFit, Element, Length,
};
use std::time::Instant;

/// Messages emitted by the page body.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// "View projects" in the hero.
    PrimaryCta,
    OpenProject(usize),
    /// Copies an external link (resume, GitHub) to the clipboard.
    CopyLink(String),
    /// Table of contents entry.
    JumpToSection(usize),
    /// Floating search button.
    Search,
    Contact(contact::Message),
    Newsletter(newsletter::Message),
}

/// Contextual data needed to render the page body.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: &'a PageContent,
    pub layout: &'a PageLayout,
    pub reveal: &'a RevealSet,
    pub images: &'a LazyImages,
    pub headshot: &'a ImageSlot,
    pub contact: &'a ContactForm,
    pub newsletter: &'a NewsletterForm,
    /// Article section under the header, highlighted in the table of contents.
    pub active_section: Option<usize>,
    pub now: Instant,
}

/// Renders every section stacked in page order.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .width(Length::Fill)
        .push(Space::new().height(Length::Fixed(HEADER_HEIGHT)));

    for (index, (anchor, span)) in ctx.layout.sections.iter().enumerate() {
        let body = if ctx.reveal.is_revealed(index) {
            section(&ctx, *anchor)
        } else {
            Space::new().width(Length::Fill).into()
        };
        column = column.push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fixed(span.height))
                .clip(true),
        );
    }

    column.push(footer(&ctx)).into()
}

fn section<'a>(ctx: &ViewContext<'a>, anchor: Anchor) -> Element<'a, Message> {
    let body = match anchor {
        Anchor::Home => hero(ctx),
        Anchor::About => about(ctx),
        Anchor::Projects => projects(ctx),
        Anchor::Article => match &ctx.content.article {
            Some(article) => article_view(ctx, article),
            None => Space::new().into(),
        },
        Anchor::Contact => contact_section(ctx),
    };

    Container::new(body)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([0.0, spacing::XL])
        .into()
}

fn section_title<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::TITLE_MD))
        .height(Length::Fixed(SECTION_TITLE_HEIGHT))
        .align_y(Vertical::Center)
        .into()
}

fn chip<'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::chip)
        .into()
}

fn muted(theme: &iced::Theme) -> Color {
    let base = if matches!(theme, iced::Theme::Dark) {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    };
    Color {
        a: opacity::MUTED_TEXT,
        ..base
    }
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let profile = &ctx.content.profile;

    let mut actions = Row::new().spacing(spacing::SM).push(
        button(Text::new(ctx.i18n.tr("hero-view-projects")))
            .on_press(Message::PrimaryCta)
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::primary),
    );
    if let Some(resume) = &profile.resume {
        actions = actions.push(
            button(Text::new(ctx.i18n.tr("hero-resume")))
                .on_press(Message::CopyLink(resume.clone()))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline),
        );
    }

    let stats = ctx
        .content
        .stats
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, stat| {
            row.push(
                Container::new(
                    Column::new()
                        .align_x(Horizontal::Center)
                        .push(Text::new(stat.value.as_str()).size(typography::TITLE_MD))
                        .push(
                            Text::new(stat.label.as_str())
                                .size(typography::CAPTION)
                                .style(|theme| iced::widget::text::Style {
                                    color: Some(muted(theme)),
                                }),
                        ),
                )
                .padding([spacing::SM, spacing::LG])
                .style(styles::container::card),
            )
        });

    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding([spacing::XXL, 0.0]);
    if !profile.tagline.is_empty() {
        column = column.push(chip(profile.tagline.as_str()));
    }
    column
        .push(Text::new(profile.headline.as_str()).size(typography::TITLE_LG))
        .push(Text::new(profile.intro.as_str()).size(typography::BODY_LG))
        .push(actions)
        .push(stats)
        .into()
}

fn about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let about = &ctx.content.about;

    let skills = about
        .skills
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, skill| {
            row.push(chip(skill.as_str()))
        })
        .wrap();

    let education = about
        .education
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, entry| {
            column.push(Text::new(entry.as_str()).size(typography::BODY))
        });

    let text_column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(Text::new(about.summary.as_str()).size(typography::BODY_LG))
        .push(Text::new(ctx.i18n.tr("about-skills")).size(typography::TITLE_SM))
        .push(skills)
        .push(Text::new(ctx.i18n.tr("about-education")).size(typography::TITLE_SM))
        .push(education);

    let headshot = image_area(
        ctx,
        ctx.headshot,
        ctx.content.profile.headshot.is_some(),
        &ctx.content.profile.initials,
        sizing::HEADSHOT,
        Length::Fixed(sizing::HEADSHOT),
    );

    Column::new()
        .push(section_title(ctx.i18n.tr("about-title")))
        .push(
            Row::new()
                .spacing(spacing::XL)
                .push(text_column)
                .push(headshot),
        )
        .into()
}

/// Image, fade-in placeholder or error placeholder for one image slot.
fn image_area<'a>(
    ctx: &ViewContext<'a>,
    slot: &'a ImageSlot,
    has_image: bool,
    fallback_label: &'a str,
    height: f32,
    width: Length,
) -> Element<'a, Message> {
    match slot {
        ImageSlot::Loaded { image, .. } => Image::new(image.handle.clone())
            .width(width)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .opacity(slot.opacity(ctx.now))
            .into(),
        ImageSlot::Failed => placeholder(ctx.i18n.tr(PLACEHOLDER_ALT_KEY), height, width),
        ImageSlot::Idle | ImageSlot::Loading if has_image => {
            placeholder(String::new(), height, width)
        }
        ImageSlot::Idle | ImageSlot::Loading => {
            placeholder(fallback_label.to_string(), height, width)
        }
    }
}

fn placeholder<'a>(label: String, height: f32, width: Length) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(width)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::image_placeholder)
        .into()
}

fn projects<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = ctx.layout.columns.max(1);
    let mut grid = Column::new().spacing(CARD_GAP);
    let mut row = Row::new().spacing(CARD_GAP);
    let mut in_row = 0;

    for (index, project) in ctx.content.projects.iter().enumerate() {
        row = row.push(project_card(ctx, index, project));
        in_row += 1;
        if in_row == columns {
            grid = grid.push(row);
            row = Row::new().spacing(CARD_GAP);
            in_row = 0;
        }
    }
    if in_row > 0 {
        for _ in in_row..columns {
            row = row.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(row);
    }

    Column::new()
        .push(section_title(ctx.i18n.tr("projects-title")))
        .push(grid)
        .into()
}

fn project_card<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    project: &'a Project,
) -> Element<'a, Message> {
    let image: Element<'a, Message> = match ctx.images.slot(index) {
        Some(slot) => image_area(
            ctx,
            slot,
            ctx.images.has_image(index),
            project.title.as_str(),
            CARD_IMAGE_HEIGHT,
            Length::Fill,
        ),
        None => placeholder(project.title.clone(), CARD_IMAGE_HEIGHT, Length::Fill),
    };

    let tech = project
        .tech
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, tech| {
            row.push(chip(tech.as_str()))
        })
        .wrap();

    let body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .push(Text::new(project.title.as_str()).size(typography::TITLE_SM))
        .push(Text::new(project.desc.as_str()).size(typography::BODY))
        .push(tech);

    button(Column::new().push(image).push(body))
        .on_press(Message::OpenProject(index))
        .padding(0.0)
        .width(Length::Fill)
        .height(Length::Fixed(CARD_HEIGHT))
        .style(styles::button::card)
        .into()
}

fn article_view<'a>(ctx: &ViewContext<'a>, article: &'a Article) -> Element<'a, Message> {
    let toc = article.sections.iter().enumerate().fold(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr("article-toc-title")).size(typography::CAPTION)),
        |row, (index, section)| {
            row.push(
                button(Text::new(section.heading.as_str()).size(typography::CAPTION))
                    .on_press(Message::JumpToSection(index))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::nav_link(ctx.active_section == Some(index))),
            )
        },
    );

    let header = Column::new()
        .spacing(spacing::SM)
        .height(Length::Fixed(ARTICLE_HEADER_HEIGHT))
        .padding([spacing::LG, 0.0])
        .push(Text::new(article.title.as_str()).size(typography::TITLE_LG))
        .push(toc.wrap());

    article
        .sections
        .iter()
        .fold(Column::new().push(header), |column, section| {
            let heading = Container::new(
                Text::new(section.heading.as_str()).size(typography::TITLE_MD),
            )
            .height(Length::Fixed(ARTICLE_HEADING_HEIGHT))
            .align_y(Vertical::Center);

            section
                .paragraphs
                .iter()
                .fold(column.push(heading), |column, paragraph| {
                    column.push(
                        Container::new(Text::new(paragraph.as_str()).size(typography::BODY_LG))
                            .height(Length::Fixed(PARAGRAPH_HEIGHT))
                            .clip(true),
                    )
                })
        })
        .into()
}

fn contact_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let info = &ctx.content.contact;
    let mut details = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("contact-intro")).size(typography::BODY_LG))
        .push(Text::new(info.email.as_str()).size(typography::BODY));
    if let Some(github) = &info.github {
        details = details.push(
            button(Text::new(ctx.i18n.tr("contact-github")))
                .on_press(Message::CopyLink(github.clone()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::outline),
        );
    }

    let field = |label: String, placeholder: String, value: &'a str, on_input: fn(String) -> contact::Message| {
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(label).size(typography::CAPTION))
            .push(
                text_input(&placeholder, value)
                    .on_input(move |text| Message::Contact(on_input(text)))
                    .on_submit(Message::Contact(contact::Message::Submit))
                    .padding(spacing::XS)
                    .width(Length::Fixed(sizing::INPUT_WIDTH)),
            )
    };

    let form = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(field(
            ctx.i18n.tr("contact-name-label"),
            ctx.i18n.tr("contact-name-placeholder"),
            ctx.contact.name.as_str(),
            contact::Message::NameChanged,
        ))
        .push(field(
            ctx.i18n.tr("contact-email-label"),
            ctx.i18n.tr("contact-email-placeholder"),
            ctx.contact.email.as_str(),
            contact::Message::EmailChanged,
        ))
        .push(field(
            ctx.i18n.tr("contact-message-label"),
            ctx.i18n.tr("contact-message-placeholder"),
            ctx.contact.body.as_str(),
            contact::Message::BodyChanged,
        ))
        .push(
            button(Text::new(ctx.i18n.tr("contact-send")))
                .on_press(Message::Contact(contact::Message::Submit))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        );

    let newsletter_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("newsletter-title")).size(typography::BODY))
        .push(
            text_input(
                &ctx.i18n.tr("newsletter-placeholder"),
                ctx.newsletter.email.as_str(),
            )
            .on_input(|text| Message::Newsletter(newsletter::Message::EmailChanged(text)))
            .on_submit(Message::Newsletter(newsletter::Message::Submit))
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::INPUT_WIDTH)),
        )
        .push(
            button(Text::new(ctx.i18n.tr("newsletter-subscribe")))
                .on_press(Message::Newsletter(newsletter::Message::Submit))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::outline),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(section_title(ctx.i18n.tr("contact-title")))
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(Container::new(details).style(styles::container::card))
                .push(Container::new(form).style(styles::container::card)),
        )
        .push(newsletter_row)
        .into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let line = Container::new(Space::new().height(Length::Fixed(1.0)))
        .width(Length::Fill)
        .style(styles::container::divider);

    let note = ctx.i18n.tr_with_args(
        "footer-note",
        &[("name", ctx.content.profile.name.as_str())],
    );

    Column::new()
        .height(Length::Fixed(FOOTER_HEIGHT))
        .push(line)
        .push(
            Container::new(Text::new(note).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .into()
}

/// Thin bar across the top of the window showing how much of the article was read.
pub fn reading_progress_bar<'a, M: 'a>(percent: f32) -> Element<'a, M> {
    let fill = (percent / 100.0).clamp(0.0, 1.0);
    let filled: Element<'a, M> = if fill > 0.0 {
        Container::new(Space::new())
            .width(Length::FillPortion(portion(fill)))
            .height(Length::Fixed(sizing::READING_PROGRESS_HEIGHT))
            .style(styles::container::progress_fill)
            .into()
    } else {
        Space::new().width(Length::Shrink).into()
    };

    Row::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::READING_PROGRESS_HEIGHT))
        .push(filled)
        .push(Space::new().width(Length::FillPortion(portion(1.0 - fill))))
        .into()
}

/// Splits a 0..=1 fraction into a fill portion on a thousandth scale.
fn portion(fraction: f32) -> u16 {
    (fraction.clamp(0.0, 1.0) * 1000.0).round() as u16
}

/// Floating round search button in the bottom-right corner.
pub fn search_button<'a>() -> Element<'a, Message> {
    Container::new(
        button(
            Container::new(Text::new("🔍").size(typography::TITLE_SM))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .on_press(Message::Search)
        .width(Length::Fixed(sizing::FLOATING_BUTTON))
        .height(Length::Fixed(sizing::FLOATING_BUTTON))
        .style(styles::button::floating),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .padding(spacing::XL)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portion_splits_thousandths() {
        assert_eq!(portion(0.4), 400);
        assert_eq!(portion(0.0) + portion(1.0), 1000);
        assert_eq!(portion(2.0), 1000);
    }

    #[test]
    fn progress_bar_renders_at_bounds() {
        let _empty: Element<'_, Message> = reading_progress_bar(0.0);
        let _full: Element<'_, Message> = reading_progress_bar(100.0);
    }
}
