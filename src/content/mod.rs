// SPDX-License-Identifier: MPL-2.0
//! Page content model.
//!
//! Everything the page displays (profile, projects, article, contact data)
//! comes from a TOML document. A built-in document is compiled into the
//! binary and used when no file is configured or the configured file cannot
//! be read.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const BUILTIN_CONTENT: &str = include_str!("../../assets/content/portfolio.toml");

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    #[serde(default)]
    pub tagline: String,
    pub headline: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub headshot: Option<PathBuf>,
    #[serde(default)]
    pub resume: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct About {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub link: String,
    /// Card image, relative paths resolve against the content file.
    #[serde(default)]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ArticleSection {
    pub id: String,
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<ArticleSection>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub github: Option<String>,
}

/// The whole page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PageContent {
    pub profile: Profile,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Pages without an article have no reading progress or TOC.
    #[serde(default)]
    pub article: Option<Article>,
    pub contact: Contact,
}

impl PageContent {
    /// Returns the content compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        match parse(BUILTIN_CONTENT) {
            Ok(content) => content,
            Err(err) => {
                tracing::error!(%err, "built-in page content is invalid");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn has_article(&self) -> bool {
        self.article.is_some()
    }
}

/// Parses and validates a content document.
pub fn parse(source: &str) -> Result<PageContent> {
    let content: PageContent =
        toml::from_str(source).map_err(|err| Error::Content(err.to_string()))?;
    validate(&content)?;
    Ok(content)
}

/// Loads a content file; relative image paths are resolved against its directory.
pub fn load_from_path(path: &Path) -> Result<PageContent> {
    let source = fs::read_to_string(path)?;
    let mut content = parse(&source)?;

    if let Some(base) = path.parent() {
        resolve_paths(&mut content, base);
    }
    Ok(content)
}

/// Loads the configured content, falling back to the built-in page.
///
/// Returns the i18n key of a warning to show when the file was unusable.
pub fn load(path: Option<&Path>) -> (PageContent, Option<String>) {
    let Some(path) = path else {
        return (PageContent::builtin(), None);
    };

    match load_from_path(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), projects = content.projects.len(), "loaded page content");
            (content, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load page content, using built-in page");
            (
                PageContent::builtin(),
                Some("notification-content-load-error".to_string()),
            )
        }
    }
}

fn validate(content: &PageContent) -> Result<()> {
    if content.contact.email.trim().is_empty() {
        return Err(Error::Content("contact email is empty".into()));
    }
    if let Some(article) = &content.article {
        let mut seen = HashSet::new();
        for section in &article.sections {
            if section.id.trim().is_empty() {
                return Err(Error::Content(format!(
                    "article section '{}' has an empty id",
                    section.heading
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(Error::Content(format!(
                    "duplicate article section id '{}'",
                    section.id
                )));
            }
        }
    }
    Ok(())
}

fn resolve_paths(content: &mut PageContent, base: &Path) {
    let resolve = |path: &mut PathBuf| {
        if path.is_relative() {
            *path = base.join(&*path);
        }
    };

    if let Some(headshot) = content.profile.headshot.as_mut() {
        resolve(headshot);
    }
    for project in &mut content.projects {
        if let Some(image) = project.image.as_mut() {
            resolve(image);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MINIMAL: &str = r#"
[profile]
name = "Ada"
initials = "AL"
headline = "Hello"

[contact]
email = "ada@example.com"
"#;

    #[test]
    fn builtin_content_parses() {
        let content = parse(BUILTIN_CONTENT).expect("built-in content should be valid");
        assert!(!content.projects.is_empty());
        assert!(content.has_article());
    }

    #[test]
    fn minimal_document_uses_defaults() {
        let content = parse(MINIMAL).expect("parse");
        assert_eq!(content.profile.name, "Ada");
        assert!(content.projects.is_empty());
        assert!(!content.has_article());
    }

    #[test]
    fn empty_contact_email_is_rejected() {
        let source = MINIMAL.replace("ada@example.com", " ");
        assert!(matches!(parse(&source), Err(Error::Content(_))));
    }

    #[test]
    fn duplicate_section_ids_are_rejected() {
        let source = format!(
            "{MINIMAL}\n[article]\ntitle = \"T\"\n\
             [[article.sections]]\nid = \"a\"\nheading = \"A\"\n\
             [[article.sections]]\nid = \"a\"\nheading = \"B\"\n"
        );
        let err = parse(&source).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn relative_images_resolve_against_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("page.toml");
        let source = format!(
            "{MINIMAL}\n[[projects]]\ntitle = \"P\"\nlink = \"https://example.com\"\nimage = \"shots/p.png\"\n"
        );
        fs::write(&path, source).expect("write");

        let content = load_from_path(&path).expect("load");
        assert_eq!(
            content.projects[0].image.as_deref(),
            Some(dir.path().join("shots/p.png").as_path())
        );
    }

    #[test]
    fn load_falls_back_with_warning() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[profile\n").expect("write");

        let (content, warning) = load(Some(&path));
        assert_eq!(content, PageContent::builtin());
        assert_eq!(warning.as_deref(), Some("notification-content-load-error"));
    }

    #[test]
    fn load_without_path_is_builtin() {
        let (content, warning) = load(None);
        assert_eq!(content, PageContent::builtin());
        assert!(warning.is_none());
    }
}
