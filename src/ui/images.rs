// SPDX-License-Identifier: MPL-2.0
//! Lazily loaded page images.
//!
//! An image slot starts idle, loads once its area enters the viewport and
//! fades in over a short transition. A slot whose file cannot be read or
//! decoded shows the placeholder instead.

use crate::app::config::IMAGE_FADE_MS;
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use image_rs::{GenericImageView, ImageError};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// i18n key of the accessible description for the placeholder.
pub const PLACEHOLDER_ALT_KEY: &str = "image-not-available";

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Io(err.to_string())
    }
}

/// Decodes encoded image bytes (PNG, JPEG, ...).
pub fn decode(bytes: &[u8]) -> Result<LoadedImage> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(LoadedImage {
        handle: Handle::from_rgba(width, height, pixels),
        width,
        height,
    })
}

/// Reads and decodes an image file without blocking the UI thread.
pub async fn load(path: PathBuf) -> Result<LoadedImage> {
    let bytes = tokio::fs::read(&path).await?;
    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}

/// Display state of one image.
#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    #[default]
    Idle,
    Loading,
    Loaded {
        image: LoadedImage,
        loaded_at: Instant,
    },
    Failed,
}

impl ImageSlot {
    /// Moves an idle slot to loading. Returns `false` if it already left idle.
    pub fn begin_loading(&mut self) -> bool {
        if matches!(self, ImageSlot::Idle) {
            *self = ImageSlot::Loading;
            true
        } else {
            false
        }
    }

    /// Stores the load result.
    pub fn finish(&mut self, result: Result<LoadedImage>, now: Instant, path: Option<&Path>) {
        *self = match result {
            Ok(image) => ImageSlot::Loaded {
                image,
                loaded_at: now,
            },
            Err(err) => {
                tracing::warn!(path = ?path, %err, "image failed to load, showing placeholder");
                ImageSlot::Failed
            }
        };
    }

    /// Opacity of the image at `now`; the fade starts when loading completes.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self {
            ImageSlot::Loaded { loaded_at, .. } => {
                let elapsed = now.saturating_duration_since(*loaded_at);
                (elapsed.as_secs_f32() / fade_duration().as_secs_f32()).min(1.0)
            }
            ImageSlot::Failed => 1.0,
            ImageSlot::Idle | ImageSlot::Loading => 0.0,
        }
    }

    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        matches!(self, ImageSlot::Loaded { .. }) && self.opacity(now) < 1.0
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, ImageSlot::Failed)
    }
}

fn fade_duration() -> Duration {
    Duration::from_millis(IMAGE_FADE_MS)
}

/// Image slots of the project cards, indexed like the projects.
#[derive(Debug, Clone, Default)]
pub struct LazyImages {
    paths: Vec<Option<PathBuf>>,
    slots: Vec<ImageSlot>,
}

impl LazyImages {
    #[must_use]
    pub fn new(paths: Vec<Option<PathBuf>>) -> Self {
        let slots = vec![ImageSlot::Idle; paths.len()];
        Self { paths, slots }
    }

    /// Marks the given cards as loading and returns the files to read.
    ///
    /// Cards without an image or already past idle are skipped.
    pub fn start(&mut self, indices: &[usize]) -> Vec<(usize, PathBuf)> {
        let mut started = Vec::new();
        for &index in indices {
            let (Some(Some(path)), Some(slot)) = (self.paths.get(index), self.slots.get_mut(index))
            else {
                continue;
            };
            if slot.begin_loading() {
                started.push((index, path.clone()));
            }
        }
        started
    }

    pub fn finish(&mut self, index: usize, result: Result<LoadedImage>, now: Instant) {
        let path = self.paths.get(index).and_then(Option::as_deref);
        if let Some(slot) = self.slots.get_mut(index) {
            slot.finish(result, now, path);
        }
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&ImageSlot> {
        self.slots.get(index)
    }

    #[must_use]
    pub fn has_image(&self, index: usize) -> bool {
        matches!(self.paths.get(index), Some(Some(_)))
    }

    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        self.slots.iter().any(|slot| slot.is_fading(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn png_bytes() -> Vec<u8> {
        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decode_png_returns_dimensions() {
        let image = decode(&png_bytes()).expect("decode");
        assert_eq!((image.width, image.height), (4, 2));
    }

    #[test]
    fn decode_garbage_fails() {
        assert!(decode(b"not an image").is_err());
    }

    #[tokio::test]
    async fn load_missing_file_fails() {
        let dir = tempdir().expect("temp dir");
        let result = load(dir.path().join("missing.png")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn load_reads_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("ok.png");
        std::fs::write(&path, png_bytes()).expect("write");
        let image = load(path).await.expect("load");
        assert_eq!(image.width, 4);
    }

    #[test]
    fn slot_fades_in_after_load() {
        let t0 = Instant::now();
        let mut slot = ImageSlot::Idle;
        assert_eq!(slot.opacity(t0), 0.0);
        assert!(slot.begin_loading());
        assert!(!slot.begin_loading());

        slot.finish(decode(&png_bytes()), t0, None);
        assert_eq!(slot.opacity(t0), 0.0);
        assert!(slot.is_fading(t0 + Duration::from_millis(150)));
        assert_eq!(slot.opacity(t0 + Duration::from_millis(300)), 1.0);
    }

    #[test]
    fn failed_slot_shows_placeholder() {
        let mut slot = ImageSlot::Loading;
        slot.finish(Err(Error::Io("broken".into())), Instant::now(), None);
        assert!(slot.is_failed());
        assert_eq!(slot.opacity(Instant::now()), 1.0);
    }

    #[test]
    fn start_skips_cards_without_images_and_repeats() {
        let mut images = LazyImages::new(vec![None, Some(PathBuf::from("a.png"))]);
        let started = images.start(&[0, 1, 7]);
        assert_eq!(started, vec![(1, PathBuf::from("a.png"))]);
        assert!(images.start(&[1]).is_empty());
        assert!(!images.has_image(0));
    }
}
