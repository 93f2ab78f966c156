//! Media classification.
//!
//! Determines what kind of media a file is and which source tag it
//! carries, producing the [`MediaInput`] the renderer consumes.

use std::path::Path;

use crate::error::{Error, Result};
use crate::models::media::{MediaInput, MediaSource, MediaType};

use super::metadata;

/// Audio extensions treated as music.
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "flac", "m4a", "aac", "ogg", "opus", "wav", "alac", "wma", "aiff", "ape",
];

/// Audiobook container extensions.
pub const AUDIOBOOK_EXTENSIONS: &[&str] = &["m4b", "aa", "aax"];

/// Ebook extensions.
pub const EBOOK_EXTENSIONS: &[&str] = &["epub", "mobi", "azw", "azw3", "fb2", "pdf", "cbz", "cbr"];

/// Video extensions, split into movie and TV show by episode markers.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "mov", "wmv", "m4v", "ts", "m2ts", "flv", "webm", "mpg", "mpeg",
];

/// Per-run overrides from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ClassifyHints {
    pub media_type: Option<MediaType>,
    pub source: Option<MediaSource>,
}

/// Classifies files into media inputs.
#[derive(Debug, Clone)]
pub struct Classifier {
    hints: ClassifyHints,
    default_source: MediaSource,
}

impl Classifier {
    pub fn new(hints: ClassifyHints, default_source: MediaSource) -> Self {
        Self {
            hints,
            default_source,
        }
    }

    /// Classify one file.
    ///
    /// The file must exist and be a readable regular file. Metadata
    /// extraction itself is best-effort and never fails classification;
    /// missing fields surface later, at render time.
    pub fn classify(&self, path: &Path) -> Result<MediaInput> {
        let file_meta = std::fs::metadata(path).map_err(|e| Error::UnreadableSource {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        if !file_meta.is_file() {
            return Err(Error::UnreadableSource {
                path: path.display().to_string(),
                reason: "not a regular file".to_string(),
            });
        }

        let media_type = match self.hints.media_type {
            Some(media_type) => media_type,
            None => detect_media_type(path)
                .ok_or_else(|| Error::UnclassifiableInput(path.display().to_string()))?,
        };
        let source = self
            .hints
            .source
            .clone()
            .unwrap_or_else(|| self.default_source.clone());
        let metadata = metadata::extract(path, media_type);
        tracing::debug!(
            "Classified {} as {}/{} with {} fields",
            path.display(),
            media_type,
            source,
            metadata.len()
        );

        Ok(MediaInput {
            media_type,
            source,
            raw_path: path.to_path_buf(),
            metadata,
        })
    }
}

/// Detect a file's media type from its extension.
///
/// Video files with episode markers in the name or directory layout are
/// TV shows, the rest are movies.
pub fn detect_media_type(path: &Path) -> Option<MediaType> {
    let ext = path.extension().and_then(|e| e.to_str())?.to_lowercase();
    let ext = ext.as_str();

    if AUDIO_EXTENSIONS.contains(&ext) {
        return Some(MediaType::Music);
    }
    if AUDIOBOOK_EXTENSIONS.contains(&ext) {
        return Some(MediaType::Audiobook);
    }
    if EBOOK_EXTENSIONS.contains(&ext) {
        return Some(MediaType::Ebook);
    }
    if VIDEO_EXTENSIONS.contains(&ext) {
        return Some(if metadata::has_episode_markers(path) {
            MediaType::TvShow
        } else {
            MediaType::Movie
        });
    }
    None
}

/// Whether a directory scan should pick up this extension at all.
pub fn is_supported_extension(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    let ext = ext.as_str();
    AUDIO_EXTENSIONS.contains(&ext)
        || AUDIOBOOK_EXTENSIONS.contains(&ext)
        || EBOOK_EXTENSIONS.contains(&ext)
        || VIDEO_EXTENSIONS.contains(&ext)
}
