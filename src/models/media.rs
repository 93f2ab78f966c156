//! Media-related data models.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Media type enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum MediaType {
    Music,
    Audiobook,
    Ebook,
    Movie,
    TvShow,
}

impl MediaType {
    /// All media types, in declaration order.
    pub fn all() -> [MediaType; 5] {
        [
            MediaType::Music,
            MediaType::Audiobook,
            MediaType::Ebook,
            MediaType::Movie,
            MediaType::TvShow,
        ]
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Music => write!(f, "music"),
            MediaType::Audiobook => write!(f, "audiobook"),
            MediaType::Ebook => write!(f, "ebook"),
            MediaType::Movie => write!(f, "movie"),
            MediaType::TvShow => write!(f, "tvshow"),
        }
    }
}

/// Where a media file came from (a ripped CD, a storefront, a scan).
///
/// Sources are free-form tags, normalized to lowercase. The absence of a
/// known origin is the distinct `Unknown` value, which rules can match
/// exactly. Serialized as a plain string ("unknown" for `Unknown`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaSource {
    Unknown,
    Tag(String),
}

impl MediaSource {
    /// Parse a source tag, trimming and lowercasing.
    ///
    /// Empty strings and "unknown" both map to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        let tag = raw.trim().to_lowercase();
        if tag.is_empty() || tag == "unknown" {
            MediaSource::Unknown
        } else {
            MediaSource::Tag(tag)
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, MediaSource::Unknown)
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaSource::Unknown => "unknown",
            MediaSource::Tag(tag) => tag,
        }
    }
}

impl From<String> for MediaSource {
    fn from(raw: String) -> Self {
        MediaSource::parse(&raw)
    }
}

impl From<MediaSource> for String {
    fn from(source: MediaSource) -> String {
        source.as_str().to_string()
    }
}

impl std::fmt::Display for MediaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified media file, ready for name rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaInput {
    /// Kind of media this file holds.
    pub media_type: MediaType,
    /// Origin tag used for rule resolution.
    pub source: MediaSource,
    /// Path the file was found at.
    pub raw_path: PathBuf,
    /// Extracted metadata fields, keyed by field name.
    pub metadata: BTreeMap<String, String>,
}

impl MediaInput {
    /// Look up a metadata field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.metadata.get(name).map(String::as_str)
    }
}

/// The rendered result for one file: a sanitized file name (without
/// extension) and a relative destination directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedName {
    /// File name without extension. Non-empty, free of path separators.
    pub file_name: String,
    /// Directory the file belongs under, relative to the destination root.
    pub destination_path: PathBuf,
}

impl RenderedName {
    /// Resolve the full target path under `root`, re-attaching `extension`
    /// when the original file had one.
    pub fn resolve(&self, root: &Path, extension: Option<&str>) -> PathBuf {
        let file = match extension {
            Some(ext) if !ext.is_empty() => format!("{}.{}", self.file_name, ext),
            _ => self.file_name.clone(),
        };
        root.join(&self.destination_path).join(file)
    }
}
