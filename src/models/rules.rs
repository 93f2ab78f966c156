//! Naming rule configuration models.
//!
//! These are the raw, serde-facing shapes. Validation and template
//! compilation happen in [`crate::core::ruleset`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::media::{MediaSource, MediaType};

/// Built-in metadata fields per media type.
const MUSIC_FIELDS: &[&str] = &["title", "artist", "album", "track", "disc", "year", "genre"];
const AUDIOBOOK_FIELDS: &[&str] = &["title", "author", "narrator", "series", "book", "year"];
const EBOOK_FIELDS: &[&str] = &["title", "author", "series", "book", "year"];
const MOVIE_FIELDS: &[&str] = &["title", "year", "edition"];
const TVSHOW_FIELDS: &[&str] = &["title", "season", "episode", "episode_title", "year"];

/// One naming rule as written in configuration.
///
/// `source` selects which origin tag the rule applies to. Omitting it or
/// writing `"*"` makes the rule a wildcard for its media type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Template for the file name, without extension.
    pub name: String,
    /// Template for the directory path under the destination root.
    pub path: String,
}

impl RuleDef {
    /// The source this rule selects on, `None` for wildcard.
    ///
    /// An explicit `"unknown"` is an exact match on files with no known
    /// source, not a wildcard.
    pub fn selector_source(&self) -> Option<MediaSource> {
        match self.source.as_deref() {
            None | Some("*") => None,
            Some(tag) => Some(MediaSource::parse(tag)),
        }
    }
}

/// Extra template fields declared in configuration, merged on top of the
/// built-in registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldExtensions {
    pub music: Vec<String>,
    pub audiobook: Vec<String>,
    pub ebook: Vec<String>,
    pub movie: Vec<String>,
    pub tvshow: Vec<String>,
}

impl FieldExtensions {
    pub fn for_type(&self, media_type: MediaType) -> &[String] {
        match media_type {
            MediaType::Music => &self.music,
            MediaType::Audiobook => &self.audiobook,
            MediaType::Ebook => &self.ebook,
            MediaType::Movie => &self.movie,
            MediaType::TvShow => &self.tvshow,
        }
    }

    pub fn is_empty(&self) -> bool {
        MediaType::all()
            .iter()
            .all(|t| self.for_type(*t).is_empty())
    }
}

/// The set of fields templates may reference, per media type.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: BTreeMap<MediaType, BTreeSet<String>>,
}

impl FieldRegistry {
    /// Registry with only the built-in fields.
    pub fn builtin() -> Self {
        Self::with_extensions(&FieldExtensions::default())
    }

    /// Registry with built-in fields plus configured extensions.
    pub fn with_extensions(extensions: &FieldExtensions) -> Self {
        let mut fields = BTreeMap::new();
        for media_type in MediaType::all() {
            let builtin = match media_type {
                MediaType::Music => MUSIC_FIELDS,
                MediaType::Audiobook => AUDIOBOOK_FIELDS,
                MediaType::Ebook => EBOOK_FIELDS,
                MediaType::Movie => MOVIE_FIELDS,
                MediaType::TvShow => TVSHOW_FIELDS,
            };
            let mut set: BTreeSet<String> = builtin.iter().map(|s| s.to_string()).collect();
            for extra in extensions.for_type(media_type) {
                set.insert(extra.trim().to_lowercase());
            }
            fields.insert(media_type, set);
        }
        Self { fields }
    }

    pub fn contains(&self, media_type: MediaType, field: &str) -> bool {
        self.fields
            .get(&media_type)
            .map(|set| set.contains(field))
            .unwrap_or(false)
    }

    /// Known fields for a media type, sorted.
    pub fn fields_for(&self, media_type: MediaType) -> Vec<&str> {
        self.fields
            .get(&media_type)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// The `[naming]` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Replacement for reserved characters in rendered names.
    pub substitute: char,
    /// Ordered rule list. Earlier rules win within a selector.
    pub rules: Vec<RuleDef>,
    #[serde(skip_serializing_if = "FieldExtensions::is_empty")]
    pub fields: FieldExtensions,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            substitute: '_',
            rules: default_rules(),
            fields: FieldExtensions::default(),
        }
    }
}

/// The built-in rule set, one wildcard rule per media type.
pub fn default_rules() -> Vec<RuleDef> {
    fn rule(media_type: MediaType, name: &str, path: &str) -> RuleDef {
        RuleDef {
            media_type,
            source: None,
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    vec![
        rule(MediaType::Music, "{track} - {title}", "{artist}/{album}"),
        rule(MediaType::Audiobook, "{title}", "{author}/{title}"),
        rule(MediaType::Ebook, "{title}", "{author}"),
        rule(MediaType::Movie, "{title} ({year})", "{title} ({year})"),
        rule(
            MediaType::TvShow,
            "{title} S{season}E{episode}",
            "{title}/Season {season}",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_source_wildcard_forms() {
        let mut def = default_rules().remove(0);
        assert_eq!(def.selector_source(), None);
        def.source = Some("*".to_string());
        assert_eq!(def.selector_source(), None);
    }

    #[test]
    fn test_selector_source_exact() {
        let mut def = default_rules().remove(0);
        def.source = Some("CD".to_string());
        assert_eq!(
            def.selector_source(),
            Some(MediaSource::Tag("cd".to_string()))
        );
        def.source = Some("unknown".to_string());
        assert_eq!(def.selector_source(), Some(MediaSource::Unknown));
    }

    #[test]
    fn test_builtin_registry_contains_core_fields() {
        let registry = FieldRegistry::builtin();
        assert!(registry.contains(MediaType::Movie, "title"));
        assert!(registry.contains(MediaType::Movie, "year"));
        assert!(registry.contains(MediaType::TvShow, "episode"));
        assert!(registry.contains(MediaType::Music, "track"));
        assert!(!registry.contains(MediaType::Movie, "author"));
        assert!(!registry.contains(MediaType::Ebook, "episode"));
    }

    #[test]
    fn test_registry_extensions_merge() {
        let extensions = FieldExtensions {
            movie: vec!["Resolution".to_string()],
            ..Default::default()
        };
        let registry = FieldRegistry::with_extensions(&extensions);
        assert!(registry.contains(MediaType::Movie, "resolution"));
        assert!(registry.contains(MediaType::Movie, "title"));
        assert!(!registry.contains(MediaType::Music, "resolution"));
    }

    #[test]
    fn test_fields_for_lists_known_fields() {
        let registry = FieldRegistry::builtin();
        assert_eq!(
            registry.fields_for(MediaType::Movie),
            vec!["edition", "title", "year"]
        );

        let extensions = FieldExtensions {
            movie: vec!["cut".to_string()],
            ..Default::default()
        };
        let extended = FieldRegistry::with_extensions(&extensions);
        assert!(extended.fields_for(MediaType::Movie).contains(&"cut"));
    }

    #[test]
    fn test_default_rules_cover_every_media_type() {
        let rules = default_rules();
        for media_type in MediaType::all() {
            let matching: Vec<_> = rules
                .iter()
                .filter(|r| r.media_type == media_type)
                .collect();
            assert_eq!(matching.len(), 1, "one default rule for {media_type}");
            assert_eq!(matching[0].selector_source(), None);
        }
    }
}
