//! Name rendering and sanitization.
//!
//! Turns a classified file plus its resolved naming rule into a
//! [`RenderedName`]. Rendering is pure: the same input and rule always
//! produce the same output.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::models::media::{MediaInput, RenderedName};

use super::ruleset::NamingRule;

/// Characters never allowed in a rendered name or path segment.
const RESERVED_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Names Windows reserves for devices, checked against the segment stem.
const RESERVED_NAMES: &[&str] = &[
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Renders file names and destination paths from naming rules.
#[derive(Debug, Clone)]
pub struct Renderer {
    substitute: char,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { substitute: '_' }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with a configured substitute character.
    ///
    /// The substitute itself must be a character sanitization would let
    /// through unchanged, otherwise cleaning could never settle.
    pub fn with_substitute(substitute: char) -> Result<Self> {
        if RESERVED_CHARS.contains(&substitute)
            || substitute.is_control()
            || substitute.is_whitespace()
            || substitute == '.'
        {
            return Err(Error::InvalidSubstitute(substitute));
        }
        Ok(Self { substitute })
    }

    pub fn substitute(&self) -> char {
        self.substitute
    }

    /// Render `input` through `rule` into a file name and destination path.
    ///
    /// Metadata values are substituted verbatim, with no padding or case
    /// changes. Fields that are absent, empty, or whitespace-only fail
    /// with `MissingRequiredField`. In path templates only the literal
    /// `/` separates directories; separators inside metadata values are
    /// replaced like any other reserved character.
    pub fn render(&self, input: &MediaInput, rule: &NamingRule) -> Result<RenderedName> {
        let lookup = |field: &str| {
            input
                .metadata
                .get(field)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let name_raw = rule
            .name_template
            .render_with(lookup)
            .map_err(|field| self.missing(input, field))?;
        let file_name = sanitize_component(&name_raw, self.substitute);
        if file_name.is_empty() {
            return Err(self.unsanitizable(input, &name_raw));
        }

        let path_lookup =
            |field: &str| lookup(field).map(|value| sanitize_component(&value, self.substitute));
        let path_raw = rule
            .path_template
            .render_with(path_lookup)
            .map_err(|field| self.missing(input, field))?;
        let destination_path = self.sanitize_path(&path_raw, input)?;

        Ok(RenderedName {
            file_name,
            destination_path,
        })
    }

    /// Split a rendered path on `/` and sanitize each segment.
    ///
    /// Empty segments from doubled or edge separators are dropped; the
    /// result is always relative to the destination root. A non-empty
    /// segment that sanitizes away entirely is an error.
    fn sanitize_path(&self, raw: &str, input: &MediaInput) -> Result<PathBuf> {
        let mut path = PathBuf::new();
        for segment in raw.split('/') {
            if segment.is_empty() {
                continue;
            }
            let clean = sanitize_component(segment, self.substitute);
            if clean.is_empty() {
                return Err(self.unsanitizable(input, raw));
            }
            path.push(clean);
        }
        Ok(path)
    }

    fn missing(&self, input: &MediaInput, field: String) -> Error {
        Error::MissingRequiredField {
            path: input.raw_path.display().to_string(),
            field,
        }
    }

    fn unsanitizable(&self, input: &MediaInput, rendered: &str) -> Error {
        Error::InvalidSanitizedOutput {
            path: input.raw_path.display().to_string(),
            rendered: rendered.to_string(),
        }
    }
}

/// Sanitize one file name or path segment.
///
/// Reserved and control characters become the substitute, runs of the
/// substitute collapse to one, and outer whitespace is trimmed. `.` and
/// `..` never pass through as segments, and a Windows device-name stem
/// is replaced by the substitute. Applying this twice gives the same
/// result as applying it once.
pub fn sanitize_component(raw: &str, substitute: char) -> String {
    let mut collapsed = String::with_capacity(raw.len());
    let mut prev_sub = false;
    for c in raw.chars() {
        let c = if RESERVED_CHARS.contains(&c) || c.is_control() {
            substitute
        } else {
            c
        };
        if c == substitute {
            if !prev_sub {
                collapsed.push(c);
            }
            prev_sub = true;
        } else {
            collapsed.push(c);
            prev_sub = false;
        }
    }

    let trimmed = collapsed.trim();

    if trimmed == "." || trimmed == ".." {
        return substitute.to_string();
    }
    let stem = trimmed.split('.').next().unwrap_or(trimmed);
    if RESERVED_NAMES.contains(&stem.to_lowercase().as_str()) {
        return format!("{}{}", substitute, &trimmed[stem.len()..]);
    }

    trimmed.to_string()
}
