//! Name and path templates.
//!
//! A template is literal text with `{field}` placeholders, e.g.
//! `"{title} ({year})"`. Parsing rejects malformed placeholder syntax;
//! which field names are allowed is checked against the field registry
//! when the rule set is loaded.

use crate::error::{Error, Result};

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Text copied through verbatim.
    Literal(String),
    /// A `{field}` placeholder, stored without braces.
    Field(String),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    parts: Vec<TemplatePart>,
}

impl Template {
    /// Parse a template string.
    ///
    /// Field names are `[a-z0-9_]+`. Braces have no escape syntax: `{`
    /// always opens a placeholder and a bare `}` is an error.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut field = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        field.push(c);
                    }
                    if !closed {
                        return Err(invalid(raw, "unclosed placeholder"));
                    }
                    if field.is_empty() {
                        return Err(invalid(raw, "empty placeholder"));
                    }
                    if !field
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
                    {
                        return Err(invalid(raw, &format!("invalid field name '{field}'")));
                    }
                    if !literal.is_empty() {
                        parts.push(TemplatePart::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(TemplatePart::Field(field));
                }
                '}' => return Err(invalid(raw, "unmatched '}'")),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            parts.push(TemplatePart::Literal(literal));
        }

        Ok(Self {
            raw: raw.to_string(),
            parts,
        })
    }

    /// The original template text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// Field names referenced by this template, in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Field(name) => Some(name.as_str()),
            TemplatePart::Literal(_) => None,
        })
    }

    /// Substitute placeholders using `lookup`.
    ///
    /// Values are spliced in verbatim, with no padding or reformatting.
    /// Returns the name of the first unresolvable field as the error.
    pub fn render_with<F>(&self, lookup: F) -> std::result::Result<String, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => out.push_str(text),
                TemplatePart::Field(name) => match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => return Err(name.clone()),
                },
            }
        }
        Ok(out)
    }
}

fn invalid(template: &str, reason: &str) -> Error {
    Error::InvalidTemplate {
        template: template.to_string(),
        reason: reason.to_string(),
    }
}
