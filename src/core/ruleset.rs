//! Naming rule set.
//!
//! Compiles raw [`RuleDef`]s into validated rules and resolves which rule
//! applies to a classified file. All validation happens at load time so a
//! rule that would fail mid-batch is rejected before any file is touched.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::media::{MediaSource, MediaType};
use crate::models::rules::{FieldRegistry, RuleDef};

use super::template::Template;

/// A validated naming rule with compiled templates.
#[derive(Debug, Clone)]
pub struct NamingRule {
    pub media_type: MediaType,
    /// Source selector, `None` for wildcard.
    pub source: Option<MediaSource>,
    pub name_template: Template,
    pub path_template: Template,
}

impl NamingRule {
    /// Display form of the selector, `"*"` for wildcard.
    pub fn selector(&self) -> String {
        match &self.source {
            Some(source) => source.to_string(),
            None => "*".to_string(),
        }
    }
}

/// The full rule set for a run. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<NamingRule>,
}

impl RuleSet {
    /// Compile and validate rule definitions.
    ///
    /// Rejects duplicate selectors, template syntax errors, and fields
    /// not registered for the rule's media type.
    pub fn load(defs: &[RuleDef], registry: &FieldRegistry) -> Result<Self> {
        let mut seen: HashSet<(MediaType, Option<MediaSource>)> = HashSet::new();
        let mut rules = Vec::with_capacity(defs.len());

        for def in defs {
            let source = def.selector_source();
            if !seen.insert((def.media_type, source.clone())) {
                return Err(Error::DuplicateRule {
                    media_type: def.media_type,
                    selector: source
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "*".to_string()),
                });
            }

            let name_template = Template::parse(&def.name)?;
            let path_template = Template::parse(&def.path)?;

            for field in name_template.fields().chain(path_template.fields()) {
                if !registry.contains(def.media_type, field) {
                    return Err(Error::UnknownTemplateField {
                        media_type: def.media_type,
                        field: field.to_string(),
                    });
                }
            }

            rules.push(NamingRule {
                media_type: def.media_type,
                source,
                name_template,
                path_template,
            });
        }

        tracing::debug!("Loaded {} naming rules", rules.len());
        Ok(Self { rules })
    }

    /// Find the rule for a media type and source.
    ///
    /// An exact source match wins over the media type's wildcard rule.
    pub fn resolve(&self, media_type: MediaType, source: &MediaSource) -> Result<&NamingRule> {
        self.rules
            .iter()
            .find(|rule| rule.media_type == media_type && rule.source.as_ref() == Some(source))
            .or_else(|| {
                self.rules
                    .iter()
                    .find(|rule| rule.media_type == media_type && rule.source.is_none())
            })
            .ok_or_else(|| Error::NoMatchingRule {
                media_type,
                media_source: source.clone(),
            })
    }

    pub fn rules(&self) -> &[NamingRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
