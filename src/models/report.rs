//! Rename plan data model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::media::{MediaSource, MediaType, RenderedName};

/// Report version.
pub const PLAN_VERSION: &str = "1.0";

/// The outcome of planning a rename batch.
///
/// Serialized as pretty JSON when `--json` is given, so the plan can be
/// inspected or fed to other tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePlan {
    /// Plan format version.
    pub version: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Destination root all targets resolve under.
    pub destination: PathBuf,
    /// Whether the plan was produced without applying it.
    pub dry_run: bool,
    /// Files with a resolved target.
    pub items: Vec<RenameItem>,
    /// Files already at their target path.
    pub skipped: Vec<PathBuf>,
    /// Files that could not be planned or moved.
    pub failures: Vec<FailureItem>,
}

impl RenamePlan {
    pub fn new(destination: PathBuf, dry_run: bool) -> Self {
        Self {
            version: PLAN_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            destination,
            dry_run,
            items: Vec::new(),
            skipped: Vec::new(),
            failures: Vec::new(),
        }
    }
}

/// A single planned rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameItem {
    /// Classified media type.
    pub media_type: MediaType,
    /// Classified source tag.
    pub source: MediaSource,
    /// Current path of the file.
    pub from: PathBuf,
    /// Rendered name and relative directory.
    pub rendered: RenderedName,
    /// Full target path under the destination root.
    pub to: PathBuf,
}

/// A file the batch could not handle, with the reason it failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureItem {
    pub path: PathBuf,
    pub reason: String,
}
