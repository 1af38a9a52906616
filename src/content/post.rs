//! Post record model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A validated, compiled blog post.
///
/// Records are built once at startup and never mutated afterwards; a changed
/// source document requires rebuilding the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Short summary shown on the listing page
    pub summary: String,

    /// Publication date
    pub date: NaiveDateTime,

    /// Post author
    pub author: String,

    /// Whether the post requires a logged-in viewer
    pub protected: bool,

    /// Source document path, relative to the content directory
    pub path: String,

    /// URL-facing identifier, the path minus its markdown suffix
    pub slug: String,

    /// Rendered HTML content
    pub html: String,
}

impl Post {
    /// Derive the URL slug for a document path by stripping the markdown
    /// suffix.
    pub fn slug_of(path: &str) -> String {
        path.strip_suffix(".md")
            .or_else(|| path.strip_suffix(".markdown"))
            .unwrap_or(path)
            .to_string()
    }
}
