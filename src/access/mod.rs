//! Access gate for protected posts
//!
//! Login state is consumed here, never produced: the viewer identity comes
//! from an external authentication collaborator, and the gate only decides
//! whether a record's content may be shown.

use crate::content::Post;

/// An authenticated viewer, as resolved by the external auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub name: String,
}

/// Outcome of the gate for one record and one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The viewer may see the post content.
    Visible,
    /// The post is protected and no viewer identity is present.
    Forbidden,
}

/// Decide whether a viewer may see a post's content.
///
/// Runs at serve time only. Protected bodies are compiled at build time
/// regardless; the gate controls exposure, not compilation.
pub fn check(post: &Post, viewer: Option<&Viewer>) -> Access {
    if post.protected && viewer.is_none() {
        Access::Forbidden
    } else {
        Access::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(protected: bool) -> Post {
        Post {
            title: "t".to_string(),
            summary: "s".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            author: "ada".to_string(),
            protected,
            path: "t.md".to_string(),
            slug: "t".to_string(),
            html: String::new(),
        }
    }

    fn viewer() -> Viewer {
        Viewer {
            name: "alice".to_string(),
        }
    }

    #[test]
    fn test_protected_without_viewer_is_forbidden() {
        assert_eq!(check(&post(true), None), Access::Forbidden);
    }

    #[test]
    fn test_protected_with_viewer_is_visible() {
        assert_eq!(check(&post(true), Some(&viewer())), Access::Visible);
    }

    #[test]
    fn test_unprotected_is_always_visible() {
        assert_eq!(check(&post(false), None), Access::Visible);
        assert_eq!(check(&post(false), Some(&viewer())), Access::Visible);
    }
}
