//! Post lookup over the built collection

use super::Post;

/// The immutable set of built posts, sorted newest first.
///
/// Built once, read many: after construction the collection is never mutated,
/// so concurrent reads from request handlers need no locking.
#[derive(Debug, Clone)]
pub struct PostCollection {
    posts: Vec<Post>,
}

impl PostCollection {
    /// Sort once at construction: date descending, ties keeping the incoming
    /// document order (the sort is stable).
    pub(crate) fn new(mut posts: Vec<Post>) -> Self {
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Self { posts }
    }

    /// All posts, most recent first.
    pub fn list_all(&self) -> &[Post] {
        &self.posts
    }

    /// Find the post whose derived slug matches exactly (case-sensitive).
    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(slug: &str, date: &str) -> Post {
        Post {
            title: slug.to_string(),
            summary: String::new(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            author: "ada".to_string(),
            protected: false,
            path: format!("{}.md", slug),
            slug: slug.to_string(),
            html: String::new(),
        }
    }

    fn slugs(collection: &PostCollection) -> Vec<&str> {
        collection.list_all().iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_list_all_sorted_by_date_descending() {
        let collection = PostCollection::new(vec![
            post("old", "2023-03-01"),
            post("newest", "2024-06-01"),
            post("middle", "2024-01-01"),
        ]);
        assert_eq!(slugs(&collection), ["newest", "middle", "old"]);
    }

    #[test]
    fn test_equal_dates_keep_document_order() {
        let collection = PostCollection::new(vec![
            post("a", "2024-01-01"),
            post("b", "2024-01-01"),
            post("c", "2024-01-01"),
        ]);
        assert_eq!(slugs(&collection), ["a", "b", "c"]);
    }

    #[test]
    fn test_find_by_slug() {
        let collection = PostCollection::new(vec![post("a", "2024-01-01"), post("b", "2024-06-01")]);

        assert_eq!(collection.find_by_slug("a").unwrap().slug, "a");
        assert!(collection.find_by_slug("c").is_none());
        // Comparison is exact and case-sensitive
        assert!(collection.find_by_slug("A").is_none());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let collection = PostCollection::new(vec![post("a", "2024-01-01"), post("b", "2024-06-01")]);
        assert_eq!(slugs(&collection), ["b", "a"]);
        assert_eq!(slugs(&collection), ["b", "a"]);
    }
}
