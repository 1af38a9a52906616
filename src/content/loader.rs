//! Collection builder - discovers, validates and compiles source documents

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use glob::Pattern;
use walkdir::WalkDir;

use super::error::BuildError;
use super::{FrontMatter, MarkdownRenderer, Post, PostCollection};
use crate::Minipress;

/// Builds the post collection from the content directory.
pub struct ContentLoader<'a> {
    app: &'a Minipress,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(app: &'a Minipress) -> Self {
        let renderer = MarkdownRenderer::new(&app.config.highlight.theme);
        Self { app, renderer }
    }

    /// Discover every document matching the include pattern, validate and
    /// compile each one, and assemble the collection.
    ///
    /// Fails on the first invalid document; a bad document is never silently
    /// skipped. Two documents whose paths derive the same slug abort the whole
    /// build.
    pub fn build(&self) -> Result<PostCollection, BuildError> {
        let content_dir = &self.app.content_dir;
        if !content_dir.exists() {
            return Err(BuildError::MissingContentDir(content_dir.clone()));
        }

        let include_pattern = &self.app.config.content.include;
        let include = Pattern::new(include_pattern).map_err(|source| BuildError::InvalidPattern {
            pattern: include_pattern.clone(),
            source,
        })?;

        // Fix the document order up front so the collection does not depend on
        // filesystem walk order.
        let mut paths: Vec<_> = WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.path().to_path_buf())
            .collect();
        paths.sort();

        let mut posts = Vec::new();
        // slug -> source path, for duplicate detection
        let mut seen: HashMap<String, String> = HashMap::new();

        for path in paths {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            if !include.matches(name) {
                continue;
            }

            let post = self.load_document(&path)?;
            if let Some(first) = seen.insert(post.slug.clone(), post.path.clone()) {
                return Err(BuildError::DuplicateSlug {
                    slug: post.slug,
                    first,
                    second: post.path,
                });
            }
            posts.push(post);
        }

        tracing::debug!("built {} posts from {:?}", posts.len(), content_dir);
        Ok(PostCollection::new(posts))
    }

    /// Validate and compile a single source document.
    fn load_document(&self, path: &Path) -> Result<Post, BuildError> {
        let source = fs::read_to_string(path)?;
        let rel = path
            .strip_prefix(&self.app.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let (fm, body) = FrontMatter::parse(&source).map_err(|source| BuildError::Validation {
            path: rel.clone(),
            source,
        })?;

        let html = self.renderer.render(body).map_err(|source| BuildError::Compile {
            path: rel.clone(),
            source,
        })?;

        let slug = Post::slug_of(&rel);
        tracing::debug!("loaded {} ({})", rel, fm.title);

        Ok(Post {
            title: fm.title,
            summary: fm.summary,
            date: fm.date,
            author: fm.author,
            protected: fm.protected,
            path: rel,
            slug,
            html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::ValidationError;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn app_at(dir: &TempDir, include: &str) -> Minipress {
        let mut config = SiteConfig::default();
        config.content.include = include.to_string();
        Minipress {
            config,
            base_dir: dir.path().to_path_buf(),
            content_dir: dir.path().to_path_buf(),
        }
    }

    const POST_A: &str = r#"---
title: First post
summary: The first one
date: 2024-01-01
author: ada
---

# Hello

Body of the first post.
"#;

    const POST_B: &str = r#"---
title: Members post
summary: The second one
date: 2024-06-01
author: grace
protected: true
---

Body of the second post.
"#;

    #[test]
    fn test_build_two_documents() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.md", POST_A);
        write(&dir, "b.md", POST_B);

        let app = app_at(&dir, "*.md");
        let collection = ContentLoader::new(&app).build().unwrap();

        // Newest first
        let slugs: Vec<_> = collection.list_all().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["b", "a"]);

        let a = collection.find_by_slug("a").unwrap();
        assert_eq!(a.title, "First post");
        assert_eq!(a.path, "a.md");
        assert!(!a.protected);
        assert!(a.html.contains("<h1>Hello</h1>"));

        let b = collection.find_by_slug("b").unwrap();
        assert!(b.protected);
        // Protected bodies are compiled at build time regardless
        assert!(b.html.contains("Body of the second post."));

        assert!(collection.find_by_slug("c").is_none());
    }

    #[test]
    fn test_missing_title_aborts_build() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "bad.md",
            "---\nsummary: s\ndate: 2024-01-01\nauthor: ada\n---\nBody.\n",
        );

        let app = app_at(&dir, "*.md");
        let err = ContentLoader::new(&app).build().unwrap_err();
        match err {
            BuildError::Validation { path, source } => {
                assert_eq!(path, "bad.md");
                assert!(matches!(
                    source,
                    ValidationError::MissingField { field: "title", .. }
                ));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_unparsable_date_aborts_build() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "bad.md",
            "---\ntitle: t\nsummary: s\ndate: whenever\nauthor: ada\n---\nBody.\n",
        );

        let app = app_at(&dir, "*.md");
        let err = ContentLoader::new(&app).build().unwrap_err();
        assert!(matches!(
            err,
            BuildError::Validation {
                source: ValidationError::UnparsableDate(_),
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_slug_aborts_build() {
        let dir = TempDir::new().unwrap();
        // Both derive the slug "a" once their markdown suffixes are stripped
        write(&dir, "a.md", POST_A);
        write(&dir, "a.markdown", POST_B);

        let app = app_at(&dir, "*");
        let err = ContentLoader::new(&app).build().unwrap_err();
        match err {
            BuildError::DuplicateSlug { slug, first, second } => {
                assert_eq!(slug, "a");
                assert_eq!(first, "a.markdown");
                assert_eq!(second, "a.md");
            }
            other => panic!("expected duplicate slug error, got {other}"),
        }
    }

    #[test]
    fn test_include_pattern_filters_documents() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.md", POST_A);
        write(&dir, "notes.txt", "not a post");

        let app = app_at(&dir, "*.md");
        let collection = ContentLoader::new(&app).build().unwrap();
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_missing_content_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut app = app_at(&dir, "*.md");
        app.content_dir = dir.path().join("nope");

        let err = ContentLoader::new(&app).build().unwrap_err();
        assert!(matches!(err, BuildError::MissingContentDir(_)));
    }
}
