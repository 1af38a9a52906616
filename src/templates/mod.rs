//! Blog page templates using the Tera template engine
//!
//! All templates are embedded directly in the binary. The listing and login
//! contexts deliberately carry no `html` field, so those rendering paths
//! cannot expose a protected post's content.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{full_date, iso_date};

/// Template renderer with embedded blog templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("blog/layout.html")),
            ("index.html", include_str!("blog/index.html")),
            ("post.html", include_str!("blog/post.html")),
            ("not_found.html", include_str!("blog/not_found.html")),
            ("login.html", include_str!("blog/login.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render the listing page: every post, newest first, metadata only.
    pub fn render_index(&self, config: &SiteConfig, posts: &[Post]) -> Result<String> {
        let items: Vec<PostItemData> = posts
            .iter()
            .map(|p| PostItemData::from_post(p, config))
            .collect();

        let mut context = Context::new();
        context.insert("site", &SiteData::from_config(config));
        context.insert("posts", &items);
        Ok(self.tera.render("index.html", &context)?)
    }

    /// Render a post page. The compiled `html` is exposed here and nowhere
    /// else.
    pub fn render_post(&self, config: &SiteConfig, post: &Post) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", &SiteData::from_config(config));
        context.insert("post", &PostPageData::from_post(post));
        Ok(self.tera.render("post.html", &context)?)
    }

    /// Render the page shown for a slug with no matching post.
    pub fn render_not_found(&self, config: &SiteConfig) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", &SiteData::from_config(config));
        Ok(self.tera.render("not_found.html", &context)?)
    }

    /// Render the login prompt shown instead of a protected post.
    pub fn render_login(&self, config: &SiteConfig) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", &SiteData::from_config(config));
        Ok(self.tera.render("login.html", &context)?)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
struct SiteData {
    title: String,
    description: String,
    root: String,
    login_url: String,
}

impl SiteData {
    fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            root: config.root.clone(),
            login_url: config.auth.login_url.clone(),
        }
    }
}

/// One listing entry; carries no `html`.
#[derive(Debug, Clone, Serialize)]
struct PostItemData {
    title: String,
    author: String,
    date: String,
    date_iso: String,
    summary: String,
    protected: bool,
    url: String,
}

impl PostItemData {
    fn from_post(post: &Post, config: &SiteConfig) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            date: full_date(&post.date),
            date_iso: iso_date(&post.date),
            summary: post.summary.clone(),
            protected: post.protected,
            url: format!("{}/{}", config.root.trim_end_matches('/'), post.slug),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct PostPageData {
    title: String,
    author: String,
    date: String,
    date_iso: String,
    html: String,
}

impl PostPageData {
    fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            date: full_date(&post.date),
            date_iso: iso_date(&post.date),
            html: post.html.clone(),
        }
    }
}
