//! Site configuration (minipress.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    /// URL prefix the blog is mounted under ("/" when served standalone)
    pub root: String,

    // Content
    #[serde(default)]
    pub content: ContentConfig,

    // Auth collaborator
    #[serde(default)]
    pub auth: AuthConfig,

    // Code highlighting
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog Posts".to_string(),
            description: "Latest articles and updates".to_string(),
            root: "/".to_string(),
            content: ContentConfig::default(),
            auth: AuthConfig::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Source document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory of source documents, relative to the base directory
    pub dir: String,
    /// Pattern matched against document file names
    pub include: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "content".to_string(),
            include: "*.md".to_string(),
        }
    }
}

/// External authentication collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Trusted header carrying the resolved viewer identity
    pub viewer_header: String,
    /// Login page of the surrounding application
    pub login_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            viewer_header: "x-authenticated-user".to_string(),
            login_url: "/user/login".to_string(),
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Syntect theme used for fenced code blocks
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Blog Posts");
        assert_eq!(config.content.dir, "content");
        assert_eq!(config.content.include, "*.md");
        assert_eq!(config.auth.viewer_header, "x-authenticated-user");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
root: /blog
content:
  dir: posts
auth:
  viewer_header: x-user
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.root, "/blog");
        assert_eq!(config.content.dir, "posts");
        // Unset fields keep their defaults
        assert_eq!(config.content.include, "*.md");
        assert_eq!(config.auth.viewer_header, "x-user");
        assert_eq!(config.auth.login_url, "/user/login");
    }
}
