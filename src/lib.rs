//! minipress: a small markdown blog engine
//!
//! This crate ingests a directory of markdown documents with YAML
//! front-matter into an immutable in-memory collection of posts, and serves a
//! listing page and a post page over it, gating protected posts behind a
//! viewer identity resolved by an external authentication collaborator.

pub mod access;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

use content::loader::ContentLoader;
use content::PostCollection;

/// Configuration file looked up in the base directory
const CONFIG_FILE: &str = "minipress.yml";

/// The main application: configuration plus resolved directories
#[derive(Clone)]
pub struct Minipress {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source document directory
    pub content_dir: std::path::PathBuf,
}

impl Minipress {
    /// Create a new instance from a base directory, reading `minipress.yml`
    /// when present.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content.dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Build the post collection from the source documents.
    ///
    /// Build errors are fatal: a deploy with invalid content must not start.
    pub fn build(&self) -> Result<PostCollection> {
        let collection = ContentLoader::new(self).build()?;
        Ok(collection)
    }
}
