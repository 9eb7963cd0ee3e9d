//! folio: markdown blog content resolver for a personal portfolio site
//!
//! Discovers post sources under a content root, parses their front-matter,
//! fills in missing metadata from filename conventions and serves the
//! resulting date-sorted collection from a policy-controlled cache.

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{FsSourceEnumerator, ResolveOptions, Resolver};

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "folio.yml";

/// A site directory and its configuration
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root holding post sources
    pub content_dir: PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Build a resolver over the content root
    pub fn resolver(&self) -> Resolver {
        let sources = FsSourceEnumerator::new(
            self.base_dir.as_path(),
            self.content_dir.as_path(),
            &self.config.extension,
        );
        Resolver::new(
            sources,
            ResolveOptions::from(&self.config),
            self.config.mode.cache_policy(),
        )
    }

    /// Scaffold a new post
    pub fn new_post(&self, title: &str, date: Option<&str>) -> Result<PathBuf> {
        commands::new::create_post(self, title, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_site_directory() {
        let tmp = TempDir::new().unwrap();
        let folder = tmp.path().join("content/blog/2024-03-10");
        fs::create_dir_all(&folder).unwrap();
        fs::write(
            folder.join("2024-03-10_first-steps.md"),
            "---\ntags: [rust]\nfeatured: true\n---\nHello.\n",
        )
        .unwrap();
        fs::write(tmp.path().join("content/blog/2023-07-01_older.md"), "Old news.").unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        let resolver = folio.resolver();
        let posts = resolver.get_all();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "2024-03-10_first-steps");
        assert_eq!(posts[0].title, "first-steps");
        assert_eq!(
            posts[0].banner_url.as_deref(),
            Some("/content/blog/2024-03-10/banner.png")
        );
        assert_eq!(posts[1].date, "2023-07-01");
        assert_eq!(resolver.get_featured().len(), 1);
    }

    #[test]
    fn test_loads_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "content_dir: posts\nmode: development\n",
        )
        .unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.content_dir, tmp.path().join("posts"));
        assert_eq!(folio.config.mode, config::Mode::Development);
    }

    #[test]
    fn test_missing_content_dir_yields_no_posts() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert!(folio.resolver().get_all().is_empty());
    }
}
