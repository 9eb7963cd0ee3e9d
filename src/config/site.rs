//! Site configuration (folio.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::cache::CachePolicy;

/// Whether content edits must show up without a restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    pub fn cache_policy(self) -> CachePolicy {
        match self {
            Mode::Development => CachePolicy::AlwaysReload,
            Mode::Production => CachePolicy::CacheForever,
        }
    }
}

/// What a resolution pass does when some sources fail to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Discard the whole pass and serve an empty collection
    #[default]
    FailClosed,
    /// Drop only the failing sources
    SkipInvalid,
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub author: String,
    pub url: String,

    /// Content root, relative to the site directory
    pub content_dir: String,
    /// Extension of post sources, without the dot
    pub extension: String,

    pub mode: Mode,
    pub failure_policy: FailurePolicy,

    /// Characters of body text used when a post has no excerpt
    pub excerpt_length: usize,
    pub default_read_time: String,
    /// URL prefix under which dated post folders are served
    pub banner_base_url: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            author: String::new(),
            url: "http://localhost:4000".to_string(),

            content_dir: "content/blog".to_string(),
            extension: "md".to_string(),

            mode: Mode::default(),
            failure_policy: FailurePolicy::default(),

            excerpt_length: 200,
            default_read_time: "5 min read".to_string(),
            banner_base_url: "/content/blog".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content/blog");
        assert_eq!(config.excerpt_length, 200);
        assert_eq!(config.default_read_time, "5 min read");
        assert_eq!(config.mode, Mode::Production);
        assert_eq!(config.failure_policy, FailurePolicy::FailClosed);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
mode: development
failure_policy: skip_invalid
excerpt_length: 120
analytics: plausible
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.mode, Mode::Development);
        assert_eq!(config.failure_policy, FailurePolicy::SkipInvalid);
        assert_eq!(config.excerpt_length, 120);
        assert_eq!(config.extension, "md");
        assert!(config.extra.contains_key("analytics"));
    }

    #[test]
    fn test_mode_cache_policy() {
        assert_eq!(Mode::Development.cache_policy(), CachePolicy::AlwaysReload);
        assert_eq!(Mode::Production.cache_policy(), CachePolicy::CacheForever);
    }
}
