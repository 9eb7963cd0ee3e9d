//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::CONFIG_FILE;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config = SiteConfig::default();

    fs::create_dir_all(target_dir.join(&config.content_dir))?;

    let config_path = target_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        let config_content = format!(
            r#"# folio configuration

title: {title}
author: ''
url: {url}

# Content
content_dir: {content_dir}
extension: {extension}

# development re-reads posts on every request, production caches them
mode: production
# fail_closed serves no posts if any source fails; skip_invalid drops only the bad ones
failure_policy: fail_closed

# Defaults for posts without front-matter
excerpt_length: {excerpt_length}
default_read_time: {read_time}
banner_base_url: {banner_base_url}
"#,
            title = config.title,
            url = config.url,
            content_dir = config.content_dir,
            extension = config.extension,
            excerpt_length = config.excerpt_length,
            read_time = config.default_read_time,
            banner_base_url = config.banner_base_url,
        );
        fs::write(&config_path, config_content)?;
        tracing::debug!("Wrote {:?}", config_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_site_round_trips_config() {
        let tmp = TempDir::new().unwrap();
        init_site(tmp.path()).unwrap();

        assert!(tmp.path().join("content/blog").is_dir());
        let loaded = SiteConfig::load(tmp.path().join(CONFIG_FILE)).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(loaded.content_dir, defaults.content_dir);
        assert_eq!(loaded.default_read_time, defaults.default_read_time);
        assert_eq!(loaded.failure_policy, defaults.failure_policy);
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "title: Mine\n").unwrap();
        init_site(tmp.path()).unwrap();

        let content = fs::read_to_string(tmp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(content, "title: Mine\n");
    }
}
