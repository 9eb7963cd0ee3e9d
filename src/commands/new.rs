//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::filename;
use crate::helpers;
use crate::Folio;

/// Create a new post in its own dated folder
///
/// The file lands at `<content_dir>/<date>/<date>_<slug>.<ext>` so both the
/// filename and folder conventions apply to it.
pub fn create_post(folio: &Folio, title: &str, date: Option<&str>) -> Result<PathBuf> {
    let date = match date {
        Some(d) => helpers::parse_date(d)
            .ok_or_else(|| anyhow::anyhow!("Invalid date: {}", d))?
            .format("%Y-%m-%d")
            .to_string(),
        None => chrono::Utc::now().format("%Y-%m-%d").to_string(),
    };

    let target_dir = folio.content_dir.join(&date);
    fs::create_dir_all(&target_dir)?;

    let file_name = filename::conventional_name(&date, title, &folio.config.extension);
    let file_path = target_dir.join(file_name);

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: "{}"
date: "{}"
excerpt: ""
readTime: "{}"
tags: []
featured: false
---
"#,
        title.replace('"', "'"),
        date,
        folio.config.default_read_time
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_post_resolves() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();

        let path = create_post(&folio, "Hello, World!", Some("2025-01-15")).unwrap();
        assert!(path.ends_with("content/blog/2025-01-15/2025-01-15_hello-world.md"));

        let post = folio.resolver().get_by_id("2025-01-15_hello-world").unwrap();
        assert_eq!(post.title, "Hello, World!");
        assert_eq!(post.date, "2025-01-15");
        assert!(post.tags.is_empty());
        assert!(!post.featured);
        assert_eq!(post.read_time, "5 min read");
        assert_eq!(
            post.banner_url.as_deref(),
            Some("/content/blog/2025-01-15/banner.png")
        );
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();

        create_post(&folio, "Twice", Some("2025-01-15")).unwrap();
        assert!(create_post(&folio, "Twice", Some("2025-01-15")).is_err());
    }

    #[test]
    fn test_create_post_rejects_bad_date() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert!(create_post(&folio, "Bad", Some("yesterday")).is_err());
    }
}
