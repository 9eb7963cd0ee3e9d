//! Blog post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::helpers;

/// A resolved blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Source base name without extension; lookup key and URL slug
    pub id: String,

    /// Post title
    pub title: String,

    /// Short summary shown on cards
    pub excerpt: String,

    /// Markdown body with front-matter removed
    pub content: String,

    /// Publication date, `YYYY-MM-DD`
    pub date: String,

    /// Free-form reading time, e.g. "5 min read"
    pub read_time: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Whether the post is highlighted on the blog index
    pub featured: bool,

    /// Original source base name, extension included
    pub file_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url_dark: Option<String>,
}

impl BlogPost {
    /// Create a new post with minimal required fields
    pub fn new(id: &str, date: &str) -> Self {
        Self {
            id: id.to_string(),
            title: id.to_string(),
            excerpt: String::new(),
            content: String::new(),
            date: date.to_string(),
            read_time: String::new(),
            tags: Vec::new(),
            featured: false,
            file_name: format!("{}.md", id),
            banner_url: None,
            banner_url_dark: None,
        }
    }

    /// Parsed publication date, `None` when the date string is malformed
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        helpers::parse_date(&self.date)
    }

    /// Long display date (like "January 15, 2024"), falling back to the raw string
    pub fn display_date(&self) -> String {
        self.parsed_date()
            .map(|d| helpers::full_date(&d))
            .unwrap_or_else(|| self.date.clone())
    }

    /// Dark variant of an inline banner image reference
    ///
    /// Only sources ending in `banner.png` have a dark counterpart.
    pub fn dark_banner_for(src: &str) -> Option<String> {
        src.strip_suffix("banner.png")
            .map(|prefix| format!("{}banner-dark.png", prefix))
    }
}

/// Stable sort by date descending; malformed dates sort last
pub fn sort_by_date_desc(posts: &mut [BlogPost]) {
    posts.sort_by_cached_key(|p| std::cmp::Reverse(p.parsed_date()));
}
