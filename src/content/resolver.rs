//! Blog content resolver - turns post sources into the queryable collection

use chrono::{NaiveDate, Utc};
use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use super::filename;
use super::post::sort_by_date_desc;
use super::source::{ContentSource, SourceEnumerator};
use super::{BlogPost, FrontMatter};
use crate::cache::{CachePolicy, PostCache};
use crate::config::{FailurePolicy, SiteConfig};
use crate::error::{ContentError, Result};

/// Per-post derivation settings
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub extension: String,
    pub excerpt_length: usize,
    pub default_read_time: String,
    pub banner_base_url: String,
    pub failure_policy: FailurePolicy,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

impl From<&SiteConfig> for ResolveOptions {
    fn from(config: &SiteConfig) -> Self {
        Self {
            extension: config.extension.clone(),
            excerpt_length: config.excerpt_length,
            default_read_time: config.default_read_time.clone(),
            banner_base_url: config.banner_base_url.clone(),
            failure_policy: config.failure_policy,
        }
    }
}

/// Build a post from one source's identifier and raw text
///
/// Never fails: every field falls back to a deterministic default. `today`
/// is used as the date when neither front-matter nor filename provide one.
pub fn derive_post(
    identifier: &str,
    raw: &str,
    today: NaiveDate,
    options: &ResolveOptions,
) -> BlogPost {
    let (fm, body) = FrontMatter::parse(raw);
    let file_name = filename::base_name(identifier).to_string();
    let id = filename::post_id(identifier, &options.extension);
    let (name_date, name_title) = match filename::parse_filename(identifier, &options.extension) {
        Some(meta) => (Some(meta.date), meta.title),
        None => (None, filename::title_from_name(identifier, &options.extension)),
    };

    let title = fm.string("title").map(str::to_string).unwrap_or(name_title);

    let date = fm
        .string("date")
        .map(str::to_string)
        .or(name_date)
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());

    let excerpt = fm.string("excerpt").map(str::to_string).unwrap_or_else(|| {
        let head: String = body.chars().take(options.excerpt_length).collect();
        format!("{}...", head)
    });

    let mut banner_url = fm.string("bannerUrl").map(str::to_string);
    let mut banner_url_dark = fm.string("bannerUrlDark").map(str::to_string);
    if banner_url.is_none() {
        if let Some((light, dark)) = filename::folder_banners(identifier, &options.banner_base_url)
        {
            banner_url = Some(light);
            banner_url_dark = banner_url_dark.or(Some(dark));
        }
    }

    BlogPost {
        id,
        title,
        excerpt,
        content: body.to_string(),
        date,
        read_time: fm
            .string("readTime")
            .map(str::to_string)
            .unwrap_or_else(|| options.default_read_time.clone()),
        tags: fm.list("tags").unwrap_or_default(),
        featured: fm.bool("featured").unwrap_or(false),
        file_name,
        banner_url,
        banner_url_dark,
    }
}

/// Resolves, caches and queries the post collection
pub struct Resolver {
    sources: Box<dyn SourceEnumerator>,
    options: ResolveOptions,
    cache: PostCache,
}

impl Resolver {
    pub fn new<S>(sources: S, options: ResolveOptions, policy: CachePolicy) -> Self
    where
        S: SourceEnumerator + 'static,
    {
        Self {
            sources: Box::new(sources),
            options,
            cache: PostCache::new(policy),
        }
    }

    pub fn cache(&self) -> &PostCache {
        &self.cache
    }

    /// Resolve every source into a fresh, date-sorted collection and cache it
    ///
    /// An unreadable content root is an error. Sources that fail to load are
    /// handled per the failure policy; under fail-closed the pass yields an
    /// empty collection and the cache is left as it was.
    pub fn resolve_all(&self) -> Result<Vec<BlogPost>> {
        match self.resolve_pass() {
            Ok(posts) => {
                self.cache.store(posts.clone());
                Ok(posts)
            }
            Err(ContentError::SourcesFailed { failed }) => {
                tracing::error!("Discarding resolution pass: {} source(s) failed", failed);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// All posts, newest first
    ///
    /// Resolves when nothing is cached or the cache policy is always-reload.
    /// Resolution failures are logged and served as an empty collection.
    pub fn get_all(&self) -> Arc<Vec<BlogPost>> {
        match self.cache.get_or_compute(|| self.resolve_pass()) {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!("Error loading blog posts: {}", e);
                Arc::new(Vec::new())
            }
        }
    }

    /// Featured posts, in the same order as `get_all`
    pub fn get_featured(&self) -> Vec<BlogPost> {
        self.get_all()
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect()
    }

    /// Look up a post by id
    pub fn get_by_id(&self, id: &str) -> Option<BlogPost> {
        self.get_all().iter().find(|p| p.id == id).cloned()
    }

    /// Drop the cached collection
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }

    fn resolve_pass(&self) -> Result<Vec<BlogPost>> {
        let start = Instant::now();
        let sources = self.sources.enumerate()?;
        let today = Utc::now().date_naive();

        let results: Vec<Result<BlogPost>> = sources
            .par_iter()
            .map(|source| self.resolve_source(source, today))
            .collect();

        let mut posts = Vec::with_capacity(results.len());
        let mut failed = 0;
        for result in results {
            match result {
                Ok(post) => posts.push(post),
                Err(e) => {
                    failed += 1;
                    match self.options.failure_policy {
                        FailurePolicy::FailClosed => tracing::error!("{}", e),
                        FailurePolicy::SkipInvalid => tracing::warn!("Skipping source: {}", e),
                    }
                }
            }
        }

        if failed > 0 && self.options.failure_policy == FailurePolicy::FailClosed {
            return Err(ContentError::SourcesFailed { failed });
        }

        log_duplicate_ids(&posts);
        sort_by_date_desc(&mut posts);

        tracing::info!(
            "Resolved {} posts in {:.2}ms",
            posts.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(posts)
    }

    fn resolve_source(&self, source: &ContentSource, today: NaiveDate) -> Result<BlogPost> {
        let raw = source.load()?;
        tracing::debug!("Loaded source {}", source.id);
        Ok(derive_post(&source.id, &raw, today, &self.options))
    }
}

fn log_duplicate_ids(posts: &[BlogPost]) {
    let mut seen = HashSet::new();
    for post in posts {
        if !seen.insert(post.id.as_str()) {
            tracing::debug!("Duplicate post id: {}", post.id);
        }
    }
}
