//! List helper functions for tag summaries

use indexmap::IndexMap;

use crate::content::BlogPost;

/// Count posts per tag, most used first (ties keep first-seen order)
pub fn tag_counts(posts: &[BlogPost]) -> Vec<(String, usize)> {
    let mut tags: IndexMap<String, usize> = IndexMap::new();

    for post in posts {
        for tag in &post.tags {
            *tags.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    let mut sorted: Vec<_> = tags.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}
