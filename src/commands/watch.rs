//! Watch the content root and re-resolve on change

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::Folio;

/// Resolve once, then again every time content changes
pub fn run(folio: &Folio) -> Result<()> {
    let resolver = folio.resolver();
    let posts = resolver.resolve_all()?;
    println!("Resolved {} posts", posts.len());

    watch_content(&folio.content_dir, || {
        resolver.invalidate();
        match resolver.resolve_all() {
            Ok(posts) => println!("Resolved {} posts", posts.len()),
            Err(e) => tracing::error!("Resolution failed: {}", e),
        }
    })
}

/// Block on file events under `content_dir`, calling `on_change` per debounced batch
pub fn watch_content<F>(content_dir: &Path, mut on_change: F) -> Result<()>
where
    F: FnMut(),
{
    let (tx, rx) = channel();

    // Create debouncer to collapse bursts of editor writes
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;
    debouncer
        .watcher()
        .watch(content_dir, RecursiveMode::Recursive)?;

    tracing::info!(
        "Watching {:?} for changes. Press Ctrl+C to stop.",
        content_dir
    );

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let changed: Vec<_> = events.iter().filter(|e| is_relevant(&e.path)).collect();
                if changed.is_empty() {
                    continue;
                }
                for event in &changed {
                    tracing::info!("File changed: {}", event.path.display());
                }
                on_change();
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Ignore VCS internals, editor backups and OS metadata files
pub fn is_relevant(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git")
        && !path_str.contains(".DS_Store")
        && !path_str.ends_with('~')
        && !path_str.ends_with(".swp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_relevant() {
        assert!(is_relevant(Path::new("content/blog/2024-01-01/post.md")));
        assert!(is_relevant(Path::new("content/blog/2024-01-01/banner.png")));
        assert!(!is_relevant(Path::new("content/blog/.git/index")));
        assert!(!is_relevant(Path::new("content/blog/post.md~")));
        assert!(!is_relevant(Path::new("content/blog/.post.md.swp")));
        assert!(!is_relevant(Path::new("content/blog/.DS_Store")));
    }
}
