//! Content sources - where raw post text comes from

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

use crate::error::{ContentError, Result};

type Loader = Arc<dyn Fn() -> std::io::Result<String> + Send + Sync>;

/// One post source: an identifier plus a deferred loader for its text
#[derive(Clone)]
pub struct ContentSource {
    /// Path-like identifier, e.g. `/content/blog/2024-01-15/hello.md`
    pub id: String,
    loader: Loader,
}

impl ContentSource {
    pub fn new<F>(id: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> std::io::Result<String> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            loader: Arc::new(loader),
        }
    }

    /// Source backed by an in-memory string
    pub fn from_text(id: impl Into<String>, text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self::new(id, move || Ok(text.clone()))
    }

    /// Read the raw text
    pub fn load(&self) -> Result<String> {
        (self.loader)().map_err(|source| ContentError::Load {
            id: self.id.clone(),
            source,
        })
    }
}

impl std::fmt::Debug for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentSource").field("id", &self.id).finish()
    }
}

/// Enumerates the post sources available to the resolver
pub trait SourceEnumerator: Send + Sync {
    fn enumerate(&self) -> Result<Vec<ContentSource>>;
}

/// Markdown files under a content root on disk
///
/// Posts live either directly in the root (`blog/<name>.md`) or one folder
/// down (`blog/<YYYY-MM-DD>/<name>.md`). Identifiers are `/`-joined paths
/// relative to the site directory with a leading `/`.
pub struct FsSourceEnumerator {
    base_dir: PathBuf,
    content_dir: PathBuf,
    extension: String,
}

impl FsSourceEnumerator {
    pub fn new<P: AsRef<Path>>(base_dir: P, content_dir: P, extension: &str) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            content_dir: content_dir.as_ref().to_path_buf(),
            extension: extension.to_string(),
        }
    }

    fn identifier(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.base_dir).unwrap_or(path);
        let joined = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        format!("/{}", joined.trim_start_matches('/'))
    }

    fn is_content_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e == self.extension)
            .unwrap_or(false)
    }
}

impl SourceEnumerator for FsSourceEnumerator {
    fn enumerate(&self) -> Result<Vec<ContentSource>> {
        fs::metadata(&self.content_dir).map_err(|source| ContentError::Enumerate {
            root: self.content_dir.clone(),
            source,
        })?;

        let mut sources = Vec::new();

        for entry in WalkDir::new(&self.content_dir)
            .min_depth(1)
            .max_depth(2)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ContentError::Enumerate {
                root: self.content_dir.clone(),
                source: e.into(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() || !self.is_content_file(path) {
                continue;
            }

            let full_path = path.to_path_buf();
            sources.push(ContentSource::new(self.identifier(path), move || {
                fs::read_to_string(&full_path)
            }));
        }

        tracing::debug!(
            "Enumerated {} sources under {:?}",
            sources.len(),
            self.content_dir
        );
        Ok(sources)
    }
}

/// A fixed set of sources, useful for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct MemorySources {
    sources: Vec<ContentSource>,
}

impl MemorySources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, text: &str) -> Self {
        self.sources.push(ContentSource::from_text(id, text));
        self
    }

    pub fn push(&mut self, source: ContentSource) {
        self.sources.push(source);
    }
}

impl SourceEnumerator for MemorySources {
    fn enumerate(&self) -> Result<Vec<ContentSource>> {
        Ok(self.sources.clone())
    }
}
