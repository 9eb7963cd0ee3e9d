//! Content module - post sources, front-matter and resolution

pub mod archive;
pub mod filename;
mod frontmatter;
mod post;
pub mod resolver;
pub mod source;

pub use archive::{group_by_year_and_month, ordered_archive, ArchiveMonth, ArchiveYear};
pub use frontmatter::{FrontMatter, FrontMatterValue};
pub use post::{sort_by_date_desc, BlogPost};
pub use resolver::{derive_post, ResolveOptions, Resolver};
pub use source::{ContentSource, FsSourceEnumerator, MemorySources, SourceEnumerator};
