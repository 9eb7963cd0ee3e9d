//! Filename conventions for post sources
//!
//! A source named `YYYY-MM-DD_<slug>.md` carries its own date and title.
//! A source stored as `.../blog/YYYY-MM-DD/<name>.md` additionally gets
//! `banner.png` / `banner-dark.png` from that date folder.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATE_PREFIX: Regex = Regex::new(r"^(\d{4}-\d{2}-\d{2})_").unwrap();
    static ref DATE_FOLDER: Regex =
        Regex::new(r"(?:^|/)blog/(\d{4}-\d{2}-\d{2})/[^/]+\.[^/.]+$").unwrap();
}

/// Date and title encoded in a source name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameMeta {
    pub date: String,
    pub title: String,
}

/// Base name of a path-like identifier (either separator accepted)
pub fn base_name(identifier: &str) -> &str {
    identifier
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(identifier)
}

/// Strip `.<extension>` from a base name
pub fn strip_extension<'a>(name: &'a str, extension: &str) -> &'a str {
    name.strip_suffix(extension)
        .and_then(|n| n.strip_suffix('.'))
        .unwrap_or(name)
}

/// Post id for a source identifier
pub fn post_id(identifier: &str, extension: &str) -> String {
    strip_extension(base_name(identifier), extension).to_string()
}

/// Title for a source name, with any date prefix and extension removed
pub fn title_from_name(identifier: &str, extension: &str) -> String {
    let stem = strip_extension(base_name(identifier), extension);
    DATE_PREFIX.replace(stem, "").into_owned()
}

/// Date prefix of a source name, if it follows the `YYYY-MM-DD_` convention
fn date_from_name(identifier: &str) -> Option<String> {
    DATE_PREFIX
        .captures(base_name(identifier))
        .map(|caps| caps[1].to_string())
}

/// Parse the `YYYY-MM-DD_<slug>` convention
///
/// Returns `None` when the name carries no date prefix.
pub fn parse_filename(identifier: &str, extension: &str) -> Option<FilenameMeta> {
    let date = date_from_name(identifier)?;
    Some(FilenameMeta {
        date,
        title: title_from_name(identifier, extension),
    })
}

/// Conventional (light, dark) banner URLs for a source in a dated folder
pub fn folder_banners(identifier: &str, banner_base_url: &str) -> Option<(String, String)> {
    let normalized = identifier.replace('\\', "/");
    let caps = DATE_FOLDER.captures(&normalized)?;
    let base = banner_base_url.trim_end_matches('/');
    let folder = &caps[1];
    Some((
        format!("{}/{}/banner.png", base, folder),
        format!("{}/{}/banner-dark.png", base, folder),
    ))
}

/// Build the conventional source name for a new post
pub fn conventional_name(date: &str, title: &str, extension: &str) -> String {
    format!("{}_{}.{}", date, slug::slugify(title), extension)
}
