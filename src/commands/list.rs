//! List site content

use anyhow::Result;

use crate::content::BlogPost;
use crate::helpers;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let resolver = folio.resolver();

    match content_type {
        "post" | "posts" => {
            let posts = resolver.get_all();
            println!("Posts ({}):", posts.len());
            for post in posts.iter() {
                println!("{}", format_line(post));
            }
        }
        "featured" => {
            let posts = resolver.get_featured();
            println!("Featured ({}):", posts.len());
            for post in &posts {
                println!("{}", format_line(post));
            }
        }
        "tag" | "tags" => {
            let posts = resolver.get_all();
            let tags = helpers::tag_counts(&posts);
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, featured, tag",
                content_type
            );
        }
    }

    Ok(())
}

/// One listing line: date, title, id and a star for featured posts
pub fn format_line(post: &BlogPost) -> String {
    format!(
        "  {} - {} [{}]{}",
        post.date,
        post.title,
        post.id,
        if post.featured { " *" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let mut post = BlogPost::new("2024-03-10_my-post", "2024-03-10");
        post.title = "My Post".to_string();
        assert_eq!(format_line(&post), "  2024-03-10 - My Post [2024-03-10_my-post]");

        post.featured = true;
        assert!(format_line(&post).ends_with(" *"));
    }

    #[test]
    fn test_unknown_type_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert!(run(&folio, "category").is_err());
    }
}
