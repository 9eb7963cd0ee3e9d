//! Show a single post

use anyhow::Result;

use crate::content::BlogPost;
use crate::Folio;

/// Print one post, or report that it does not exist
pub fn run(folio: &Folio, id: &str, json: bool) -> Result<()> {
    let resolver = folio.resolver();

    let Some(post) = resolver.get_by_id(id) else {
        anyhow::bail!("Post not found: {}", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        print!("{}", render(&post));
    }

    Ok(())
}

/// Plain-text rendering of a post header and body
pub fn render(post: &BlogPost) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", post.title));
    out.push_str(&format!("{} · {}\n", post.display_date(), post.read_time));
    if !post.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", post.tags.join(", ")));
    }
    if let Some(banner) = &post.banner_url {
        out.push_str(&format!("Banner: {}\n", banner));
        let dark = post
            .banner_url_dark
            .clone()
            .or_else(|| BlogPost::dark_banner_for(banner));
        if let Some(dark) = dark {
            out.push_str(&format!("Dark banner: {}\n", dark));
        }
    }
    out.push('\n');
    out.push_str(&post.content);
    if !post.content.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let mut post = BlogPost::new("hello", "2024-01-15");
        post.title = "Hello".to_string();
        post.read_time = "2 min read".to_string();
        post.tags = vec!["rust".to_string(), "web".to_string()];
        post.content = "Body text".to_string();

        let out = render(&post);
        assert!(out.starts_with("Hello\nJanuary 15, 2024 · 2 min read\n"));
        assert!(out.contains("Tags: rust, web\n"));
        assert!(out.ends_with("\nBody text\n"));
    }

    #[test]
    fn test_render_banners() {
        let mut post = BlogPost::new("hello", "2024-01-15");
        post.banner_url = Some("/img/2024/banner.png".to_string());
        let out = render(&post);
        assert!(out.contains("Banner: /img/2024/banner.png\n"));
        assert!(out.contains("Dark banner: /img/2024/banner-dark.png\n"));

        post.banner_url_dark = Some("/img/night.png".to_string());
        assert!(render(&post).contains("Dark banner: /img/night.png\n"));

        post.banner_url = Some("/img/cover.jpg".to_string());
        post.banner_url_dark = None;
        assert!(!render(&post).contains("Dark banner"));
    }

    #[test]
    fn test_missing_post_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        let err = run(&folio, "does-not-exist", false).unwrap_err();
        assert!(err.to_string().contains("does-not-exist"));
    }
}
