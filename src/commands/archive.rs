//! Print the year/month archive

use anyhow::Result;

use crate::content::ordered_archive;
use crate::Folio;

pub fn run(folio: &Folio, json: bool) -> Result<()> {
    let posts = folio.resolver().get_all();
    let archive = ordered_archive(&posts);

    if json {
        println!("{}", serde_json::to_string_pretty(&archive)?);
        return Ok(());
    }

    for year in &archive {
        println!("{}", year.year);
        for month in &year.months {
            println!("  {} ({})", month.month, month.posts.len());
            for post in &month.posts {
                println!("    {} - {}", post.date, post.title);
            }
        }
    }

    Ok(())
}
