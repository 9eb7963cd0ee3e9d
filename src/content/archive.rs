//! Year/month grouping of posts for the blog archive

use chrono::Datelike;
use indexmap::IndexMap;
use serde::Serialize;

use super::post::sort_by_date_desc;
use super::BlogPost;
use crate::helpers;

/// Bucket label for posts whose date cannot be parsed
pub const UNDATED: &str = "Undated";

/// Posts bucketed as `year -> month name -> posts`
pub type GroupedPosts = IndexMap<String, IndexMap<String, Vec<BlogPost>>>;

/// Group posts by four-digit year, then by full month name
///
/// Posts in each bucket are sorted newest first. Keys keep first-seen
/// order; use [`ordered_archive`] for presentation order.
pub fn group_by_year_and_month(posts: &[BlogPost]) -> GroupedPosts {
    let mut grouped: GroupedPosts = IndexMap::new();

    for post in posts {
        let (year, month) = match post.parsed_date() {
            Some(date) => (
                format!("{:04}", date.year()),
                helpers::month_name(&date).to_string(),
            ),
            None => (UNDATED.to_string(), UNDATED.to_string()),
        };

        grouped
            .entry(year)
            .or_default()
            .entry(month)
            .or_default()
            .push(post.clone());
    }

    for months in grouped.values_mut() {
        for bucket in months.values_mut() {
            sort_by_date_desc(bucket);
        }
    }

    grouped
}

/// One month of the archive
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveMonth {
    pub month: String,
    pub posts: Vec<BlogPost>,
}

/// One year of the archive
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveYear {
    pub year: String,
    pub months: Vec<ArchiveMonth>,
}

/// Archive in display order: newest year first, December before January
///
/// Undated posts come last.
pub fn ordered_archive(posts: &[BlogPost]) -> Vec<ArchiveYear> {
    let mut years: Vec<ArchiveYear> = group_by_year_and_month(posts)
        .into_iter()
        .map(|(year, months)| {
            let mut months: Vec<ArchiveMonth> = months
                .into_iter()
                .map(|(month, posts)| ArchiveMonth { month, posts })
                .collect();
            months.sort_by_key(|m| std::cmp::Reverse(helpers::month_index(&m.month)));
            ArchiveYear { year, months }
        })
        .collect();

    years.sort_by_key(|y| std::cmp::Reverse(y.year.parse::<i32>().ok()));
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(dates: &[&str]) -> Vec<BlogPost> {
        dates.iter().map(|d| BlogPost::new(d, d)).collect()
    }

    fn dates(bucket: &[BlogPost]) -> Vec<&str> {
        bucket.iter().map(|p| p.date.as_str()).collect()
    }

    #[test]
    fn test_group_by_year_and_month() {
        let grouped = group_by_year_and_month(&posts(&["2024-01-05", "2024-01-20", "2023-12-01"]));

        assert_eq!(grouped.len(), 2);
        assert_eq!(
            dates(&grouped["2024"]["January"]),
            vec!["2024-01-20", "2024-01-05"]
        );
        assert_eq!(dates(&grouped["2023"]["December"]), vec!["2023-12-01"]);
        assert_eq!(grouped["2024"].len(), 1);
    }

    #[test]
    fn test_group_undated() {
        let grouped = group_by_year_and_month(&posts(&["someday", "2024-02-02"]));
        assert_eq!(dates(&grouped[UNDATED][UNDATED]), vec!["someday"]);
    }

    #[test]
    fn test_group_empty() {
        assert!(group_by_year_and_month(&[]).is_empty());
    }

    #[test]
    fn test_ordered_archive() {
        let archive = ordered_archive(&posts(&[
            "2023-03-01",
            "2024-01-05",
            "someday",
            "2024-11-30",
            "2023-12-25",
        ]));

        let years: Vec<_> = archive.iter().map(|y| y.year.as_str()).collect();
        assert_eq!(years, vec!["2024", "2023", UNDATED]);

        let months_2024: Vec<_> = archive[0].months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months_2024, vec!["November", "January"]);

        let months_2023: Vec<_> = archive[1].months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months_2023, vec!["December", "March"]);
    }
}
