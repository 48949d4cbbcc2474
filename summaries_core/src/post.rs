// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumIter};

/// Shown when a post has no `<meta name="description">`.
pub const NO_DESCRIPTION: &str = "(No description found)";
/// Shown when a post has no `<meta property="article:published_time">`.
pub const NO_DATE: &str = "(No date)";

/// The meta tags read from each post.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, EnumIter, Display)]
pub enum MetaTag {
    Description,
    PublishedTime,
}

impl MetaTag {
    /// Returns the CSS selector matching this tag.
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Description => r#"meta[name="description"]"#,
            Self::PublishedTime => r#"meta[property="article:published_time"]"#,
        }
    }

    /// Returns the text used in place of a missing tag.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Description => NO_DESCRIPTION,
            Self::PublishedTime => NO_DATE,
        }
    }
}

/// The metadata extracted from one post file.
///
/// Missing fields are replaced by their fallbacks when the summary is
/// built, so every field is always displayable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub source_path: PathBuf,
    pub title: String,
    pub description: String,
    pub publish_date: String,
}

impl PostSummary {
    /// Builds a summary from the raw values found in a document.
    ///
    /// `published_time` is an ISO-8601 timestamp; only the part before the
    /// first `T` is kept.
    pub fn new(
        source_path: PathBuf,
        title: Option<&str>,
        description: Option<&str>,
        published_time: Option<&str>,
    ) -> Self {
        let title = title.map_or_else(|| base_name(&source_path), |t| t.trim().to_owned());

        let description = description.map_or_else(
            || MetaTag::Description.placeholder().to_owned(),
            |d| d.trim().to_owned(),
        );

        let publish_date = published_time.map_or_else(
            || MetaTag::PublishedTime.placeholder().to_owned(),
            |p| date_portion(p).to_owned(),
        );

        Self {
            source_path,
            title,
            description,
            publish_date,
        }
    }
}

/// Returns the final component of `path`, extension included.
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Returns everything before the first `T`, or the whole value if there is none.
fn date_portion(timestamp: &str) -> &str {
    timestamp
        .split_once('T')
        .map_or(timestamp, |(date, _)| date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn test_new_with_all_fields() {
        let summary = PostSummary::new(
            PathBuf::from("/site/posts/first.html"),
            Some("  First Post \n"),
            Some(" About things "),
            Some("2024-05-01T12:00:00Z"),
        );

        assert_eq!(summary.title, "First Post");
        assert_eq!(summary.description, "About things");
        assert_eq!(summary.publish_date, "2024-05-01");
        assert_eq!(summary.source_path, PathBuf::from("/site/posts/first.html"));
    }

    #[test]
    fn test_new_with_missing_fields() {
        let summary = PostSummary::new(PathBuf::from("/site/posts/second.html"), None, None, None);

        assert_eq!(summary.title, "second.html");
        assert_eq!(summary.description, NO_DESCRIPTION);
        assert_eq!(summary.publish_date, NO_DATE);
    }

    #[test]
    fn test_whitespace_title_trims_to_empty() {
        let summary = PostSummary::new(PathBuf::from("/posts/blank.html"), Some("   "), None, None);
        assert_eq!(summary.title, "");
    }

    #[test]
    fn test_date_portion() {
        assert_eq!(date_portion("2024-05-01T12:00:00Z"), "2024-05-01");
        assert_eq!(date_portion("2024-05-01"), "2024-05-01");
        assert_eq!(date_portion(""), "");
        assert_eq!(date_portion("T12:00"), "");
    }

    #[test]
    fn test_published_time_is_not_trimmed() {
        let summary = PostSummary::new(PathBuf::from("a.html"), None, None, Some(" 2024-05-01T1"));
        assert_eq!(summary.publish_date, " 2024-05-01");
    }

    #[test]
    fn test_meta_tag_placeholders() {
        let placeholders: Vec<&str> = MetaTag::iter().map(MetaTag::placeholder).collect();
        assert_eq!(placeholders, vec![NO_DESCRIPTION, NO_DATE]);
        assert_eq!(MetaTag::Description.to_string(), "Description");
    }
}
