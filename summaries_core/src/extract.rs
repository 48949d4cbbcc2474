// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::BoxError;
use crate::post::{MetaTag, PostSummary};
use scraper::{ElementRef, Html, Selector};
use std::path::Path;

/// Reads a post from disk and extracts its summary.
///
/// Fails if the file cannot be read or is not valid UTF-8. Malformed markup
/// is not an error: the parser recovers and missing elements fall back to
/// their placeholders. Elements that are present but empty are errors, see
/// [`PostSummary::from_html`].
pub fn extract_post_summary(path: &Path) -> Result<PostSummary, BoxError> {
    let html = std::fs::read_to_string(path)?;
    PostSummary::from_html(path, &html)
}

impl PostSummary {
    /// Extracts a summary from markup already read from `path`.
    ///
    /// A `<title>` with no text or a meta tag without a `content` attribute
    /// is an error, so the post is skipped instead of shown half-filled.
    pub fn from_html(path: &Path, html: &str) -> Result<Self, BoxError> {
        let document = Html::parse_document(html);

        let title = match first_match(&document, "title")? {
            Some(element) => {
                let text = element.text().collect::<String>();
                if text.is_empty() {
                    return Err("<title> element has no text".into());
                }
                Some(text)
            }
            None => None,
        };
        let description = meta_content(&document, MetaTag::Description)?;
        let published_time = meta_content(&document, MetaTag::PublishedTime)?;

        log::debug!(
            "{}: title={title:?} {}={description:?} {}={published_time:?}",
            path.display(),
            MetaTag::Description,
            MetaTag::PublishedTime
        );

        Ok(Self::new(
            path.to_path_buf(),
            title.as_deref(),
            description,
            published_time,
        ))
    }
}

/// Returns the `content` attribute of the first tag matching `tag`, if any.
///
/// A matching tag without `content` is an error.
fn meta_content(document: &Html, tag: MetaTag) -> Result<Option<&str>, BoxError> {
    let Some(element) = first_match(document, tag.selector())? else {
        return Ok(None);
    };
    element
        .value()
        .attr("content")
        .map(Some)
        .ok_or_else(|| format!("{tag} meta tag has no content attribute").into())
}

fn first_match<'a>(document: &'a Html, selector: &str) -> Result<Option<ElementRef<'a>>, BoxError> {
    let selector = Selector::parse(selector).map_err(|e| format!("Invalid selector '{selector}': {e}"))?;
    Ok(document.select(&selector).next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::{NO_DATE, NO_DESCRIPTION};
    use std::path::PathBuf;

    const FULL_POST: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="description" content="  A walk through the new park plan.  ">
  <meta property="article:published_time" content="2024-05-01T12:00:00Z">
  <title>
    Parks for Everyone
  </title>
</head>
<body><p>Body text</p></body>
</html>"#;

    #[test]
    fn test_from_html_full_post() {
        let path = PathBuf::from("/site/posts/parks.html");
        let summary = PostSummary::from_html(&path, FULL_POST).unwrap();

        assert_eq!(summary.title, "Parks for Everyone");
        assert_eq!(summary.description, "A walk through the new park plan.");
        assert_eq!(summary.publish_date, "2024-05-01");
        assert_eq!(summary.source_path, path);
    }

    #[test]
    fn test_from_html_missing_everything() {
        let path = PathBuf::from("/site/posts/empty.html");
        let summary = PostSummary::from_html(&path, "<html><body>nothing</body></html>").unwrap();

        assert_eq!(summary.title, "empty.html");
        assert_eq!(summary.description, NO_DESCRIPTION);
        assert_eq!(summary.publish_date, NO_DATE);
    }

    #[test]
    fn test_from_html_malformed_markup() {
        let html = "<title>Broken <b>page</title><meta name=description content='Still works'><div><p>";
        let summary = PostSummary::from_html(Path::new("broken.html"), html).unwrap();

        assert_eq!(summary.title, "Broken <b>page");
        assert_eq!(summary.description, "Still works");
        assert_eq!(summary.publish_date, NO_DATE);
    }

    #[test]
    fn test_from_html_meta_without_content_is_error() {
        let description = r#"<head><title>Post</title><meta name="description"></head>"#;
        assert!(PostSummary::from_html(Path::new("bare.html"), description).is_err());

        let published = r#"<head><title>Post</title><meta property="article:published_time"></head>"#;
        assert!(PostSummary::from_html(Path::new("bare.html"), published).is_err());
    }

    #[test]
    fn test_from_html_empty_title_is_error() {
        let html = "<head><title></title></head><body></body>";
        assert!(PostSummary::from_html(Path::new("/p/empty.html"), html).is_err());
    }

    #[test]
    fn test_from_html_whitespace_title_is_kept_empty() {
        let summary = PostSummary::from_html(Path::new("/p/ws.html"), "<title>   </title>").unwrap();
        assert_eq!(summary.title, "");
        assert_eq!(summary.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_from_html_uses_first_matching_tag() {
        let html = r#"<head>
            <meta name="description" content="first">
            <meta name="description" content="second">
            <meta property="article:published_time" content="2023-01-02">
        </head>"#;
        let summary = PostSummary::from_html(Path::new("dup.html"), html).unwrap();

        assert_eq!(summary.description, "first");
        assert_eq!(summary.publish_date, "2023-01-02");
    }

    #[test]
    fn test_extract_post_summary_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.html");
        std::fs::write(&path, FULL_POST).unwrap();

        let summary = extract_post_summary(&path).unwrap();
        assert_eq!(summary.title, "Parks for Everyone");
        assert_eq!(summary.source_path, path);
    }

    #[test]
    fn test_extract_post_summary_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(extract_post_summary(&dir.path().join("missing.html")).is_err());
    }

    #[test]
    fn test_extract_post_summary_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.html");
        std::fs::write(&path, [0x3c, 0x74, 0xff, 0xfe, 0x3e]).unwrap();

        assert!(extract_post_summary(&path).is_err());
    }
}
