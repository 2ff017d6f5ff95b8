// src/services/direct_link.rs
// DOCUMENTATION: Direct photo link detection
// PURPOSE: Recognize photo page URLs pasted into the search box

use regex::Regex;
use std::sync::LazyLock;

/// Photo page on the web site, ASCII word slug after the last hyphen
static PHOTO_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://unsplash\.com/.*-([A-Za-z0-9_]+)$").expect("Invalid photo link regex")
});

/// Extract the photo slug from a direct link
/// DOCUMENTATION: Returns None for plain search terms and for links without
/// an ASCII word token after the last hyphen.
///
/// # Examples
/// `https://unsplash.com/photos/grey-cat-abc123` -> `Some("abc123")`
pub fn photo_slug(query: &str) -> Option<&str> {
    PHOTO_LINK_RE
        .captures(query.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_photo_links() {
        assert_eq!(
            photo_slug("https://unsplash.com/photos/xyz-abc123"),
            Some("abc123")
        );
        assert_eq!(
            photo_slug("https://unsplash.com/photos/a-grey-cat-on-a-sofa-Zx_9Qw"),
            Some("Zx_9Qw")
        );
    }

    #[test]
    fn test_ignores_non_links_and_malformed_links() {
        assert_eq!(photo_slug("cats"), None);
        assert_eq!(photo_slug("https://unsplash.com/photos/xyz-"), None);
        assert_eq!(photo_slug("https://unsplash.com/photos/abc123"), None);
        assert_eq!(photo_slug("https://unsplash.com/photos/xyz-abc?foo=bar"), None);
        assert_eq!(photo_slug("https://example.com/photos/xyz-abc123"), None);
        assert_eq!(photo_slug("https://unsplash.com/photos/xyz-café"), None);
        assert_eq!(photo_slug("https://unsplash.com/photos/xyz-日本"), None);
    }
}
