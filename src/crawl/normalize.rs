// src/crawl/normalize.rs
// =============================================================================
// URL normalization for the visited set.
//
// The key keeps scheme, host (with whatever port was written) and path, and
// drops query string and fragment. Trailing slashes go away except for the
// root path, and the result is lower-cased.
//
// Scheme and port are kept exactly as written:
//   http://example.com/p  != https://example.com/p
//   https://example.com/p != https://example.com:443/p
//
// The url crate is not used here because it would rewrite the port.
// =============================================================================

/// Canonical dedup key for a URL. Never fails: anything that doesn't split
/// into scheme://host/path comes back lower-cased as is.
pub fn normalize_url(url: &str) -> String {
    match split_url(url) {
        Some((scheme, authority, path)) => {
            let path = path.trim_end_matches('/');
            let path = if path.is_empty() { "/" } else { path };
            format!("{}://{}{}", scheme, authority, path).to_lowercase()
        }
        None => url.to_lowercase(),
    }
}

/// The `host[:port]` part exactly as written, if `url` has one.
pub(crate) fn authority(url: &str) -> Option<&str> {
    split_url(url).map(|(_, authority, _)| authority)
}

/// Splits into (scheme, authority, path), discarding query and fragment.
fn split_url(url: &str) -> Option<(&str, &str, &str)> {
    let (scheme, rest) = url.split_once("://")?;

    let valid_scheme = scheme
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return None;
    }

    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    let rest = &rest[..end];

    let (authority, path) = match rest.find('/') {
        Some(slash) => rest.split_at(slash),
        None => (rest, ""),
    };
    if authority.is_empty() {
        return None;
    }

    Some((scheme, authority, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same(a: &str, b: &str) -> bool {
        normalize_url(a) == normalize_url(b)
    }

    #[test]
    fn test_duplicates_collapse() {
        assert!(same("https://example.com/page", "https://example.com/page/"));
        assert!(same("https://example.com/page", "https://example.com/page#section"));
        assert!(same("https://example.com/page", "https://example.com/page?param=value"));
        assert!(same("https://example.com/Page", "https://example.com/page"));
        assert!(same("HTTP://Example.com/Page/", "http://example.com/page"));
        assert!(same("https://example.com", "https://example.com/"));
        assert!(same("https://example.com?x=1", "https://example.com/"));
    }

    #[test]
    fn test_distinct_urls_stay_distinct() {
        assert!(!same("https://example.com/page1", "https://example.com/page2"));
        assert!(!same("http://example.com/page", "https://example.com/page"));
        assert!(!same("https://example.com/page", "https://example.com:443/page"));
        assert!(!same("https://example.com/page1", "https://example.com/page1/subpage"));
        assert!(!same("https://example.com/page1", "https://example.com/"));
    }

    #[test]
    fn test_output_shape() {
        assert_eq!(
            normalize_url("https://Example.com/A/b//?q=1#top"),
            "https://example.com/a/b"
        );
        assert_eq!(normalize_url("https://example.com"), "https://example.com/");
    }

    #[test]
    fn test_idempotent() {
        for url in [
            "HTTP://Example.com/Page/",
            "https://example.com:8080/a/b/?x#y",
            "https://example.com//",
            "https://example.com",
            "not a url",
            "mailto:someone@example.com",
        ] {
            let once = normalize_url(url);
            assert_eq!(normalize_url(&once), once, "input: {}", url);
        }
    }

    #[test]
    fn test_unparseable_falls_back_to_lowercase() {
        assert_eq!(normalize_url("Not A URL"), "not a url");
        assert_eq!(normalize_url("://Example.com"), "://example.com");
    }
}
