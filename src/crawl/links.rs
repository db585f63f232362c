// src/crawl/links.rs
// =============================================================================
// Finds the internal links worth crawling on a page.
//
// A link is kept when:
// 1. it resolves against the page URL
// 2. its host and port, as written, match the page's; subdomains and an
//    explicit default port (example.com:443) count as other sites
// 3. the lower-cased absolute URL contains none of the EXCLUDED fragments
//    (anchors, pseudo-schemes, files that aren't HTML, auth/admin pages)
//
// Absolute hrefs are kept verbatim and relative ones reuse the page's
// authority verbatim: url::Url would drop a default port before the
// normalizer ever saw it.
//
// The caller still normalizes each link before checking the visited set.
// =============================================================================

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::{Position, Url};

use super::normalize::authority;

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("anchor selector"));

const EXCLUDED: &[&str] = &[
    "#",
    "javascript:",
    "mailto:",
    "tel:",
    ".pdf",
    ".doc",
    ".docx",
    ".jpg",
    ".jpeg",
    ".png",
    ".gif",
    ".css",
    ".js",
    ".xml",
    ".rss",
    "logout",
    "admin",
    "login",
    "register",
    "signup",
    "signin",
];

/// Same-host, content-bearing links on a page, as absolute URLs.
pub fn discover_links(document: &Html, base_url: &str) -> BTreeSet<String> {
    let (Ok(base), Some(base_authority)) = (Url::parse(base_url), authority(base_url)) else {
        return BTreeSet::new();
    };

    document
        .select(&ANCHOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(&base, base_authority, href))
        .filter(|link| same_host(link, base_authority))
        .filter(|link| !is_excluded(link))
        .collect()
}

/// Absolute form of `href`. Any authority stays exactly as written.
fn resolve_link(base: &Url, base_authority: &str, href: &str) -> Option<String> {
    let href = href.trim();

    if authority(href).is_some() {
        return Some(href.to_string());
    }
    if let Some(rest) = href.strip_prefix("//") {
        return Some(format!("{}://{}", base.scheme(), rest));
    }

    // mailto:, tel:, javascript: and friends have no host to crawl
    let joined = base.join(href).ok()?;
    joined.host_str()?;

    Some(format!(
        "{}://{}{}",
        base.scheme(),
        base_authority,
        &joined[Position::BeforePath..]
    ))
}

fn same_host(link: &str, base_authority: &str) -> bool {
    authority(link).map_or(false, |found| found.eq_ignore_ascii_case(base_authority))
}

fn is_excluded(link: &str) -> bool {
    let lower = link.to_lowercase();
    EXCLUDED.iter().any(|fragment| lower.contains(fragment))
}
