// src/crawl/page.rs
// =============================================================================
// Everything the crawler wants from one fetched page, in a single parse.
//
// scraper's Html is not Send, so it lives only inside scan_page and never
// across an .await in the crawl loop.
// =============================================================================

use std::collections::BTreeSet;

use scraper::Html;

use super::links::discover_links;
use crate::extract::email::{extract_emails_from_text, mailto_hrefs, mailto_targets};
use crate::extract::{extract_phones, unique_in_order};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageScan {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub links: BTreeSet<String>,
}

/// Extracts contacts from `html`, and links too when `discover_from` is set.
pub fn scan_page(html: &str, discover_from: Option<&str>) -> PageScan {
    let document = Html::parse_document(html);
    let text = visible_text(&document);

    // text pass first, then the mailto pass
    let mut emails = extract_emails_from_text(&text);
    emails.extend(mailto_targets(html));
    emails.extend(mailto_hrefs(&document));
    let emails = unique_in_order(emails);

    let phones = extract_phones(&text);

    let links = discover_from
        .map(|base| discover_links(&document, base))
        .unwrap_or_default();

    PageScan {
        emails,
        phones,
        links,
    }
}

/// Text nodes joined by a space, like a browser's textContent with gaps.
pub fn visible_text(document: &Html) -> String {
    document.root_element().text().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTACT_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Contact</title></head>
<body>
    <h1>Contact us</h1>
    <p>Email <b>info@example.com</b> or call <span>(555) 123-4567</span>.</p>
    <p><a href="mailto:sales@example.com">Sales</a></p>
    <p><a href="/about">About</a> <a href="https://other.com/">Elsewhere</a></p>
</body>
</html>"#;

    #[test]
    fn test_scan_contact_page() {
        let scan = scan_page(CONTACT_PAGE, Some("https://example.com/contact"));

        assert_eq!(scan.emails, vec!["info@example.com", "sales@example.com"]);
        assert_eq!(scan.phones, vec!["+1-555-123-4567"]);
        assert_eq!(
            scan.links.into_iter().collect::<Vec<_>>(),
            vec!["https://example.com/about"]
        );
    }

    #[test]
    fn test_scan_without_link_discovery() {
        let scan = scan_page(CONTACT_PAGE, None);
        assert!(scan.links.is_empty());
        assert_eq!(scan.emails.len(), 2);
    }

    #[test]
    fn test_text_split_across_tags_is_separated() {
        let document = Html::parse_document("<p>call<span>555</span></p>");
        assert_eq!(visible_text(&document).trim(), "call 555");
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(scan_page("", None), PageScan::default());
    }
}
