// src/extract/email.rs
// =============================================================================
// Email extraction.
//
// Two passes per page:
// 1. visible text: anything shaped like local-part@domain.tld
// 2. markup: mailto: targets, found both with a regex over the raw HTML
//    (survives markup the parser mangles) and through the parsed <a href>
//    attributes
//
// The page scanner runs both mailto halves over a single parse and merges
// them after the text pass.
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use super::unique_in_order;

/// Longer candidates are treated as garbage rather than addresses.
pub const MAX_EMAIL_LEN: usize = 100;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern")
});

static MAILTO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:mailto:)([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})")
        .expect("mailto pattern")
});

static MAILTO_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:mailto:)([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})")
        .expect("mailto href pattern")
});

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("anchor selector"));

/// Emails in visible page text, first-seen order, no repeats.
pub fn extract_emails_from_text(text: &str) -> Vec<String> {
    unique_in_order(
        EMAIL
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .filter(|email| email.len() <= MAX_EMAIL_LEN),
    )
}

/// mailto: targets found by a regex over unparsed markup.
pub fn mailto_targets(html: &str) -> Vec<String> {
    MAILTO
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|email| email.len() <= MAX_EMAIL_LEN)
        .collect()
}

/// mailto: targets of the parsed `<a href>` attributes.
pub fn mailto_hrefs(document: &Html) -> Vec<String> {
    document
        .select(&ANCHOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| MAILTO_HREF.captures(href.trim_start()))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|email| email.len() <= MAX_EMAIL_LEN)
        .collect()
}
