// src/extract/phone.rs
// =============================================================================
// Phone number extraction.
//
// Three patterns run over the visible text, always in this order:
// 1. US with country code:    +1 555 123 4567, +1-(555)-123-4567, ...
// 2. US without country code: (555) 123-4567, 555.123.4567, ...
// 3. International:           +33 1 42 86 12 34, +44 20 7946 0958, ...
//
// Every match of every pattern goes through is_valid_phone. The patterns
// overlap on purpose: "+1-555-123-4567" is seen by both US and international
// patterns, and the Deduplicator folds the results together afterwards.
//
// US matches are rendered as +1-DDD-DDD-DDDD; international matches are
// cleaned into single-space separated groups.
// =============================================================================

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::unique_in_order;

static US_WITH_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\+1[-.\s]?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})\b")
        .expect("US phone pattern")
});

static US_LOCAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})\b")
        .expect("US local phone pattern")
});

static INTERNATIONAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+([0-9]{1,4})[\s.-]?(\(?[0-9]{1,4}\)?[\s.-]?){2,6}[0-9]{2,4}\b")
        .expect("international phone pattern")
});

static BARE_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10,15}$").expect("digit run pattern"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

static DASH_DOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-.]+").expect("separator pattern"));

const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy)]
enum PhonePattern {
    UsWithCode,
    UsLocal,
    International,
}

impl PhonePattern {
    const ORDERED: [PhonePattern; 3] = [
        PhonePattern::UsWithCode,
        PhonePattern::UsLocal,
        PhonePattern::International,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            PhonePattern::UsWithCode => &*US_WITH_CODE,
            PhonePattern::UsLocal => &*US_LOCAL,
            PhonePattern::International => &*INTERNATIONAL,
        }
    }

    fn format(self, caps: &Captures<'_>) -> String {
        match self {
            PhonePattern::UsWithCode | PhonePattern::UsLocal => format!(
                "+1-{}-{}-{}",
                &caps[1], &caps[2], &caps[3]
            ),
            PhonePattern::International => clean_international_phone(&caps[0]),
        }
    }
}

/// Phone numbers in visible text, formatted, first-seen order.
pub fn extract_phones(text: &str) -> Vec<String> {
    let mut phones = Vec::new();

    for pattern in PhonePattern::ORDERED {
        for caps in pattern.regex().captures_iter(text) {
            if is_valid_phone(&caps[0]) {
                phones.push(pattern.format(&caps));
            }
        }
    }

    unique_in_order(phones)
}

/// Decides whether a matched substring is a phone number.
///
/// Rejects, in order:
/// 1. fewer than 10 or more than 15 digits
/// 2. a bare run of digits (order numbers, ISBNs, product IDs)
/// 3. no separator at all
/// 4. `+<country code>` glued to an unseparated digit run
pub fn is_valid_phone(candidate: &str) -> bool {
    let digits = candidate.chars().filter(char::is_ascii_digit).count();
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
        return false;
    }

    if BARE_DIGITS.is_match(candidate) {
        return false;
    }

    if !candidate.chars().any(|c| is_separator(c) || c == '+') {
        return false;
    }

    if let Some(rest) = candidate.strip_prefix('+') {
        let code_len = rest
            .chars()
            .take(4)
            .take_while(char::is_ascii_digit)
            .count();
        if code_len > 0 && !rest[code_len..].chars().any(is_separator) {
            return false;
        }
    }

    true
}

/// Canonical space-separated form of an international number.
///
/// Example:
///   "+33.1.42.86.12.34"   -> "+33 1 42 86 12 34"
///   "+33 (1) 42 86 12 34" -> "+33 1 42 86 12 34"
pub fn clean_international_phone(phone: &str) -> String {
    let phone = WHITESPACE.replace_all(phone.trim(), " ");
    let phone = DASH_DOT.replace_all(&phone, " ");
    let phone = phone.replace(['(', ')'], "");
    WHITESPACE.replace_all(&phone, " ").trim().to_string()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '.' | '(' | ')')
}
