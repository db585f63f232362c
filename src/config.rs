// src/config.rs
// =============================================================================
// Crawl configuration.
//
// A CrawlConfig is built once per run (usually from the command line) and
// never changes afterwards. The crawler only ever borrows it.
// =============================================================================

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CrawlError;

pub const DEFAULT_MAX_PAGES: usize = 50;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DELAY_SECS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Where the crawl starts. A missing scheme becomes https://
    pub seed_url: String,
    /// Upper bound on distinct pages fetched in recursive mode
    pub max_pages: usize,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Pause before every fetch except the first one
    pub delay_secs: f64,
    /// Follow internal links instead of only scanning the final seed page
    pub recursive: bool,
    pub verify_tls: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed_url: String::new(),
            max_pages: DEFAULT_MAX_PAGES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            delay_secs: DEFAULT_DELAY_SECS,
            recursive: false,
            verify_tls: true,
        }
    }
}

impl CrawlConfig {
    /// A config with the default limits for the given seed.
    pub fn new(seed_url: impl Into<String>) -> Self {
        Self {
            seed_url: seed_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Zero unless validate() has accepted the delay.
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_secs).unwrap_or_default()
    }

    /// The seed with a scheme in front of it.
    pub fn seed_with_scheme(&self) -> String {
        ensure_scheme(&self.seed_url)
    }

    pub fn validate(&self) -> Result<(), CrawlError> {
        if self.seed_url.trim().is_empty() {
            return Err(CrawlError::InvalidConfig("seed URL is empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(CrawlError::InvalidConfig(
                "timeout must be at least one second".into(),
            ));
        }
        if Duration::try_from_secs_f64(self.delay_secs).is_err() {
            return Err(CrawlError::InvalidConfig(format!(
                "delay must be a non-negative, representable number of seconds, got {}",
                self.delay_secs
            )));
        }
        Ok(())
    }
}

/// Prefixes `https://` unless the URL already starts with http:// or https://
///
/// Example:
///   "example.com"        -> "https://example.com"
///   "http://example.com" -> "http://example.com"
pub fn ensure_scheme(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
