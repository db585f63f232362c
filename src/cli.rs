// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the Cli struct below *is* the argument list, and
// clap generates parsing, --help and --version from it.
// =============================================================================

use clap::Parser;
use reconcrawl::config::{CrawlConfig, DEFAULT_DELAY_SECS, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(
    name = "reconcrawl",
    version,
    about = "Extract emails and phone numbers from a website",
    long_about = "reconcrawl fetches a website (following redirects from the URL you give it) \
                  and lists the email addresses and phone numbers it finds. With --recursive \
                  it also follows internal links, up to --max-pages pages."
)]
pub struct Cli {
    /// URL of the website to analyze (https:// is assumed when omitted)
    pub url: String,

    /// Maximum number of pages to crawl
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Delay between requests in seconds
    #[arg(long, default_value_t = DEFAULT_DELAY_SECS)]
    pub delay: f64,

    /// Print every page being searched
    #[arg(short, long)]
    pub verbose: bool,

    /// Follow every internal link (default: only crawl the final page after redirects)
    #[arg(short, long)]
    pub recursive: bool,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub insecure: bool,

    /// Output results in JSON format instead of a list
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            seed_url: self.url.clone(),
            max_pages: self.max_pages,
            timeout_secs: self.timeout,
            delay_secs: self.delay,
            recursive: self.recursive,
            verify_tls: !self.insecure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["reconcrawl", "example.com"]);
        let config = cli.crawl_config();
        assert_eq!(config, CrawlConfig::new("example.com"));
        assert!(!cli.json);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "reconcrawl",
            "https://example.com",
            "--recursive",
            "--max-pages",
            "5",
            "--delay",
            "0.5",
            "--timeout",
            "10",
            "--insecure",
        ]);
        let config = cli.crawl_config();
        assert!(config.recursive);
        assert_eq!(config.max_pages, 5);
        assert_eq!(config.delay_secs, 0.5);
        assert_eq!(config.timeout_secs, 10);
        assert!(!config.verify_tls);
    }
}
