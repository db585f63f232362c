// src/lib.rs
// =============================================================================
// reconcrawl: crawl a website and pull out contact details.
//
// How the pieces fit together:
// - config:  what to crawl and how (page budget, timeout, delay, ...)
// - fetch:   the HTTP transport, behind a trait so tests can swap it out
// - extract: email/phone matching, validation and value-level dedup
// - crawl:   URL normalization, link discovery and the crawl loop itself
//
// The binary in src/main.rs only parses arguments and prints the report.
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod fetch;

pub use config::CrawlConfig;
pub use crawl::{run, run_with, CrawlReport, CrawlState, Crawler};
pub use error::{CrawlError, FetchError};
pub use extract::{ContactItem, ContactKind};
pub use fetch::{FetchResponse, Fetcher, HttpFetcher};
