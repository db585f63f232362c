// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Submodules:
// - normalize: URL -> dedup key for the visited set
// - links:     same-host links worth following
// - page:      one parse per page, feeding the extractors and link discovery
// - frontier:  the crawl session (resolve, visit pages, collect results)
// =============================================================================

mod frontier;
pub mod links;
pub mod normalize;
pub mod page;

pub use frontier::{run, run_with, CrawlReport, CrawlState, Crawler};
pub use links::discover_links;
pub use normalize::normalize_url;
