// src/fetch/mod.rs
// =============================================================================
// The transport the crawler talks to.
//
// The crawler never calls reqwest directly. It goes through the Fetcher
// trait, which has two operations:
// - get:  download a page (status code, URL after redirects, body)
// - head: follow redirects for a URL and report where they end up
//
// Both report failures as FetchError values instead of panicking, so the
// crawl loop can decide to skip a page and keep going.
// =============================================================================

mod http;

use async_trait::async_trait;

use crate::error::FetchError;

pub use http::HttpFetcher;

/// What a GET request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    /// URL after following redirects
    pub final_url: String,
    pub body: String,
}

impl FetchResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError>;

    /// Returns the final URL after redirects.
    async fn head(&self, url: &str) -> Result<String, FetchError>;
}
