// src/fetch/http.rs
// =============================================================================
// reqwest-backed Fetcher.
//
// One Client is built per crawl and reused for every request, so connections
// to the target site are pooled. Timeout and TLS verification come from the
// CrawlConfig and are fixed for the lifetime of the client.
// =============================================================================

use async_trait::async_trait;
use reqwest::{redirect, Client};

use super::{FetchResponse, Fetcher};
use crate::config::CrawlConfig;
use crate::error::{CrawlError, FetchError};

const USER_AGENT: &str = concat!("reconcrawl/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CrawlConfig) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response.text().await?;

        Ok(FetchResponse {
            status,
            final_url,
            body,
        })
    }

    async fn head(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.head(url).send().await?;
        Ok(response.url().to_string())
    }
}
