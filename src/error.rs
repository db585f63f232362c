// src/error.rs
// =============================================================================
// Error types for the library.
//
// Two families:
// - CrawlError: things that stop a crawl from starting (bad config, a broken
//   HTTP client, calling the session methods out of order)
// - FetchError: a single request failed. The crawler never lets these escape;
//   it logs them and treats the page as empty.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// crawl() was called before resolve()
    #[error("seed URL has not been resolved; call resolve() before crawl()")]
    NotResolved,

    /// A session runs exactly once
    #[error("this crawl session has already finished")]
    AlreadyFinished,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Why a single request failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("could not resolve hostname")]
    Dns,

    #[error("connection failed")]
    Connect,

    #[error("TLS certificate error")]
    Tls,

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for FetchError {
    // reqwest doesn't expose DNS or TLS failures as their own kinds, so
    // those two are picked out of the error text.
    fn from(error: reqwest::Error) -> Self {
        let text = error.to_string().to_lowercase();

        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_redirect() {
            FetchError::TooManyRedirects
        } else if error.is_connect() {
            if text.contains("dns") {
                FetchError::Dns
            } else if text.contains("certificate") || text.contains("tls") || text.contains("ssl") {
                FetchError::Tls
            } else {
                FetchError::Connect
            }
        } else if text.contains("certificate") || text.contains("ssl") {
            FetchError::Tls
        } else {
            FetchError::Other(error.to_string())
        }
    }
}
