// src/crawl/frontier.rs
// =============================================================================
// The crawl session.
//
// How it works:
// 1. resolve(): follow redirects on the seed URL with a HEAD request to find
//    the final URL (falls back to the seed if the request fails)
// 2. crawl():
//    - non-recursive: scan the final URL and stop
//    - recursive: breadth-first over same-host links, starting at the final
//      URL, until the queue is empty or max_pages pages have been visited
// 3. into_report(): hand back what was visited and found
//
// State:  Unstarted -> Resolved -> Crawling -> Done
//
// Everything mutable (visited set, queue, seen values, results) belongs to
// one Crawler and is only touched by the crawl loop, one page at a time.
// =============================================================================

use std::collections::{BTreeSet, HashSet, VecDeque};

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::normalize::normalize_url;
use super::page::{scan_page, PageScan};
use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::extract::{dedup_key, ContactItem, ContactKind, Deduplicator};
use crate::fetch::{Fetcher, HttpFetcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlState {
    Unstarted,
    Resolved,
    Crawling,
    Done,
}

/// What a finished crawl produced.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    pub final_url: String,
    /// Normalized keys of every page visited
    pub visited_urls: BTreeSet<String>,
    /// Unique findings in the order they were first seen
    pub results: Vec<ContactItem>,
    /// True when the run was cancelled before the queue ran out
    pub interrupted: bool,
}

impl CrawlReport {
    pub fn emails(&self) -> impl Iterator<Item = &ContactItem> {
        self.of_kind(ContactKind::Email)
    }

    pub fn phones(&self) -> impl Iterator<Item = &ContactItem> {
        self.of_kind(ContactKind::Phone)
    }

    fn of_kind(&self, kind: ContactKind) -> impl Iterator<Item = &ContactItem> {
        self.results.iter().filter(move |item| item.kind == kind)
    }
}

/// URLs waiting to be visited. A raw URL is queued at most once.
#[derive(Debug, Default)]
struct Frontier {
    queue: VecDeque<String>,
    enqueued: HashSet<String>,
}

impl Frontier {
    fn push(&mut self, url: String) -> bool {
        if self.enqueued.insert(url.clone()) {
            self.queue.push_back(url);
            true
        } else {
            false
        }
    }

    fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }
}

pub struct Crawler<F> {
    config: CrawlConfig,
    fetcher: F,
    cancel: CancellationToken,
    state: CrawlState,
    final_url: Option<String>,
    visited: BTreeSet<String>,
    frontier: Frontier,
    dedup: Deduplicator,
    results: Vec<ContactItem>,
    fetches: usize,
    interrupted: bool,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(config: CrawlConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            cancel: CancellationToken::new(),
            state: CrawlState::Unstarted,
            final_url: None,
            visited: BTreeSet::new(),
            frontier: Frontier::default(),
            dedup: Deduplicator::new(),
            results: Vec::new(),
            fetches: 0,
            interrupted: false,
        }
    }

    /// Lets another task stop the crawl between pages.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn state(&self) -> CrawlState {
        self.state
    }

    pub fn final_url(&self) -> Option<&str> {
        self.final_url.as_deref()
    }

    /// Follows redirects on the seed URL. Never fails: if the HEAD request
    /// does, the seed itself becomes the final URL.
    pub async fn resolve(&mut self) -> &str {
        let seed = self.config.seed_with_scheme();

        let final_url = match self.fetcher.head(&seed).await {
            Ok(url) => url,
            Err(e) => {
                warn!(url = %seed, error = %e, "could not resolve seed URL, using it as is");
                seed
            }
        };
        info!(final_url = %final_url, "resolved seed URL");

        self.state = CrawlState::Resolved;
        self.final_url.insert(final_url).as_str()
    }

    pub async fn crawl(&mut self) -> Result<(), CrawlError> {
        let final_url = match (self.state, &self.final_url) {
            (CrawlState::Resolved, Some(url)) => url.clone(),
            (CrawlState::Unstarted, _) | (CrawlState::Resolved, None) => {
                return Err(CrawlError::NotResolved)
            }
            (CrawlState::Crawling | CrawlState::Done, _) => {
                return Err(CrawlError::AlreadyFinished)
            }
        };

        self.state = CrawlState::Crawling;
        if self.config.recursive {
            self.crawl_recursive(final_url).await;
        } else {
            self.visited.insert(normalize_url(&final_url));
            self.visit(&final_url, false).await;
        }
        self.state = CrawlState::Done;

        info!(
            pages = self.visited.len(),
            findings = self.results.len(),
            "crawl finished"
        );
        Ok(())
    }

    async fn crawl_recursive(&mut self, start: String) {
        self.frontier.push(start);

        while self.visited.len() < self.config.max_pages {
            if self.cancel.is_cancelled() {
                info!("crawl cancelled");
                self.interrupted = true;
                break;
            }

            let Some(url) = self.frontier.pop() else {
                break;
            };

            let key = normalize_url(&url);
            if self.visited.contains(&key) {
                debug!(url = %url, "already visited");
                continue;
            }

            if !self.pause().await {
                info!("crawl cancelled during politeness delay");
                self.interrupted = true;
                break;
            }

            self.visited.insert(key);
            let budget_left = self.visited.len() < self.config.max_pages;
            let links = self.visit(&url, budget_left).await;

            for link in links {
                if !self.visited.contains(&normalize_url(&link)) && self.frontier.push(link.clone())
                {
                    debug!(url = %link, "queued");
                }
            }
        }
    }

    /// Politeness delay before every fetch but the first. Returns false if
    /// the crawl was cancelled while waiting.
    async fn pause(&self) -> bool {
        let delay = self.config.delay();
        if self.fetches == 0 || delay.is_zero() {
            return true;
        }

        tokio::select! {
            _ = self.cancel.cancelled() => false,
            _ = tokio::time::sleep(delay) => true,
        }
    }

    /// Fetches one page, records its findings and returns the links to
    /// follow (empty unless `discover` is set).
    async fn visit(&mut self, url: &str, discover: bool) -> BTreeSet<String> {
        self.fetches += 1;

        info!(url = %url, "searching");

        let response = match self.fetcher.get(url).await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "failed to fetch page");
                return BTreeSet::new();
            }
        };

        if !response.is_ok() {
            info!(url = %url, status = response.status, "skipping page");
            return BTreeSet::new();
        }

        let PageScan {
            emails,
            phones,
            links,
        } = scan_page(&response.body, discover.then_some(url));

        if !emails.is_empty() || !phones.is_empty() {
            info!(
                url = %url,
                emails = emails.len(),
                phones = phones.len(),
                "found contacts"
            );
        }

        for email in emails {
            self.add_result(ContactKind::Email, email, url);
        }
        for phone in phones {
            self.add_result(ContactKind::Phone, phone, url);
        }

        links
    }

    fn add_result(&mut self, kind: ContactKind, value: String, source_url: &str) {
        let key = dedup_key(kind, &value);
        if self.dedup.seen(&key) {
            return;
        }
        self.dedup.record(key);
        self.results.push(ContactItem {
            kind,
            value,
            source_url: source_url.to_string(),
        });
    }

    /// The final URL falls back to the configured seed if resolve() never ran.
    pub fn into_report(self) -> CrawlReport {
        let final_url = self
            .final_url
            .unwrap_or_else(|| self.config.seed_with_scheme());

        CrawlReport {
            final_url,
            visited_urls: self.visited,
            results: self.results,
            interrupted: self.interrupted,
        }
    }
}

/// Crawls with the reqwest transport: validate, resolve, crawl, report.
pub async fn run(config: CrawlConfig, cancel: CancellationToken) -> Result<CrawlReport, CrawlError> {
    let fetcher = HttpFetcher::new(&config)?;
    run_with(config, fetcher, cancel).await
}

/// Same as run() with any transport.
pub async fn run_with<F: Fetcher>(
    config: CrawlConfig,
    fetcher: F,
    cancel: CancellationToken,
) -> Result<CrawlReport, CrawlError> {
    config.validate()?;
    let mut crawler = Crawler::new(config, fetcher).with_cancellation(cancel);
    crawler.resolve().await;
    crawler.crawl().await?;
    Ok(crawler.into_report())
}
