//! End-to-end crawls through HttpFetcher against a local mock server.

use mockito::{Matcher, Server};
use reconcrawl::crawl::normalize_url;
use reconcrawl::{run, ContactKind, CrawlConfig};
use tokio_util::sync::CancellationToken;

fn html_page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Test</title></head>
<body>
{}
</body>
</html>"#,
        body
    )
}

fn config(seed: String, recursive: bool) -> CrawlConfig {
    CrawlConfig {
        seed_url: seed,
        delay_secs: 0.0,
        timeout_secs: 5,
        recursive,
        ..CrawlConfig::default()
    }
}

#[tokio::test]
async fn single_page_yields_one_email_and_one_phone() {
    let mut server = Server::new_async().await;
    let page = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html_page(
            r#"<p>Write to hello@example.com or call (555) 123-4567.</p>
               <a href="/team">Team</a>"#,
        ))
        .create_async()
        .await;
    let team = server.mock("GET", "/team").expect(0).create_async().await;

    let report = run(config(server.url(), false), CancellationToken::new())
        .await
        .unwrap();

    page.assert_async().await;
    team.assert_async().await;

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].kind, ContactKind::Email);
    assert_eq!(report.results[0].value, "hello@example.com");
    assert_eq!(report.results[1].kind, ContactKind::Phone);
    assert_eq!(report.results[1].value, "+1-555-123-4567");
    assert_eq!(report.visited_urls.len(), 1);
    assert!(report
        .visited_urls
        .contains(&normalize_url(&report.final_url)));
}

#[tokio::test]
async fn recursive_crawl_follows_internal_links_once() {
    let mut server = Server::new_async().await;
    let base = server.url();

    server
        .mock("GET", "/")
        .with_status(200)
        .with_body(html_page(&format!(
            r#"<p>Main line +1-555-123-4567</p>
               <a href="/contact">Contact</a>
               <a href="/contact/#form">Contact form</a>
               <a href="{base}/contact?utm=nav">Contact from nav</a>
               <a href="/missing">Missing</a>
               <a href="/admin">Admin</a>
               <a href="https://elsewhere.test/">Elsewhere</a>"#
        )))
        .create_async()
        .await;
    let contact = server
        .mock("GET", "/contact")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(html_page(
            r#"<p>Sales: <a href="mailto:sales@example.com">sales</a></p>
               <p>Phone (555) 123-4567, Paris office +33 (1) 42 86 12 34</p>"#,
        ))
        .expect(1)
        .create_async()
        .await;
    let missing = server
        .mock("GET", "/missing")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;
    let admin = server.mock("GET", "/admin").expect(0).create_async().await;

    let report = run(config(base.clone(), true), CancellationToken::new())
        .await
        .unwrap();

    contact.assert_async().await;
    missing.assert_async().await;
    admin.assert_async().await;

    let values: Vec<_> = report.results.iter().map(|item| item.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["+1-555-123-4567", "sales@example.com", "+33 1 42 86 12 34"]
    );

    // first sighting wins the attribution
    assert_eq!(report.results[0].source_url, format!("{}/", base));
    assert_eq!(report.results[1].source_url, format!("{}/contact", base));

    assert_eq!(report.visited_urls.len(), 3);
    assert!(!report.interrupted);
}

#[tokio::test]
async fn page_budget_limits_fetches() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/")
        .with_status(200)
        .with_body(html_page(r#"<a href="/a">A</a><a href="/b">B</a><a href="/c">C</a>"#))
        .create_async()
        .await;
    let a = server
        .mock("GET", "/a")
        .with_status(200)
        .with_body(html_page("a"))
        .expect(1)
        .create_async()
        .await;
    let b = server.mock("GET", "/b").expect(0).create_async().await;
    let c = server.mock("GET", "/c").expect(0).create_async().await;

    let mut cfg = config(server.url(), true);
    cfg.max_pages = 2;

    let report = run(cfg, CancellationToken::new()).await.unwrap();

    a.assert_async().await;
    b.assert_async().await;
    c.assert_async().await;
    assert_eq!(report.visited_urls.len(), 2);
}

#[tokio::test]
async fn server_error_on_seed_is_not_fatal() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let report = run(config(server.url(), true), CancellationToken::new())
        .await
        .unwrap();

    assert!(report.results.is_empty());
    assert_eq!(report.visited_urls.len(), 1);
}
