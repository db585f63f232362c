// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (--verbose or RUST_LOG)
// 3. Run the crawl, cancelling it between pages on Ctrl-C
// 4. Print the findings and exit (0 = success, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use reconcrawl::{CrawlReport, ContactItem};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "reconcrawl=info" } else { "reconcrawl=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    let config = cli.crawl_config();

    // Ctrl-C stops the crawl after the page currently being fetched
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    if !cli.json {
        println!("🔗 Fetching content from: {}", config.seed_url);
    }

    let report = reconcrawl::run(config, cancel)
        .await
        .context("crawl failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(0)
}

fn print_report(report: &CrawlReport) {
    println!("↪️  Final URL after redirects: {}", report.final_url);

    if report.interrupted {
        println!("\n⏹️  Crawling interrupted by user");
    }

    if report.results.is_empty() {
        println!("\n✅ No email or phone found.");
        return;
    }

    println!("\n🔍 Found items:");

    let emails: Vec<_> = report.emails().collect();
    let phones: Vec<_> = report.phones().collect();

    if !emails.is_empty() {
        println!("\n📧 Emails ({}):", emails.len());
        print_items(&emails, &report.final_url);
    }

    if !phones.is_empty() {
        println!("\n📞 Phone numbers ({}):", phones.len());
        print_items(&phones, &report.final_url);
    }

    println!(
        "\n📊 Summary: {} emails, {} phone numbers found across {} pages",
        emails.len(),
        phones.len(),
        report.visited_urls.len()
    );
}

fn print_items(items: &[&ContactItem], final_url: &str) {
    for item in items {
        println!("  - {}", item.value);
        if item.source_url != final_url {
            println!("    Found on: {}", item.source_url);
        }
    }
}
