//! Maintenance endpoints: statistics, crawl triggers and health.

use anyhow::Result;
use clap::Args;
use quotes_lib::{validation, CachedClient, QuotesError};

use crate::commands::browse::with_spinner;
use crate::output::to_json;

#[derive(Args)]
pub struct CrawlArgs {
    /// Source to crawl (e.g. people, cctv)
    pub source: String,
}

fn report(what: &str, err: &QuotesError) {
    tracing::debug!("{} failed: {}", what, err);
    eprintln!("Failed to {}, please try again later.", what);
}

fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    println!("{}", to_json(data)?);
    Ok(())
}

pub async fn stats(client: &CachedClient) -> Result<()> {
    match with_spinner("Loading statistics...", client.get_stats()).await {
        Ok(resp) => print_json(&resp),
        Err(e) => {
            report("load statistics", &e);
            Ok(())
        }
    }
}

pub async fn crawl(args: &CrawlArgs, client: &CachedClient) -> Result<()> {
    let source = validation::validate_crawl_source(&args.source)?;
    let message = format!("Triggering crawl for {}...", source);
    match with_spinner(&message, client.trigger_crawl(&source)).await {
        Ok(resp) => {
            if !resp.success {
                if let Some(err) = &resp.error {
                    eprintln!("Crawl for '{}' was rejected: {}", source, err);
                }
            }
            print_json(&resp)
        }
        Err(e) => {
            report(&format!("trigger crawl for '{}'", source), &e);
            Ok(())
        }
    }
}

pub async fn crawl_status(client: &CachedClient) -> Result<()> {
    match with_spinner("Loading crawl status...", client.get_crawl_status()).await {
        Ok(resp) => print_json(&resp),
        Err(e) => {
            report("load crawl status", &e);
            Ok(())
        }
    }
}

pub async fn health(client: &CachedClient) -> Result<()> {
    match with_spinner("Checking API health...", client.health_check()).await {
        Ok(status) => {
            eprintln!("{} is {}", client.base_url(), status.status);
            print_json(&status)
        }
        Err(e) => {
            report(&format!("reach {}", client.base_url()), &e);
            Ok(())
        }
    }
}
