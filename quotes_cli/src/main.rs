mod commands;
mod output;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use quotes_lib::{CachedClient, CategoryCache, Config, ThemeContext};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// Log directives added on top of RUST_LOG: the binary at info, the library
/// at warn so config fallbacks are visible.
const DEFAULT_DIRECTIVES: &[&str] = &["daily_quotes=info", "quotes_lib=warn"];

fn log_filter() -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_default_env();
    for directive in DEFAULT_DIRECTIVES {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}

#[derive(Parser)]
#[command(name = "daily-quotes")]
#[command(about = "Browse daily inspirational quotes from the quotes API")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Base URL of the quotes API (overrides DAILY_QUOTES_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's quote, recent quotes and a category preview
    Home(commands::home::HomeArgs),
    /// Browse all quotes, newest first
    History(commands::history::HistoryArgs),
    /// Search quotes by keyword
    Search(commands::search::SearchArgs),
    /// Browse one category
    Category(commands::category::CategoryArgs),
    /// About this project
    About,
    /// Crawler statistics
    Stats,
    /// Trigger a crawl for one source
    Crawl(commands::admin::CrawlArgs),
    /// Show the crawler status
    CrawlStatus,
    /// Check that the API is reachable
    Health,
    /// Show or toggle the light/dark theme
    Theme(commands::theme::ThemeArgs),
}

fn parse_format(raw: &str) -> Result<OutputFormat> {
    Ok(match raw {
        "table" => OutputFormat::Table,
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        other => bail!(
            "Unknown output format '{}'. Use table, json, csv, or markdown.",
            other
        ),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = parse_format(&cli.output)?;

    let mut config = Config::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url)?;
    }
    tracing::debug!("Using API at {}", config.api_url);

    let mut theme = ThemeContext::load_with_system_default(config.theme_file.clone());
    let client = CachedClient::new(&config.api_url, CategoryCache::new());
    let mode = theme.mode();

    match &cli.command {
        Commands::Home(args) => commands::home::run(args, &client, format, mode).await?,
        Commands::History(args) => {
            commands::history::run(args, &client, config.page_size, format, mode).await?
        }
        Commands::Search(args) => {
            commands::search::run(args, &client, config.page_size, format, mode).await?
        }
        Commands::Category(args) => {
            commands::category::run(args, &client, config.page_size, format, mode).await?
        }
        Commands::About => commands::about::run(format)?,
        Commands::Stats => commands::admin::stats(&client).await?,
        Commands::Crawl(args) => commands::admin::crawl(args, &client).await?,
        Commands::CrawlStatus => commands::admin::crawl_status(&client).await?,
        Commands::Health => commands::admin::health(&client).await?,
        Commands::Theme(args) => commands::theme::run(args, &mut theme)?,
    }

    Ok(())
}
