use anyhow::Result;
use clap::Args;
use quotes_lib::{validation, CachedClient, ListKind, ListView, ThemeMode};

use crate::commands::browse;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct CategoryArgs {
    /// Category name: 思想类, 生活类, 经典文化, 海外主流, 语录精选
    pub name: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Quotes per page (defaults to DAILY_QUOTES_PAGE_SIZE or 10)
    #[arg(long)]
    pub limit: Option<i64>,

    /// Keep reading page requests from stdin after the first page
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

pub async fn run(
    args: &CategoryArgs,
    client: &CachedClient,
    default_limit: i64,
    format: OutputFormat,
    theme: ThemeMode,
) -> Result<()> {
    let category = validation::validate_category(&args.name)?;
    let page = validation::validate_page(args.page)?;
    let limit = validation::validate_limit(args.limit.unwrap_or(default_limit))?;

    let mut view = ListView::new(ListKind::Category(category), limit);
    browse::run_view(&mut view, client, page, format, theme, args.interactive).await
}
