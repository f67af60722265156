use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use quotes_lib::pagination::{markers_for, should_render, PageMarker};
use quotes_lib::types::{PaginationInfo, Quote, TodayQuote};
use quotes_lib::ThemeMode;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Longest quote text shown in a table cell before it is cut with an ellipsis.
const MAX_CELL_CHARS: usize = 48;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Whether the pagination block and other decorations belong in the output.
    pub fn is_human(&self) -> bool {
        matches!(self, OutputFormat::Table | OutputFormat::Markdown)
    }
}

#[derive(Tabled, Serialize)]
struct QuoteRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Quote")]
    #[serde(rename = "Quote")]
    content: String,
    #[tabled(rename = "Author")]
    #[serde(rename = "Author")]
    author: String,
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Link")]
    #[serde(rename = "Link")]
    link: String,
}

// -- Row builders --

fn build_quote_rows(quotes: &[Quote], truncate: bool) -> Vec<QuoteRow> {
    quotes
        .iter()
        .map(|q| QuoteRow {
            date: format_date(&q.created_at),
            content: if truncate {
                truncate_chars(&q.content, MAX_CELL_CHARS)
            } else {
                q.content.clone()
            },
            author: q.author.clone().unwrap_or_default(),
            source: q.source.clone(),
            category: q.category.clone().unwrap_or_default(),
            link: q.original_url.clone().unwrap_or_default(),
        })
        .collect()
}

// -- Quote lists --

fn styled_table(rows: Vec<QuoteRow>, theme: ThemeMode) -> String {
    let mut table = Table::new(rows);
    match theme {
        ThemeMode::Light => table.with(Style::modern()),
        ThemeMode::Dark => table.with(Style::rounded()),
    };
    table.to_string()
}

pub fn quotes_table(quotes: &[Quote], theme: ThemeMode) -> String {
    styled_table(build_quote_rows(quotes, true), theme)
}

pub fn quotes_markdown(quotes: &[Quote]) -> String {
    let mut table = Table::new(build_quote_rows(quotes, false));
    table.with(Style::markdown());
    table.to_string()
}

pub fn quotes_csv(quotes: &[Quote]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in build_quote_rows(quotes, false) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to finish CSV output: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn to_json<T: serde::Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Renders a list of quotes in the requested format.
pub fn render_quotes(quotes: &[Quote], format: OutputFormat, theme: ThemeMode) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => quotes_table(quotes, theme),
        OutputFormat::Markdown => quotes_markdown(quotes),
        OutputFormat::Csv => quotes_csv(quotes)?,
        OutputFormat::Json => to_json(&quotes)?,
    })
}

// -- Pagination --

pub fn page_header(info: &PaginationInfo) -> String {
    format!(
        "Page {}/{} ({} total)",
        info.page, info.total_pages, info.total
    )
}

/// "Showing items A–B of N" for the page described by `info`.
pub fn item_range_line(info: &PaginationInfo) -> String {
    let (first, last) = info.item_range();
    format!("Showing items {}–{} of {}", first, last, info.total)
}

/// The marker strip: previous/next controls around the windowed page numbers,
/// with the current page in brackets.
pub fn marker_line(info: &PaginationInfo) -> String {
    let mut parts = Vec::new();
    parts.push(if info.page > 1 { "‹ prev" } else { "  " }.to_string());
    for marker in markers_for(info) {
        parts.push(match marker {
            PageMarker::Page(p) if p == info.page => format!("[{}]", p),
            PageMarker::Page(p) => p.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        });
    }
    if info.page < info.total_pages {
        parts.push("next ›".to_string());
    }
    parts.join(" ").trim().to_string()
}

/// The full pagination block, or an empty string when there is only one page.
pub fn render_pagination(info: &PaginationInfo) -> String {
    if !should_render(info) {
        return String::new();
    }
    format!("{}\n{}", item_range_line(info), marker_line(info))
}

// -- Single quotes and tabs --

pub fn render_today(today: &TodayQuote) -> String {
    let q = &today.quote;
    let heading = if today.is_today {
        "Today's quote"
    } else {
        "Latest quote"
    };
    let mut out = format!("{} · {}\n\n  “{}”\n", heading, format_date(&q.created_at), q.content);
    if let Some(en) = &q.content_en {
        out.push_str(&format!("  {}\n", en));
    }
    let mut byline = Vec::new();
    if let Some(author) = &q.author {
        byline.push(author.clone());
    }
    byline.push(q.source.clone());
    if let Some(category) = &q.category {
        byline.push(category.clone());
    }
    out.push_str(&format!("\n  — {}\n", byline.join(" · ")));
    if let Some(url) = &q.original_url {
        out.push_str(&format!("  {}\n", url));
    }
    out
}

/// The category tab strip with the active tab in brackets.
pub fn render_tabs(tabs: &[&str], active: &str) -> String {
    tabs.iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab)
            } else {
                tab.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

// -- Helpers --

/// Formats an API timestamp as a calendar date, leaving unknown shapes untouched.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return dt.date().to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.to_string();
    }
    raw.to_string()
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
