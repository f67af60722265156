//! Shared rendering and paging loop for the history, search and category views.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use quotes_lib::{CachedClient, ListKind, ListView, QuotesError, ThemeMode};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::output::{page_header, render_pagination, render_quotes, OutputFormat};

/// Runs `fut` behind a spinner on stderr. The spinner hides itself when
/// stderr is not a terminal.
pub async fn with_spinner<T, F>(message: &str, fut: F) -> T
where
    F: Future<Output = T>,
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    let out = fut.await;
    pb.finish_and_clear();
    out
}

/// Inline message shown when a view's fetch fails.
pub fn failure_message(kind: &ListKind) -> String {
    match kind {
        ListKind::History => "Failed to load history, please try again later.".to_string(),
        ListKind::Search(q) => format!("Search for '{}' failed, please try again later.", q),
        ListKind::Category(name) => {
            format!("Failed to load category '{}', please try again later.", name)
        }
    }
}

fn empty_message(kind: &ListKind) -> String {
    match kind {
        ListKind::History => "No quotes yet.".to_string(),
        ListKind::Search(q) => format!("No quotes found for '{}'.", q),
        ListKind::Category(name) => format!("No quotes in '{}' yet.", name),
    }
}

/// Renders the current page of `view`: quote rows, then the pagination
/// block for human-readable formats.
pub fn render_view(view: &ListView, format: OutputFormat, theme: ThemeMode) -> Result<String> {
    let Some(resp) = view.current() else {
        return Ok(String::new());
    };
    if resp.quotes.is_empty() && format.is_human() {
        return Ok(empty_message(view.kind()));
    }

    let mut out = render_quotes(&resp.quotes, format, theme)?;
    if format.is_human() {
        let pagination = render_pagination(&resp.pagination);
        if !pagination.is_empty() {
            out.push_str("\n\n");
            out.push_str(&pagination);
        }
    }
    Ok(out)
}

fn print_view(view: &ListView, format: OutputFormat, theme: ThemeMode) -> Result<()> {
    if let Some(info) = view.pagination() {
        eprintln!("{}", page_header(info));
    }
    println!("{}", render_view(view, format, theme)?);
    Ok(())
}

/// A line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum PagerInput {
    Page(i64),
    Next,
    Previous,
    Quit,
    Unknown,
}

pub fn parse_pager_input(line: &str) -> PagerInput {
    match line.trim().to_lowercase().as_str() {
        "" | "n" | "next" => PagerInput::Next,
        "p" | "prev" | "previous" => PagerInput::Previous,
        "q" | "quit" | "exit" => PagerInput::Quit,
        other => other
            .parse::<i64>()
            .map(PagerInput::Page)
            .unwrap_or(PagerInput::Unknown),
    }
}

/// Loads `page` into `view` and prints it. With `interactive`, keeps reading
/// page requests from stdin until `q` or end of input.
///
/// A failed fetch prints an inline message and leaves the view as it was.
pub async fn run_view(
    view: &mut ListView,
    client: &CachedClient,
    page: i64,
    format: OutputFormat,
    theme: ThemeMode,
    interactive: bool,
) -> Result<()> {
    let loaded = with_spinner("Loading quotes...", view.load(client, page)).await;
    if let Err(e) = loaded {
        report_failure(view.kind(), &e);
        return Ok(());
    }
    print_view(view, format, theme)?;

    if !interactive {
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("page (number, n, p, q)> ");
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let moved = match parse_pager_input(&line) {
            PagerInput::Quit => break,
            PagerInput::Unknown => {
                eprintln!("Enter a page number, n for next, p for previous, or q to quit.");
                continue;
            }
            PagerInput::Next => with_spinner("Loading quotes...", view.next(client)).await,
            PagerInput::Previous => {
                with_spinner("Loading quotes...", view.previous(client)).await
            }
            PagerInput::Page(p) => with_spinner("Loading quotes...", view.go_to(client, p)).await,
        };
        match moved {
            Ok(true) => print_view(view, format, theme)?,
            Ok(false) => {}
            Err(e) => report_failure(view.kind(), &e),
        }
    }
    Ok(())
}

fn report_failure(kind: &ListKind, err: &QuotesError) {
    tracing::debug!("{} fetch failed: {}", kind.label(), err);
    eprintln!("{}", failure_message(kind));
}
