use anyhow::Result;
use clap::Args;
use quotes_lib::types::{QuotesListResponse, TodayQuote};
use quotes_lib::validation::{self, CATEGORY_TABS, DEFAULT_CATEGORY};
use quotes_lib::{CachedClient, ListKind, QuotesError, ThemeMode};
use serde_json::json;

use crate::commands::browse::with_spinner;
use crate::output::{render_quotes, render_tabs, render_today, to_json, OutputFormat};

/// Quotes shown in the "recent" strip under today's quote.
const RECENT_LIMIT: i64 = 3;

const TODAY_FAILED: &str = "Failed to load today's quote, please try again later.";
const RECENT_FAILED: &str = "Failed to load recent quotes, please try again later.";

#[derive(Args)]
pub struct HomeArgs {
    /// Category tab to show (defaults to 思想类)
    #[arg(long)]
    pub category: Option<String>,
}

/// Everything the home view shows. Each section keeps its own result so a
/// failed fetch only blanks that section.
pub struct HomeData {
    pub today: Result<TodayQuote, QuotesError>,
    pub recent: Result<QuotesListResponse, QuotesError>,
    pub active: String,
    pub category: Result<QuotesListResponse, QuotesError>,
}

fn category_failed(name: &str) -> String {
    format!("Failed to load category '{}', please try again later.", name)
}

/// Fetches today's quote and the recent strip concurrently, then the active
/// category tab. The default tab is always loaded through the cache first.
pub async fn load_home(client: &CachedClient, active: &str) -> HomeData {
    let (today, recent) = tokio::join!(
        client.get_today(),
        client.fetch_quotes(&ListKind::History, 1, RECENT_LIMIT)
    );

    let default_tab = client.get_category_quotes(DEFAULT_CATEGORY).await;
    let category = if active == DEFAULT_CATEGORY {
        default_tab
    } else {
        client.get_category_quotes(active).await
    };

    HomeData {
        today,
        recent,
        active: active.to_string(),
        category,
    }
}

/// Inline messages for the sections whose fetch failed, in display order.
pub fn section_failures(data: &HomeData) -> Vec<String> {
    let mut failures = Vec::new();
    if let Err(e) = &data.today {
        tracing::debug!("today fetch failed: {}", e);
        failures.push(TODAY_FAILED.to_string());
    }
    if let Err(e) = &data.recent {
        tracing::debug!("recent quotes fetch failed: {}", e);
        failures.push(RECENT_FAILED.to_string());
    }
    if let Err(e) = &data.category {
        tracing::debug!("category fetch failed: {}", e);
        failures.push(category_failed(&data.active));
    }
    failures
}

/// Renders the home view. Human formats carry failure messages inline in
/// place of the missing section. JSON uses `null` for it and CSV leaves it
/// out; `run` reports those failures on stderr.
pub fn render_home(data: &HomeData, format: OutputFormat, theme: ThemeMode) -> Result<String> {
    if format == OutputFormat::Json {
        let doc = json!({
            "today": data.today.as_ref().ok(),
            "recent": data.recent.as_ref().ok().map(|r| &r.quotes),
            "category": {
                "name": data.active,
                "quotes": data.category.as_ref().ok().map(|r| &r.quotes),
            },
        });
        return to_json(&doc);
    }

    let mut sections = Vec::new();
    match &data.today {
        Ok(today) => sections.push(render_today(today)),
        Err(_) if format.is_human() => sections.push(TODAY_FAILED.to_string()),
        Err(_) => {}
    }

    match &data.recent {
        Ok(resp) if resp.quotes.is_empty() => {}
        Ok(resp) => sections.push(format!(
            "Recent quotes\n{}",
            render_quotes(&resp.quotes, format, theme)?
        )),
        Err(_) if format.is_human() => sections.push(RECENT_FAILED.to_string()),
        Err(_) => {}
    }

    let tab = match &data.category {
        Ok(resp) if resp.quotes.is_empty() => format!("No quotes in '{}' yet.", data.active),
        Ok(resp) => render_quotes(&resp.quotes, format, theme)?,
        Err(_) if format.is_human() => category_failed(&data.active),
        Err(_) => String::new(),
    };
    sections.push(format!("{}\n{}", render_tabs(CATEGORY_TABS, &data.active), tab));

    Ok(sections.join("\n\n"))
}

pub async fn run(
    args: &HomeArgs,
    client: &CachedClient,
    format: OutputFormat,
    theme: ThemeMode,
) -> Result<()> {
    let active = match &args.category {
        Some(name) => validation::validate_category(name)?,
        None => DEFAULT_CATEGORY.to_string(),
    };

    let data = with_spinner("Loading today's quote...", load_home(client, &active)).await;

    let failures = section_failures(&data);
    if !format.is_human() {
        for message in &failures {
            eprintln!("{}", message);
        }
    }
    println!("{}", render_home(&data, format, theme)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotes_lib::CategoryCache;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn quote(id: i64, content: &str) -> serde_json::Value {
        json!({
            "id": id,
            "content": content,
            "source": "人民日报",
            "created_at": "2024-03-01T08:00:00Z"
        })
    }

    async fn mount_recent(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/history"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "quotes": [quote(3, "recent three"), quote(2, "recent two")],
                "pagination": {"page": 1, "limit": 3, "total": 2, "total_pages": 1}
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    async fn mount_category(server: &MockServer, name: &str, content: &str) {
        Mock::given(method("GET"))
            .and(path("/api/category"))
            .and(query_param("category", name))
            .and(query_param("limit", "6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "quotes": [quote(9, content)],
                "pagination": {"page": 1, "limit": 6, "total": 1, "total_pages": 1}
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn failed_today_still_renders_recent_and_tabs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/today"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        mount_recent(&server).await;
        mount_category(&server, "思想类", "thought preview").await;

        let client = CachedClient::new(&server.uri(), CategoryCache::new());
        let data = load_home(&client, "思想类").await;
        assert!(client.is_category_cached("思想类"));

        let out = render_home(&data, OutputFormat::Table, ThemeMode::Light).unwrap();
        assert!(out.starts_with(TODAY_FAILED), "{}", out);
        assert!(out.contains("recent three"));
        assert!(out.contains("[思想类]  生活类"));
        assert!(out.contains("thought preview"));
        assert_eq!(section_failures(&data), vec![TODAY_FAILED.to_string()]);
    }

    #[tokio::test]
    async fn failed_recent_is_reported_inline() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/today"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 42,
                "content": "奋斗本身就是一种幸福。",
                "source": "人民日报",
                "created_at": "2024-03-01T08:00:00Z",
                "is_today": true
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/history"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;
        mount_category(&server, "思想类", "thought preview").await;

        let client = CachedClient::new(&server.uri(), CategoryCache::new());
        let data = load_home(&client, "思想类").await;

        let out = render_home(&data, OutputFormat::Markdown, ThemeMode::Dark).unwrap();
        assert!(out.contains("奋斗本身就是一种幸福。"));
        assert!(out.contains(RECENT_FAILED), "{}", out);
        assert!(out.contains("thought preview"));

        let json = render_home(&data, OutputFormat::Json, ThemeMode::Dark).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(doc["recent"].is_null());
        assert_eq!(doc["today"]["id"], 42);
        assert_eq!(section_failures(&data), vec![RECENT_FAILED.to_string()]);
    }

    #[tokio::test]
    async fn other_tab_loads_default_preview_first() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/today"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        mount_recent(&server).await;
        mount_category(&server, "思想类", "thought preview").await;
        Mock::given(method("GET"))
            .and(path("/api/category"))
            .and(query_param("category", "生活类"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = CachedClient::new(&server.uri(), CategoryCache::new());
        let data = load_home(&client, "生活类").await;
        assert!(client.is_category_cached("思想类"));
        assert!(!client.is_category_cached("生活类"));

        let out = render_home(&data, OutputFormat::Table, ThemeMode::Light).unwrap();
        assert!(out.contains("思想类  [生活类]"));
        assert!(out.contains(&category_failed("生活类")));
        assert!(!out.contains("thought preview"));

        let failures = section_failures(&data);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[1], category_failed("生活类"));
    }
}
