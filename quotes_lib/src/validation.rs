use crate::error::QuotesError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_LIMIT: i64 = 100;
pub const MAX_SOURCE_LENGTH: usize = 32;

/// Category tabs shown on the home view, in display order.
pub const CATEGORY_TABS: &[&str] = &["思想类", "生活类", "经典文化", "海外主流", "语录精选"];

/// Category preloaded when the home view opens.
pub const DEFAULT_CATEGORY: &str = "思想类";

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, QuotesError> {
    if input.len() > max_len {
        return Err(QuotesError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(QuotesError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search query: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, QuotesError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<i64, QuotesError> {
    if page < 1 {
        return Err(QuotesError::InvalidInput("page must be >= 1".to_string()));
    }
    Ok(page)
}

/// Validate the number of quotes per page (must be 1..=100).
pub fn validate_limit(limit: i64) -> Result<i64, QuotesError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(QuotesError::InvalidInput(format!(
            "limit must be between 1 and {}",
            MAX_LIMIT
        )));
    }
    Ok(limit)
}

/// Validate a category name against the known tabs.
///
/// Unknown names are rejected with the closest known tab as a suggestion.
pub fn validate_category(input: &str) -> Result<String, QuotesError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QuotesError::InvalidInput(
            "category name is empty".to_string(),
        ));
    }
    if let Some(tab) = CATEGORY_TABS.iter().find(|tab| **tab == trimmed) {
        return Ok(tab.to_string());
    }

    let suggestion = CATEGORY_TABS
        .iter()
        .map(|tab| (tab, strsim::jaro_winkler(trimmed, tab)))
        .filter(|(_, score)| *score >= 0.6)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(tab, _)| format!(" Did you mean '{}'?", tab))
        .unwrap_or_default();
    Err(QuotesError::InvalidInput(format!(
        "unknown category '{}'.{} Valid categories: {}",
        trimmed,
        suggestion,
        CATEGORY_TABS.join(", ")
    )))
}

/// Validate a crawl source identifier: lowercase ASCII letters, digits, `-` and `_`.
pub fn validate_crawl_source(input: &str) -> Result<String, QuotesError> {
    let trimmed = input.trim().to_lowercase();
    if trimmed.is_empty() || trimmed.len() > MAX_SOURCE_LENGTH {
        return Err(QuotesError::InvalidInput(format!(
            "crawl source must be 1 to {} characters",
            MAX_SOURCE_LENGTH
        )));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(QuotesError::InvalidInput(format!(
            "invalid crawl source '{}': use letters, digits, '-' or '_'",
            input.trim()
        )));
    }
    Ok(trimmed)
}
