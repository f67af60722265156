use serde::{Deserialize, Serialize};

use super::Quote;

/// One page of a larger result set, as reported by the API.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationInfo {
    /// 1-based indices of the first and last item shown on this page.
    ///
    /// Values come straight from the server, so the arithmetic saturates.
    /// A page past the end yields an empty range `(total, total)` rather than
    /// an inverted one.
    pub fn item_range(&self) -> (i64, i64) {
        let last = self.page.saturating_mul(self.limit).min(self.total).max(0);
        let first = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .saturating_add(1)
            .min(last);
        (first, last)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct QuotesListResponse {
    pub quotes: Vec<Quote>,
    pub pagination: PaginationInfo,
    /// Echoed back by the search endpoint only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Envelope used by the administrative endpoints (stats, crawl).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}
