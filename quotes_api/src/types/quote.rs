use serde::{Deserialize, Serialize};

pub type QuoteID = i64;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Quote {
    pub id: QuoteID,
    pub content: String,
    /// English translation, when the backend has one.
    #[serde(default)]
    pub content_en: Option<String>,
    pub source: String,
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TodayQuote {
    #[serde(flatten)]
    pub quote: Quote,
    #[serde(default)]
    pub is_today: bool,
}
