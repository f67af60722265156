//! Library layer for the daily quotes client: pagination windowing, cached
//! API access, list-view state, theme context, configuration and validation.
//!
//! Wraps the `quotes_api` crate with a per-category cache and the
//! latest-request-wins bookkeeping the views rely on.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod generation;
pub mod pagination;
pub mod theme;
pub mod validation;
pub mod view;

pub use quotes_api;
pub use quotes_api::types;
pub use quotes_api::{CategoryQuery, HistoryQuery, Query, SearchQuery};

pub use cache::CategoryCache;
pub use client::{CachedClient, ListKind};
pub use config::Config;
pub use error::QuotesError;
pub use generation::{RequestGenerations, RequestTicket};
pub use pagination::{accept_page_change, dispatch_page_change, page_markers, PageMarker};
pub use theme::{ThemeContext, ThemeMode};
pub use view::ListView;
