mod meta;
pub use self::meta::{ApiResponse, HealthStatus, PaginationInfo, QuotesListResponse};

mod quote;
pub use self::quote::{Quote, QuoteID, TodayQuote};
