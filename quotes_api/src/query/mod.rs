mod common;
pub use self::common::{Query, QueryCommon};
mod history;
pub use self::history::HistoryQuery;

mod search;
pub use self::search::SearchQuery;

mod category;
pub use self::category::CategoryQuery;
