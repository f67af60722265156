use url::Url;

use super::{common::QueryCommon, Query};

#[derive(Default, Clone, Debug)]
pub struct HistoryQuery {
    pub common: QueryCommon,
}

impl Query for HistoryQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}
