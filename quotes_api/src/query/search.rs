use url::Url;

use super::{common::QueryCommon, Query};

#[derive(Clone, Debug)]
pub struct SearchQuery {
    pub common: QueryCommon,
    pub q: String,
}

impl SearchQuery {
    pub fn new(q: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            q: q.to_string(),
        }
    }
}

impl Query for SearchQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("q", self.q.as_str());
        self.common.add_to_url(&url)
    }
}
