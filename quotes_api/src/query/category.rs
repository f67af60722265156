use url::Url;

use super::{common::QueryCommon, Query};

#[derive(Clone, Debug)]
pub struct CategoryQuery {
    pub common: QueryCommon,
    pub category: String,
}

impl CategoryQuery {
    pub fn new(category: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            category: category.to_string(),
        }
    }
}

impl Query for CategoryQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("category", self.category.as_str());
        self.common.add_to_url(&url)
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{CategoryQuery, Query};

    #[test]
    fn test_category_query() {
        let url = Url::parse("https://example.com/api/category").unwrap();

        insta::assert_snapshot!(CategoryQuery::new("思想类")
            .with_limit(6)
            .add_to_url(&url)
            .to_string());
    }
}
