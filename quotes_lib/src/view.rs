//! State for a paginated quote list view (history, search, category).

use quotes_api::types::{PaginationInfo, QuotesListResponse};

use crate::client::{CachedClient, ListKind};
use crate::error::QuotesError;
use crate::generation::{RequestGenerations, RequestTicket};
use crate::pagination::dispatch_page_change;

/// The page a list view currently shows, and how it moves between pages.
///
/// Page requests go through [`dispatch_page_change`], so asking for the
/// current page or a page outside the result set never reaches the network.
/// Every fetch carries a [`RequestTicket`]; a response that arrives after a
/// newer request was issued is discarded.
pub struct ListView {
    kind: ListKind,
    limit: i64,
    current: Option<QuotesListResponse>,
    generations: RequestGenerations,
}

impl ListView {
    pub fn new(kind: ListKind, limit: i64) -> Self {
        Self {
            kind,
            limit,
            current: None,
            generations: RequestGenerations::new(),
        }
    }

    pub fn kind(&self) -> &ListKind {
        &self.kind
    }

    pub fn current(&self) -> Option<&QuotesListResponse> {
        self.current.as_ref()
    }

    pub fn pagination(&self) -> Option<&PaginationInfo> {
        self.current.as_ref().map(|resp| &resp.pagination)
    }

    /// Issues the ticket for a fetch that is about to start.
    pub fn begin_request(&self) -> RequestTicket {
        self.generations.begin()
    }

    /// Stores `resp` if `ticket` is still the newest request. Returns whether it was kept.
    pub fn apply(&mut self, ticket: RequestTicket, resp: QuotesListResponse) -> bool {
        match self.generations.accept(ticket, resp) {
            Some(resp) => {
                self.current = Some(resp);
                true
            }
            None => false,
        }
    }

    /// Fetches `page` unconditionally. Used for the first load of a view.
    pub async fn load(&mut self, client: &CachedClient, page: i64) -> Result<(), QuotesError> {
        let ticket = self.begin_request();
        let resp = client.fetch_quotes(&self.kind, page, self.limit).await?;
        self.apply(ticket, resp);
        Ok(())
    }

    /// Moves to `requested` if it is a valid, different page.
    ///
    /// Returns `Ok(false)` without fetching when the request is a no-op.
    /// On a failed fetch the previously shown page is kept.
    pub async fn go_to(&mut self, client: &CachedClient, requested: i64) -> Result<bool, QuotesError> {
        let Some(info) = self.pagination().copied() else {
            self.load(client, requested).await?;
            return Ok(true);
        };

        let mut target = None;
        dispatch_page_change(requested, &info, |page| target = Some(page));
        match target {
            Some(page) => {
                self.load(client, page).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn next(&mut self, client: &CachedClient) -> Result<bool, QuotesError> {
        let page = self.pagination().map(|p| p.page + 1).unwrap_or(1);
        self.go_to(client, page).await
    }

    pub async fn previous(&mut self, client: &CachedClient) -> Result<bool, QuotesError> {
        let page = self.pagination().map(|p| p.page - 1).unwrap_or(1);
        self.go_to(client, page).await
    }
}
