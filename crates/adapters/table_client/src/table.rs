//! Table controller: current state, current rows, and response ordering.
//!
//! Requests are not cancelled when the user keeps clicking, so responses can
//! arrive out of order. Each request carries the query it was built from and
//! a response is only applied while that query still describes the current
//! state; anything else is stale and dropped.

use autolist_domain::automation::{Automation, AutomationField};
use autolist_domain::query::{AutomationQuery, ListPage, PageSize};

use crate::codec;
use crate::error::ClientError;
use crate::gateway::AutomationsGateway;
use crate::preferences::{PreferenceStore, load_sort, save_sort};
use crate::state::TableState;

/// Rows currently displayed, plus the filtered total across all pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub total: usize,
    pub rows: Vec<Automation>,
}

/// A request issued for a given table state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    query: AutomationQuery,
}

impl PendingRequest {
    /// Wire query to send.
    #[must_use]
    pub fn query(&self) -> &AutomationQuery {
        &self.query
    }
}

/// Headless automations table.
pub struct AutomationTable<P> {
    state: TableState,
    data: TableData,
    preferences: P,
}

impl<P: PreferenceStore> AutomationTable<P> {
    /// Create a table, restoring the remembered sort preference.
    pub fn new(preferences: P) -> Self {
        let (sort_by, order) = load_sort(&preferences);
        Self {
            state: TableState::with_sort(sort_by, order),
            data: TableData::default(),
            preferences,
        }
    }

    #[must_use]
    pub fn state(&self) -> &TableState {
        &self.state
    }

    #[must_use]
    pub fn data(&self) -> &TableData {
        &self.data
    }

    /// Number of pages for the current total and page size.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.state.page_size().page_count(self.data.total)
    }

    /// Sort header click. The resulting preference is persisted; a failed
    /// write is logged and otherwise ignored.
    pub fn click_header(&mut self, field: AutomationField) {
        self.state = self.state.toggle_sort(field);
        if let Err(err) = save_sort(&self.preferences, field, self.state.order()) {
            tracing::warn!(error = %err, "failed to persist sort preference");
        }
    }

    /// Pagination control: jump to a 0-based page.
    pub fn go_to_page(&mut self, page_index: usize) {
        self.state = self.state.go_to_page(page_index);
    }

    /// Page-size selector. Returns to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.state = self.state.with_page_size(page_size);
    }

    /// Require `field` to equal `value`. Returns to the first page.
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.state = self.state.with_filter(field, value);
    }

    /// Remove the filter on `field`. Returns to the first page.
    pub fn clear_filter(&mut self, field: &str) {
        self.state = self.state.without_filter(field);
    }

    /// Build the request for the current state.
    #[must_use]
    pub fn request(&self) -> PendingRequest {
        PendingRequest {
            query: codec::encode(&self.state),
        }
    }

    /// Apply `response` if `request` still matches the current state.
    ///
    /// Returns whether the response was applied. Applied responses replace
    /// the displayed rows and total wholesale.
    pub fn apply(&mut self, request: &PendingRequest, response: ListPage) -> bool {
        if request.query != codec::encode(&self.state) {
            tracing::debug!(
                requested_page = request.query.pagination.page,
                "discarding stale response"
            );
            return false;
        }
        self.data = codec::decode(response);
        true
    }

    /// Fetch and apply the page for the current state.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the gateway fails; displayed data is left
    /// untouched in that case.
    pub async fn refresh<G: AutomationsGateway>(
        &mut self,
        gateway: &G,
    ) -> Result<bool, ClientError> {
        let request = self.request();
        let response = gateway.fetch(request.query()).await?;
        Ok(self.apply(&request, response))
    }
}
