//! Automation service: the list use-case.

use autolist_domain::error::AutolistError;
use autolist_domain::query::{AutomationQuery, ListPage};

use crate::ports::AutomationRepository;

/// Application service answering list queries over the automation collection.
pub struct AutomationService<R> {
    repo: R,
}

impl<R: AutomationRepository> AutomationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Load the current collection and run `query` over it.
    ///
    /// An empty page is a successful result, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AutolistError::DataAccess`] when the repository cannot
    /// produce the collection. No partial page is ever returned.
    #[tracing::instrument(
        skip(self, query),
        fields(
            page = query.pagination.page,
            limit = %query.pagination.size,
            sort_by = ?query.sort_by,
            order = %query.order,
            filters = query.filters.len(),
        )
    )]
    pub async fn list_automations(
        &self,
        query: &AutomationQuery,
    ) -> Result<ListPage, AutolistError> {
        let records = self.repo.load_all().await?;
        let loaded = records.len();
        let page = query.apply(records);
        tracing::debug!(
            loaded,
            total = page.total,
            returned = page.data.len(),
            "query applied"
        );
        Ok(page)
    }
}
