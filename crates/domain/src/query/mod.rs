//! Query processor: filter, sort, and paginate a collection of automations.
//!
//! A query runs in three fixed steps over a freshly loaded collection:
//! 1. keep records matching every [`Filters`] entry,
//! 2. if a sort field is set, stable-sort with that field's comparator,
//! 3. slice out the requested page.
//!
//! `total` in the resulting [`ListPage`] is the filtered count before slicing.

mod filter;
mod page;
pub mod params;
mod sort;

pub use filter::{Filters, apply_filters, filter_matches};
pub use page::{ALL_SENTINEL, DEFAULT_PAGE_SIZE, PageSize, Pagination};
pub use sort::{Comparator, SortOrder, cmp_ignore_case, comparator, sort_automations};

use serde::{Deserialize, Serialize};

use crate::automation::{Automation, AutomationField};
use crate::error::InvalidParameter;

/// A fully interpreted list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutomationQuery {
    pub pagination: Pagination,
    pub sort_by: Option<AutomationField>,
    pub order: SortOrder,
    pub filters: Filters,
}

/// Result of leniently decoding wire parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedQuery {
    pub query: AutomationQuery,
    /// Parameters that were ignored in favour of their default.
    pub rejected: Vec<InvalidParameter>,
}

/// One page of results, as served by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage {
    /// Number of records matching the filters, across all pages.
    pub total: usize,
    /// Effective 1-based page index.
    pub page: i64,
    /// Effective page size.
    pub limit: PageSize,
    pub data: Vec<Automation>,
}

impl AutomationQuery {
    /// Decode wire key/value pairs, falling back to defaults on bad input.
    ///
    /// Later occurrences of a key win. An empty `sortBy` means "unsorted"
    /// and is not reported as rejected.
    pub fn from_pairs<I, K, V>(pairs: I) -> DecodedQuery
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        let mut rejected = Vec::new();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                params::PAGE_KEY => match params::parse_page(value) {
                    Ok(page) => query.pagination.page = page,
                    Err(err) => {
                        query.pagination.page = 1;
                        rejected.push(err);
                    }
                },
                params::LIMIT_KEY => match params::parse_limit(value) {
                    Ok(size) => query.pagination.size = size,
                    Err(err) => {
                        query.pagination.size = PageSize::default();
                        rejected.push(err);
                    }
                },
                params::SORT_BY_KEY if value.is_empty() => query.sort_by = None,
                params::SORT_BY_KEY => match params::parse_sort_field(value) {
                    Ok(field) => query.sort_by = Some(field),
                    Err(err) => {
                        query.sort_by = None;
                        rejected.push(err);
                    }
                },
                params::ORDER_KEY => match params::parse_order(value) {
                    Ok(order) => query.order = order,
                    Err(err) => {
                        query.order = SortOrder::Asc;
                        rejected.push(err);
                    }
                },
                field => {
                    query.filters.insert(field.to_string(), value.to_string());
                }
            }
        }

        DecodedQuery { query, rejected }
    }

    /// Encode as wire key/value pairs.
    ///
    /// Order is fixed: `page`, `limit`, `sortBy` (only when set), `order`,
    /// then filters by key.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(4 + self.filters.len());
        pairs.push((params::PAGE_KEY.to_string(), self.pagination.page.to_string()));
        pairs.push((params::LIMIT_KEY.to_string(), self.pagination.size.to_string()));
        if let Some(field) = self.sort_by {
            pairs.push((params::SORT_BY_KEY.to_string(), field.as_str().to_string()));
        }
        pairs.push((params::ORDER_KEY.to_string(), self.order.as_str().to_string()));
        pairs.extend(
            self.filters
                .iter()
                .filter(|(key, _)| !params::is_reserved(key))
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        pairs
    }

    /// Run the query over `records`.
    #[must_use]
    pub fn apply(&self, records: Vec<Automation>) -> ListPage {
        let mut matching = apply_filters(records, &self.filters);
        if let Some(field) = self.sort_by {
            sort_automations(&mut matching, field, self.order);
        }
        let total = matching.len();
        ListPage {
            total,
            page: self.pagination.page,
            limit: self.pagination.size,
            data: self.pagination.slice(matching),
        }
    }
}
