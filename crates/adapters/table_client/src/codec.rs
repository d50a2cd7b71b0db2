//! Query parameter codec: table state ↔ wire parameters.
//!
//! The UI counts pages from 0, the wire counts from 1. This module is the
//! only place that knows about the difference.

use autolist_domain::query::{AutomationQuery, ListPage, Pagination};

use crate::state::TableState;
use crate::table::TableData;

/// Wire page index for a 0-based UI page index.
#[must_use]
pub fn wire_page(page_index: usize) -> i64 {
    i64::try_from(page_index)
        .ok()
        .and_then(|index| index.checked_add(1))
        .unwrap_or(i64::MAX)
}

/// 0-based UI page index for a wire page. Pages before the first map to 0.
#[must_use]
pub fn page_index(wire_page: i64) -> usize {
    usize::try_from(wire_page.saturating_sub(1)).unwrap_or(0)
}

/// Encode table state as a list query.
#[must_use]
pub fn encode(state: &TableState) -> AutomationQuery {
    AutomationQuery {
        pagination: Pagination::new(wire_page(state.page_index()), state.page_size()),
        sort_by: state.sort_by(),
        order: state.order(),
        filters: state.filters().clone(),
    }
}

/// Encode table state straight to wire key/value pairs.
#[must_use]
pub fn encode_pairs(state: &TableState) -> Vec<(String, String)> {
    encode(state).to_pairs()
}

/// Rebuild table state from a list query, e.g. one restored from a URL.
#[must_use]
pub fn decode_state(query: &AutomationQuery) -> TableState {
    let mut state = TableState::with_sort(query.sort_by, query.order)
        .with_page_size(query.pagination.size);
    for (field, value) in &query.filters {
        state = state.with_filter(field.as_str(), value.as_str());
    }
    state.go_to_page(page_index(query.pagination.page))
}

/// Decode a server page into table data. Replaces, never merges.
#[must_use]
pub fn decode(page: ListPage) -> TableData {
    TableData {
        total: page.total,
        rows: page.data,
    }
}
