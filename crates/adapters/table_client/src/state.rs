//! Immutable table state and its transitions.

use autolist_domain::automation::AutomationField;
use autolist_domain::query::{Filters, PageSize, SortOrder};

/// Page sizes offered by the page-size selector, in display order.
pub const PAGE_SIZE_OPTIONS: [PageSize; 5] = [
    PageSize::Limited(std::num::NonZeroUsize::new(5).unwrap()),
    PageSize::Limited(std::num::NonZeroUsize::new(10).unwrap()),
    PageSize::Limited(std::num::NonZeroUsize::new(20).unwrap()),
    PageSize::Limited(std::num::NonZeroUsize::new(50).unwrap()),
    PageSize::All,
];

/// Everything the table needs to describe what it is showing.
///
/// Values are never mutated in place: each transition returns a new state.
/// The page index is 0-based; [`codec`](crate::codec) owns the translation
/// to the 1-based wire page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    page_index: usize,
    page_size: PageSize,
    sort_by: Option<AutomationField>,
    order: SortOrder,
    filters: Filters,
}

impl TableState {
    /// Initial state with a remembered sort preference.
    #[must_use]
    pub fn with_sort(sort_by: Option<AutomationField>, order: SortOrder) -> Self {
        Self {
            sort_by,
            order,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub fn sort_by(&self) -> Option<AutomationField> {
        self.sort_by
    }

    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    #[must_use]
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Direction arrow to draw on a column header, if that column is sorted.
    #[must_use]
    pub fn sort_indicator(&self, field: AutomationField) -> Option<SortOrder> {
        (self.sort_by == Some(field)).then_some(self.order)
    }

    /// Sort header click: flip the direction on the active column, otherwise
    /// switch to `field` ascending.
    #[must_use]
    pub fn toggle_sort(&self, field: AutomationField) -> Self {
        let (sort_by, order) = if self.sort_by == Some(field) {
            (self.sort_by, self.order.flipped())
        } else {
            (Some(field), SortOrder::Asc)
        };
        Self {
            sort_by,
            order,
            ..self.clone()
        }
    }

    /// Jump to a 0-based page.
    #[must_use]
    pub fn go_to_page(&self, page_index: usize) -> Self {
        Self {
            page_index,
            ..self.clone()
        }
    }

    /// Change the page size and return to the first page.
    #[must_use]
    pub fn with_page_size(&self, page_size: PageSize) -> Self {
        Self {
            page_index: 0,
            page_size,
            ..self.clone()
        }
    }

    /// Require `field` to equal `value`, returning to the first page.
    #[must_use]
    pub fn with_filter(&self, field: impl Into<String>, value: impl Into<String>) -> Self {
        let mut filters = self.filters.clone();
        filters.insert(field.into(), value.into());
        Self {
            page_index: 0,
            filters,
            ..self.clone()
        }
    }

    /// Drop the filter on `field`, returning to the first page.
    #[must_use]
    pub fn without_filter(&self, field: &str) -> Self {
        let mut filters = self.filters.clone();
        filters.remove(field);
        Self {
            page_index: 0,
            filters,
            ..self.clone()
        }
    }
}
