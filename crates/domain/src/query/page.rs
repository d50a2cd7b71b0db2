//! Page sizes and page slicing.

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Number of rows per page when the request does not say otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Wire sentinel for [`PageSize::All`].
pub const ALL_SENTINEL: &str = "all";

/// Rows per page: a positive count, or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PageSizeRepr", into = "PageSizeRepr")]
pub enum PageSize {
    Limited(NonZeroUsize),
    All,
}

impl PageSize {
    /// A bounded page size, or `None` for zero.
    #[must_use]
    pub fn limited(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self::Limited)
    }

    /// Row count, `None` when unbounded.
    #[must_use]
    pub fn get(self) -> Option<usize> {
        match self {
            Self::Limited(size) => Some(size.get()),
            Self::All => None,
        }
    }

    /// Number of pages needed to show `total` rows.
    #[must_use]
    pub fn page_count(self, total: usize) -> usize {
        match self {
            Self::Limited(size) => total.div_ceil(size.get()),
            Self::All => usize::from(total > 0),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::Limited(DEFAULT_PAGE_SIZE)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(size) => size.fmt(f),
            Self::All => f.write_str(ALL_SENTINEL),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PageSizeRepr {
    Count(NonZeroUsize),
    Sentinel(String),
}

impl TryFrom<PageSizeRepr> for PageSize {
    type Error = String;

    fn try_from(value: PageSizeRepr) -> Result<Self, Self::Error> {
        match value {
            PageSizeRepr::Count(size) => Ok(Self::Limited(size)),
            PageSizeRepr::Sentinel(text) if text == ALL_SENTINEL => Ok(Self::All),
            PageSizeRepr::Sentinel(text) => Err(format!("invalid page size {text:?}")),
        }
    }
}

impl From<PageSize> for PageSizeRepr {
    fn from(value: PageSize) -> Self {
        match value {
            PageSize::Limited(size) => Self::Count(size),
            PageSize::All => Self::Sentinel(ALL_SENTINEL.to_string()),
        }
    }
}

/// A 1-based page index paired with a page size.
///
/// The page index is signed because it comes straight off the wire:
/// `page <= 0` is valid input and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub page: i64,
    pub size: PageSize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            size: PageSize::default(),
        }
    }
}

impl Pagination {
    #[must_use]
    pub fn new(page: i64, size: PageSize) -> Self {
        Self { page, size }
    }

    /// Index range selected out of a sequence of `len` items.
    ///
    /// `start = (page - 1) * size`, `end = start + size`, both clamped to
    /// `len`. Empty when `page <= 0` or the offset does not fit in `usize`.
    #[must_use]
    pub fn range(&self, len: usize) -> Range<usize> {
        let Some(start) = self.offset() else {
            return len..len;
        };
        let start = start.min(len);
        let end = match self.size {
            PageSize::Limited(size) => start.saturating_add(size.get()).min(len),
            PageSize::All => len,
        };
        start..end
    }

    /// Keep only the rows of this page.
    #[must_use]
    pub fn slice<T>(&self, mut items: Vec<T>) -> Vec<T> {
        let range = self.range(items.len());
        items.truncate(range.end);
        items.drain(..range.start);
        items
    }

    fn offset(&self) -> Option<usize> {
        if self.page <= 0 {
            return None;
        }
        let skipped = usize::try_from(self.page - 1).ok()?;
        match self.size {
            PageSize::Limited(size) => skipped.checked_mul(size.get()),
            // An unbounded first page holds everything; later pages start past the end.
            PageSize::All => (skipped == 0).then_some(0),
        }
    }
}
