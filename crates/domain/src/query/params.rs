//! Wire grammar of the list query string.
//!
//! `page`, `limit`, `sortBy`, and `order` are reserved; every other key is an
//! exact-match filter. The strict parsers here report what they reject;
//! [`AutomationQuery::from_pairs`](super::AutomationQuery::from_pairs) turns
//! those rejections into defaults.

use std::num::IntErrorKind;

use crate::automation::AutomationField;
use crate::error::InvalidParameter;

use super::page::{ALL_SENTINEL, PageSize};
use super::sort::SortOrder;

pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";
pub const SORT_BY_KEY: &str = "sortBy";
pub const ORDER_KEY: &str = "order";

/// Whether `key` is one of the reserved (non-filter) parameters.
#[must_use]
pub fn is_reserved(key: &str) -> bool {
    matches!(key, PAGE_KEY | LIMIT_KEY | SORT_BY_KEY | ORDER_KEY)
}

/// Parse a 1-based page index. Zero and negative values are accepted.
///
/// Integers beyond the `i64` range saturate, so they still select an empty
/// page instead of falling back to the first one.
///
/// # Errors
///
/// Returns [`InvalidParameter::Page`] when `raw` is not an integer.
pub fn parse_page(raw: &str) -> Result<i64, InvalidParameter> {
    match raw.trim().parse::<i64>() {
        Ok(page) => Ok(page),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(InvalidParameter::Page(raw.to_string())),
        },
    }
}

/// Parse a page size: a positive integer or `all`.
///
/// # Errors
///
/// Returns [`InvalidParameter::Limit`] for anything else, zero included.
pub fn parse_limit(raw: &str) -> Result<PageSize, InvalidParameter> {
    let trimmed = raw.trim();
    if trimmed == ALL_SENTINEL {
        return Ok(PageSize::All);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(PageSize::limited)
        .ok_or_else(|| InvalidParameter::Limit(raw.to_string()))
}

/// Parse a sort field name.
///
/// # Errors
///
/// Returns [`InvalidParameter::SortField`] for names outside the fixed set.
pub fn parse_sort_field(raw: &str) -> Result<AutomationField, InvalidParameter> {
    raw.parse()
}

/// Parse a sort direction.
///
/// # Errors
///
/// Returns [`InvalidParameter::Order`] for anything but `asc` or `desc`.
pub fn parse_order(raw: &str) -> Result<SortOrder, InvalidParameter> {
    match raw {
        "asc" => Ok(SortOrder::Asc),
        "desc" => Ok(SortOrder::Desc),
        other => Err(InvalidParameter::Order(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_page_including_non_positive() {
        assert_eq!(parse_page("3"), Ok(3));
        assert_eq!(parse_page(" 2 "), Ok(2));
        assert_eq!(parse_page("0"), Ok(0));
        assert_eq!(parse_page("-1"), Ok(-1));
    }

    #[test]
    fn should_saturate_page_outside_integer_range() {
        assert_eq!(parse_page("-99999999999999999999"), Ok(i64::MIN));
        assert_eq!(parse_page("99999999999999999999"), Ok(i64::MAX));
    }

    #[test]
    fn should_reject_non_integer_page() {
        assert_eq!(parse_page("two"), Err(InvalidParameter::Page("two".into())));
        assert!(parse_page("1.5").is_err());
        assert!(parse_page("").is_err());
    }

    #[test]
    fn should_parse_limit_and_sentinel() {
        assert_eq!(parse_limit("20"), Ok(PageSize::limited(20).unwrap()));
        assert_eq!(parse_limit("all"), Ok(PageSize::All));
    }

    #[test]
    fn should_reject_zero_negative_or_garbage_limit() {
        assert!(parse_limit("0").is_err());
        assert!(parse_limit("-5").is_err());
        assert!(parse_limit("ten").is_err());
        assert!(parse_limit("ALL").is_err());
    }

    #[test]
    fn should_parse_order_strictly() {
        assert_eq!(parse_order("asc"), Ok(SortOrder::Asc));
        assert_eq!(parse_order("desc"), Ok(SortOrder::Desc));
        assert!(parse_order("DESC").is_err());
    }

    #[test]
    fn should_recognize_reserved_keys() {
        assert!(is_reserved("page"));
        assert!(is_reserved("sortBy"));
        assert!(!is_reserved("status"));
        assert!(!is_reserved("sortby"));
    }
}
