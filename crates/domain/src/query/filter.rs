//! Exact-match field filters.

use std::collections::BTreeMap;

use crate::automation::Automation;

/// Field name (wire spelling) → required stringified value.
///
/// Kept ordered so encoding the filters back onto the wire is deterministic.
pub type Filters = BTreeMap<String, String>;

/// Whether `record` satisfies every filter.
///
/// Comparison is on the stringified field and is case-sensitive. A filter
/// on a field the record does not have never matches.
#[must_use]
pub fn filter_matches(record: &Automation, filters: &Filters) -> bool {
    filters.iter().all(|(field, expected)| {
        record
            .field_text(field)
            .is_some_and(|value| value.as_ref() == expected.as_str())
    })
}

/// Keep only the records that satisfy every filter, preserving order.
#[must_use]
pub fn apply_filters(mut records: Vec<Automation>, filters: &Filters) -> Vec<Automation> {
    if !filters.is_empty() {
        records.retain(|record| filter_matches(record, filters));
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::Status;

    fn fixture() -> Vec<Automation> {
        vec![
            Automation::builder().id(1).name("a").status(Status::Active).kind("schedule").build(),
            Automation::builder().id(2).name("b").status(Status::Inactive).kind("schedule").build(),
            Automation::builder().id(3).name("c").status(Status::Active).kind("webhook").build(),
            Automation::builder().id(4).name("d").status(Status::Inactive).kind("webhook").build(),
            Automation::builder().id(5).name("e").status(Status::Active).kind("schedule").build(),
        ]
    }

    fn filters(pairs: &[(&str, &str)]) -> Filters {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn should_keep_everything_when_no_filters() {
        assert_eq!(apply_filters(fixture(), &Filters::new()).len(), 5);
    }

    #[test]
    fn should_keep_only_matching_status() {
        let kept = apply_filters(fixture(), &filters(&[("status", "active")]));
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|r| r.status == Status::Active));
    }

    #[test]
    fn should_combine_filters_with_and() {
        let kept = apply_filters(
            fixture(),
            &filters(&[("status", "active"), ("type", "schedule")]),
        );
        let ids: Vec<_> = kept.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn should_match_case_sensitively() {
        assert!(apply_filters(fixture(), &filters(&[("status", "Active")])).is_empty());
    }

    #[test]
    fn should_not_match_partially() {
        assert!(apply_filters(fixture(), &filters(&[("type", "sched")])).is_empty());
    }

    #[test]
    fn should_match_numeric_id_by_its_decimal_text() {
        let kept = apply_filters(fixture(), &filters(&[("id", "4")]));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "d");
    }

    #[test]
    fn should_drop_every_record_when_filter_field_is_unknown() {
        assert!(apply_filters(fixture(), &filters(&[("owner", "alice")])).is_empty());
    }

    #[test]
    fn should_be_idempotent() {
        let f = filters(&[("type", "webhook")]);
        let once = apply_filters(fixture(), &f);
        let twice = apply_filters(once.clone(), &f);
        assert_eq!(once, twice);
    }
}
