//! Per-field comparators.
//!
//! Each sortable field owns one comparator, looked up through
//! [`comparator`]. Comparators receive the requested [`SortOrder`] because
//! `creationTime` keeps unparsable dates at the end in both directions;
//! every other comparator just inverts its result for `desc`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::automation::{Automation, AutomationField};
use crate::id::AutomationId;
use crate::time::parse_epoch_millis;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Orient an ascending comparison result.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signature shared by every field comparator.
pub type Comparator = fn(&Automation, &Automation, SortOrder) -> Ordering;

/// Look up the comparator for `field`.
#[must_use]
pub fn comparator(field: AutomationField) -> Comparator {
    match field {
        AutomationField::Id => by_id,
        AutomationField::Name => by_name,
        AutomationField::Status => by_status,
        AutomationField::CreationTime => by_creation_time,
        AutomationField::Kind => by_kind,
    }
}

/// Stable in-place sort of `records` by `field`. Ties keep input order.
pub fn sort_automations(records: &mut [Automation], field: AutomationField, order: SortOrder) {
    let compare = comparator(field);
    records.sort_by(|a, b| compare(a, b, order));
}

/// Case-insensitive string comparison without allocating.
#[must_use]
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn by_id(a: &Automation, b: &Automation, order: SortOrder) -> Ordering {
    let ordering = match (&a.id, &b.id) {
        (AutomationId::Text(x), AutomationId::Text(y)) => cmp_ignore_case(x, y),
        (AutomationId::Text(_), _) => Ordering::Greater,
        (_, AutomationId::Text(_)) => Ordering::Less,
        (x, y) => x.cmp_numeric(y).unwrap_or(Ordering::Equal),
    };
    order.apply(ordering)
}

fn by_name(a: &Automation, b: &Automation, order: SortOrder) -> Ordering {
    order.apply(cmp_ignore_case(&a.name, &b.name))
}

fn by_kind(a: &Automation, b: &Automation, order: SortOrder) -> Ordering {
    order.apply(cmp_ignore_case(&a.kind, &b.kind))
}

fn by_status(a: &Automation, b: &Automation, order: SortOrder) -> Ordering {
    order.apply(a.status.rank().cmp(&b.status.rank()))
}

fn by_creation_time(a: &Automation, b: &Automation, order: SortOrder) -> Ordering {
    match (
        parse_epoch_millis(&a.creation_time),
        parse_epoch_millis(&b.creation_time),
    ) {
        (Some(x), Some(y)) => order.apply(x.cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::Status;

    fn named(id: i64, name: &str) -> Automation {
        Automation::builder().id(id).name(name).build()
    }

    fn created(id: i64, creation_time: &str) -> Automation {
        Automation::builder()
            .id(id)
            .creation_time(creation_time)
            .build()
    }

    fn with_status(id: i64, status: Status) -> Automation {
        Automation::builder().id(id).status(status).build()
    }

    fn ids(records: &[Automation]) -> Vec<String> {
        records.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn should_sort_status_by_lifecycle_rank_when_ascending() {
        let mut records = vec![
            with_status(1, Status::Deleted),
            with_status(2, Status::Active),
            with_status(3, Status::Inactive),
        ];
        sort_automations(&mut records, AutomationField::Status, SortOrder::Asc);
        let statuses: Vec<_> = records.iter().map(|r| r.status.as_str()).collect();
        assert_eq!(statuses, vec!["active", "inactive", "deleted"]);
    }

    #[test]
    fn should_reverse_status_rank_when_descending() {
        let mut records = vec![
            with_status(1, Status::Inactive),
            with_status(2, Status::Active),
            with_status(3, Status::Deleted),
        ];
        sort_automations(&mut records, AutomationField::Status, SortOrder::Desc);
        let statuses: Vec<_> = records.iter().map(|r| r.status.as_str()).collect();
        assert_eq!(statuses, vec!["deleted", "inactive", "active"]);
    }

    #[test]
    fn should_rank_unknown_status_after_deleted() {
        let mut records = vec![
            with_status(1, Status::Other("archived".to_string())),
            with_status(2, Status::Deleted),
        ];
        sort_automations(&mut records, AutomationField::Status, SortOrder::Asc);
        assert_eq!(ids(&records), vec!["2", "1"]);
    }

    #[test]
    fn should_sort_names_case_insensitively() {
        let mut records = vec![named(1, "c"), named(2, "b"), named(3, "a"), named(4, "B")];
        sort_automations(&mut records, AutomationField::Name, SortOrder::Asc);
        assert_eq!(ids(&records), vec!["3", "2", "4", "1"]);
    }

    #[test]
    fn should_keep_ties_in_input_order_in_both_directions() {
        let mut asc = vec![named(1, "b"), named(2, "B"), named(3, "a")];
        sort_automations(&mut asc, AutomationField::Name, SortOrder::Asc);
        assert_eq!(ids(&asc), vec!["3", "1", "2"]);

        let mut desc = vec![named(1, "b"), named(2, "B"), named(3, "a")];
        sort_automations(&mut desc, AutomationField::Name, SortOrder::Desc);
        assert_eq!(ids(&desc), vec!["1", "2", "3"]);
    }

    #[test]
    fn should_sort_creation_time_chronologically() {
        let mut records = vec![
            created(1, "2024-03-01T00:00:00Z"),
            created(2, "2023-12-31"),
            created(3, "2024-01-15T12:30:00+01:00"),
        ];
        sort_automations(&mut records, AutomationField::CreationTime, SortOrder::Asc);
        assert_eq!(ids(&records), vec!["2", "3", "1"]);

        let millis: Vec<i64> = records
            .iter()
            .filter_map(|r| parse_epoch_millis(&r.creation_time))
            .collect();
        assert!(millis.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn should_keep_unparsable_creation_time_last_in_both_directions() {
        let fixture = || {
            vec![
                created(1, "not a date"),
                created(2, "2024-01-01"),
                created(3, "2025-01-01"),
            ]
        };

        let mut asc = fixture();
        sort_automations(&mut asc, AutomationField::CreationTime, SortOrder::Asc);
        assert_eq!(ids(&asc), vec!["2", "3", "1"]);

        let mut desc = fixture();
        sort_automations(&mut desc, AutomationField::CreationTime, SortOrder::Desc);
        assert_eq!(ids(&desc), vec!["3", "2", "1"]);
    }

    #[test]
    fn should_order_numeric_ids_numerically_and_before_text_ids() {
        let mut records = vec![
            Automation::builder().id("b-7").build(),
            Automation::builder().id(10).build(),
            Automation::builder().id("A-9").build(),
            Automation::builder().id(2).build(),
        ];
        sort_automations(&mut records, AutomationField::Id, SortOrder::Asc);
        assert_eq!(ids(&records), vec!["2", "10", "A-9", "b-7"]);
    }

    #[test]
    fn should_order_fractional_and_huge_ids_among_integers() {
        let mut records = vec![
            Automation::builder().id(1e30).build(),
            Automation::builder().id("a").build(),
            Automation::builder().id(3).build(),
            Automation::builder().id(2.5).build(),
            Automation::builder().id(2).build(),
        ];
        sort_automations(&mut records, AutomationField::Id, SortOrder::Asc);
        let shapes: Vec<_> = records.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(shapes[..3], ["2", "2.5", "3"]);
        assert!(records[3].id.is_numeric());
        assert_eq!(records[4].id.to_string(), "a");

        sort_automations(&mut records, AutomationField::Id, SortOrder::Desc);
        assert_eq!(records[0].id.to_string(), "a");
        assert_eq!(records[1].id, AutomationId::from(1e30));
    }

    #[test]
    fn should_rank_unknown_status_first_when_descending() {
        let mut records = vec![
            with_status(1, Status::Active),
            with_status(2, Status::Deleted),
            with_status(3, Status::Other("archived".to_string())),
            with_status(4, Status::Inactive),
        ];
        sort_automations(&mut records, AutomationField::Status, SortOrder::Desc);
        assert_eq!(ids(&records), vec!["3", "2", "4", "1"]);
    }

    #[test]
    fn should_keep_unparsable_creation_times_in_input_order() {
        let fixture = || {
            vec![
                created(1, "someday"),
                created(2, "2024-01-01"),
                created(3, "never"),
                created(4, ""),
            ]
        };

        let mut asc = fixture();
        sort_automations(&mut asc, AutomationField::CreationTime, SortOrder::Asc);
        assert_eq!(ids(&asc), vec!["2", "1", "3", "4"]);

        let mut desc = fixture();
        sort_automations(&mut desc, AutomationField::CreationTime, SortOrder::Desc);
        assert_eq!(ids(&desc), vec!["2", "1", "3", "4"]);
    }

    #[test]
    fn should_sort_type_case_insensitively() {
        let mut records = vec![
            Automation::builder().id(1).kind("Webhook").build(),
            Automation::builder().id(2).kind("schedule").build(),
        ];
        sort_automations(&mut records, AutomationField::Kind, SortOrder::Asc);
        assert_eq!(ids(&records), vec!["2", "1"]);
    }

    #[test]
    fn should_flip_order() {
        assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.flipped(), SortOrder::Asc);
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }

    #[test]
    fn should_compare_ignoring_case() {
        assert_eq!(cmp_ignore_case("Alpha", "alpha"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("alpha", "Beta"), Ordering::Less);
    }
}
