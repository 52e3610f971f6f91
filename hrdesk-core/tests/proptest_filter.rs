use std::sync::Arc;

use chrono::NaiveDate;
use hrdesk_core::{
    filter, Employee, EmployeeField, EmployeeStatus, ListFilterView, Record, ViewMode,
};
use proptest::prelude::*;

// ASCII keeps lower-casing length-preserving; see DESIGN.md on unicode.
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,12}"
}

fn arb_employee() -> impl Strategy<Value = Employee> {
    (
        arb_text(),
        arb_text(),
        arb_text(),
        prop::option::of(arb_text()),
    )
        .prop_map(|(name, department, designation, manager)| Employee {
            id: String::new(),
            name,
            email: "someone@company.com".into(),
            phone: String::new(),
            department,
            designation,
            status: EmployeeStatus::Active,
            join_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            manager,
            location: "Remote".into(),
        })
}

/// Employees with unique ids
fn arb_records() -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(arb_employee(), 0..20).prop_map(|mut records| {
        for (i, record) in records.iter_mut().enumerate() {
            record.id = format!("EMP{i:03}");
        }
        records
    })
}

fn arb_fields() -> impl Strategy<Value = Vec<EmployeeField>> {
    prop::sample::subsequence(Employee::all_fields().to_vec(), 0..=4)
}

proptest! {
    /// Property: an empty query returns the input unchanged
    #[test]
    fn prop_empty_query_is_identity(
        records in arb_records(),
        fields in arb_fields(),
    ) {
        prop_assert_eq!(filter(&records, "", &fields), records);
    }

    /// Property: extending the query only ever narrows the result
    #[test]
    fn prop_longer_query_narrows(
        records in arb_records(),
        fields in arb_fields(),
        q1 in "[a-zA-Z ]{0,4}",
        suffix in "[a-zA-Z ]{1,4}",
    ) {
        let q2 = format!("{q1}{suffix}");
        let wide = filter(&records, &q1, &fields);
        let narrow = filter(&records, &q2, &fields);

        prop_assert!(narrow.len() <= wide.len());
        for record in &narrow {
            prop_assert!(wide.contains(record));
        }
    }

    /// Property: filtering the filtered output changes nothing
    #[test]
    fn prop_filter_is_idempotent(
        records in arb_records(),
        fields in arb_fields(),
        query in "[a-zA-Z ]{0,4}",
    ) {
        let once = filter(&records, &query, &fields);
        let twice = filter(&once, &query, &fields);
        prop_assert_eq!(once, twice);
    }

    /// Property: results keep source order
    #[test]
    fn prop_filter_preserves_order(
        records in arb_records(),
        query in "[a-z]{0,2}",
    ) {
        let hits = filter(&records, &query, Employee::default_search_fields());
        let positions: Vec<usize> = hits
            .iter()
            .map(|h| records.iter().position(|r| r.id == h.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: toggling the view mode never touches the visible set
    #[test]
    fn prop_view_toggle_keeps_membership(
        records in arb_records(),
        query in "[a-zA-Z ]{0,3}",
        toggles in 1usize..5,
    ) {
        let mut view = ListFilterView::new(Arc::from(records));
        view.set_query(query);
        let before = view.visible().to_vec();

        for _ in 0..toggles {
            view.toggle_view_mode();
            prop_assert_eq!(view.visible(), before.as_slice());
        }
        let expected = if toggles % 2 == 1 { ViewMode::Table } else { ViewMode::Grid };
        prop_assert_eq!(view.view_mode(), expected);
    }
}
