//! Table filter tests.

mod common;

use common::{int, raw_table, text};
use realty_insights::queries::distinct_areas;
use realty_insights::{filter_by_areas, normalize};

#[test]
fn filter_matches_case_insensitively() {
    let ds = common::sample_dataset();
    let out = filter_by_areas(&ds, &["AUNDH"]);
    assert_eq!(out.len(), 3);
    assert!(out
        .records()
        .iter()
        .all(|r| r.area.as_deref().unwrap().eq_ignore_ascii_case("aundh")));
}

#[test]
fn filter_trims_requested_names() {
    let ds = common::sample_dataset();
    assert_eq!(filter_by_areas(&ds, &["  wakad "]).len(), 2);
}

#[test]
fn filter_keeps_row_order_across_areas() {
    let ds = common::sample_dataset();
    let out = filter_by_areas(&ds, &["Akurdi", "Wakad"]);
    let areas: Vec<_> = out.records().iter().map(|r| r.area.clone().unwrap()).collect();
    assert_eq!(areas, vec!["Wakad", "Wakad", "Akurdi"]);
}

#[test]
fn filter_keeps_schema() {
    let ds = common::sample_dataset();
    let out = filter_by_areas(&ds, &["Nowhere"]);
    assert!(out.is_empty());
    assert_eq!(out.columns(), ds.columns());
}

#[test]
fn unknown_areas_contribute_nothing() {
    let ds = common::sample_dataset();
    assert_eq!(filter_by_areas(&ds, &["Wakad", "Nowhere"]).len(), 2);
}

#[test]
fn empty_request_matches_nothing() {
    let ds = common::sample_dataset();
    let none: [&str; 0] = [];
    assert!(filter_by_areas(&ds, &none).is_empty());
    assert!(filter_by_areas(&ds, &["", "  "]).is_empty());
}

#[test]
fn dataset_without_area_column_yields_empty() {
    let ds = normalize(raw_table(
        &["year", "price"],
        vec![vec![int(2020), int(100)]],
    ));
    assert!(filter_by_areas(&ds, &["Wakad"]).is_empty());
    assert!(filter_by_areas(&ds, &["2020"]).is_empty());
}

#[test]
fn distinct_areas_are_first_seen_and_case_folded() {
    let ds = common::sample_dataset();
    assert_eq!(distinct_areas(&ds), vec!["Wakad", "Aundh", "Akurdi"]);

    let ds = normalize(raw_table(&["area"], vec![vec![text("x")], vec![text("X")]]));
    assert_eq!(distinct_areas(&ds), vec!["x"]);
}
