// tests/region_filter.rs
//
// Two-level region filter and the map row limit.
mod common;

use pretty_assertions::assert_eq;
use slv_schools::{
    config::{consts::MAP_ROW_LIMIT, options::TableRows},
    data::Dataset,
    filter::{self, FilterSelection, SecondaryChoices},
    view::{self, ViewRequest},
};

#[test]
fn primary_defaults_to_first_in_sort_order() {
    let ds = common::sample();
    let sel = filter::resolve(&ds, &FilterSelection::default());
    assert_eq!(sel.primary, Some("Ahuachapán"));
    assert_eq!(sel.secondary, None);
}

#[test]
fn primary_only_returns_exact_rows_in_order() {
    let ds = common::sample();
    for p in ds.primary_regions() {
        let sel = filter::resolve(&ds, &FilterSelection::new(Some(p), None));
        let expected: Vec<usize> = ds
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.primary == p)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(filter::filter_rows(&ds, sel), expected, "primary={p}");
    }
}

#[test]
fn primary_is_superset_of_primary_and_secondary() {
    let ds = common::sample();
    for p in ds.primary_regions() {
        let wide = filter::filter_rows(&ds, filter::resolve(&ds, &FilterSelection::new(Some(p), None)));
        for s in ds.secondary_regions(p) {
            let sel = filter::resolve(&ds, &FilterSelection::new(Some(p), Some(s)));
            assert_eq!(sel.secondary, Some(s));
            let narrow = filter::filter_rows(&ds, sel);
            assert!(!narrow.is_empty());
            assert!(narrow.iter().all(|ix| wide.contains(ix)), "{p}/{s}");
            assert!(narrow.iter().all(|&ix| ds.records()[ix].secondary == s));
        }
    }
}

#[test]
fn secondary_choices_are_scoped_and_sorted() {
    let ds = common::sample();
    let sel = filter::resolve(&ds, &FilterSelection::new(Some("San Salvador"), None));
    let choices = filter::region_choices(&ds, sel);
    assert_eq!(choices.primary, vec!["Ahuachapán", "San Salvador"]);
    assert_eq!(
        choices.secondary,
        SecondaryChoices::Options(vec!["Apopa", "Mejicanos", "San Salvador"])
    );
}

#[test]
fn stale_selection_is_repaired() {
    let ds = common::sample();

    // Unknown primary → default
    let sel = filter::resolve(&ds, &FilterSelection::new(Some("Morazán"), Some("Apopa")));
    assert_eq!(sel.primary, Some("Ahuachapán"));
    assert_eq!(sel.secondary, None);

    // Secondary from another primary → dropped
    let sel = filter::resolve(&ds, &FilterSelection::new(Some("Ahuachapán"), Some("Apopa")));
    assert_eq!(sel.primary, Some("Ahuachapán"));
    assert_eq!(sel.secondary, None);

    // Empty string means no selection
    let sel = filter::resolve(&ds, &FilterSelection::new(Some("San Salvador"), Some("")));
    assert_eq!(sel.secondary, None);
}

#[test]
fn empty_dataset_disables_secondary() {
    let ds = Dataset::empty();
    let sel = filter::resolve(&ds, &FilterSelection::default());
    assert_eq!(sel.primary, None);

    let choices = filter::region_choices(&ds, sel);
    assert!(choices.primary.is_empty());
    assert_eq!(choices.secondary, SecondaryChoices::Disabled);
    assert!(filter::filter_rows(&ds, sel).is_empty());
}

#[test]
fn cap_keeps_leading_rows() {
    let capped = filter::cap_rows((0..25).collect(), 10);
    assert_eq!(capped.rows, (0..10).collect::<Vec<_>>());
    assert_eq!(capped.matched, 25);
    assert!(capped.is_truncated());

    let small = filter::cap_rows(vec![3, 4], 10);
    assert!(!small.is_truncated());
}

#[test]
fn fifteen_thousand_matches_are_capped_for_map_and_table() {
    let mut records = common::bulk("La Libertad", "Santa Tecla", 15_000);
    records.extend(common::bulk("Usulután", "Jiquilisco", 20));
    let ds = Dataset::from_records(records);

    let req = ViewRequest {
        selection: FilterSelection::new(Some("La Libertad"), None),
        page: 1,
        ..Default::default()
    };
    let v = view::render(&ds, &req);
    assert!(v.is_truncated());
    assert_eq!(v.region.matched, 15_000);
    assert_eq!(v.map_count(), MAP_ROW_LIMIT);
    assert_eq!(v.table_total, MAP_ROW_LIMIT);
    assert_eq!(v.matched_count(), MAP_ROW_LIMIT);
    // first 10,000 in dataset order
    assert_eq!(v.filtered_records().last().map(|r| r.code.as_str()), Some("9999"));
}

#[test]
fn all_matches_policy_uncaps_table_only() {
    let ds = Dataset::from_records(common::bulk("La Libertad", "Santa Tecla", 15_000));
    let req = ViewRequest {
        selection: FilterSelection::new(Some("La Libertad"), None),
        table_rows: TableRows::AllMatches,
        ..Default::default()
    };
    let v = view::render(&ds, &req);
    assert!(v.is_truncated());
    assert_eq!(v.map_count(), MAP_ROW_LIMIT);
    assert_eq!(v.table_total, 15_000);
    assert_eq!(v.matched_count(), 15_000);
}
