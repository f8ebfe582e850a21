//! Lookup resolver behavior: exact matching and fixed-arity comparison.

use edustat_engine::{compare_two, exact_match, unique_values};
use edustat_model::{Dataset, Row, Value, catalog};

fn entry(name: &str, fees: f64) -> Row {
    [
        (catalog::NAME, Value::from(name)),
        (catalog::FEES, Value::from(fees)),
    ]
    .into_iter()
    .collect()
}

fn fixture() -> Dataset {
    let mut dataset = Dataset::new(
        "institution_catalog",
        vec![catalog::NAME.to_string(), catalog::FEES.to_string()],
    );
    dataset.push_row(entry("IIT Delhi", 250000.0));
    dataset.push_row(entry("DTU", 190000.0));
    dataset.push_row(entry("iit delhi", 999999.0));
    dataset
}

#[test]
fn exact_match_is_case_insensitive_and_first_wins() {
    let dataset = fixture();
    let row = exact_match(&dataset, catalog::NAME, "IIT DELHI").unwrap();
    // Two rows fold to the same key; the earlier one in dataset order wins.
    assert_eq!(row.number(catalog::FEES), Some(250000.0));
}

#[test]
fn exact_match_rejects_substrings() {
    let dataset = fixture();
    assert!(exact_match(&dataset, catalog::NAME, "IIT").is_none());
}

#[test]
fn compare_two_always_returns_two_slots() {
    let dataset = fixture();

    let both = compare_two(&dataset, catalog::NAME, "dtu", "iit delhi");
    assert_eq!(both[0].text(catalog::NAME), Some("DTU"));
    assert_eq!(both[1].text(catalog::NAME), Some("IIT Delhi"));

    let one = compare_two(&dataset, catalog::NAME, "DTU", "Unknown College");
    assert_eq!(one[0].text(catalog::NAME), Some("DTU"));
    assert!(one[1].is_empty());

    let none = compare_two(&dataset, catalog::NAME, "Nowhere", "Unknown");
    assert!(none[0].is_empty());
    assert!(none[1].is_empty());
}

#[test]
fn compare_two_is_positionally_aligned() {
    let dataset = fixture();
    let swapped = compare_two(&dataset, catalog::NAME, "iit delhi", "dtu");
    assert_eq!(swapped[0].text(catalog::NAME), Some("IIT Delhi"));
    assert_eq!(swapped[1].text(catalog::NAME), Some("DTU"));
}

#[test]
fn empty_slot_serializes_as_empty_record() {
    let dataset = fixture();
    let slots = compare_two(&dataset, catalog::NAME, "DTU", "Unknown");
    let json = serde_json::to_string(&slots[1]).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn unique_values_preserve_first_occurrence_order() {
    let mut dataset = fixture();
    dataset.push_row(entry("DTU", 1.0));
    let values = unique_values(&dataset, catalog::NAME);
    // Case-sensitive distinctness: "iit delhi" differs from "IIT Delhi".
    assert_eq!(values, vec!["IIT Delhi", "DTU", "iit delhi"]);
}
