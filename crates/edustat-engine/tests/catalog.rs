//! Filter and aggregation behavior over the institution catalog.

use edustat_engine::{CatalogFilter, GroupMean, find, mean_by_group};
use edustat_model::{Dataset, Row, Value, catalog};

fn college(name: &str, state: &str, stream: &str, fees: f64, rating: f64) -> Row {
    [
        (catalog::NAME, Value::from(name)),
        (catalog::STATE, Value::from(state)),
        (catalog::STREAM, Value::from(stream)),
        (catalog::FEES, Value::from(fees)),
        (catalog::STUDENT_RATING, Value::from(rating)),
        (catalog::PLACEMENT_RATE, Value::from(90.0)),
        (catalog::INDUSTRY_TIEUPS, Value::from("Yes")),
        (catalog::LOCATION, Value::from("Campus Road")),
    ]
    .into_iter()
    .collect()
}

fn fixture() -> Dataset {
    let mut dataset = Dataset::new(
        "institution_catalog",
        vec![
            catalog::NAME.to_string(),
            catalog::STATE.to_string(),
            catalog::STREAM.to_string(),
            catalog::FEES.to_string(),
            catalog::STUDENT_RATING.to_string(),
            catalog::PLACEMENT_RATE.to_string(),
            catalog::INDUSTRY_TIEUPS.to_string(),
            catalog::LOCATION.to_string(),
        ],
    );
    dataset.push_row(college("IIT Delhi", "Delhi", "Engineering", 250000.0, 4.5));
    dataset.push_row(college("DTU", "Delhi", "Engineering", 190000.0, 4.1));
    dataset.push_row(college("NSUT", "Delhi", "Engineering", 180000.0, 4.1));
    dataset.push_row(college("St Xavier's", "Maharashtra", "Commerce", 80000.0, 4.2));
    dataset.push_row(college("IIT Bombay", "Maharashtra", "Engineering", 260000.0, 4.6));
    dataset
}

fn names(rows: &[&Row]) -> Vec<String> {
    rows.iter()
        .map(|row| row.text(catalog::NAME).unwrap().to_string())
        .collect()
}

#[test]
fn conjunction_of_predicates_with_inclusive_budget() {
    let dataset = fixture();
    let filter = CatalogFilter {
        region: Some("delhi".to_string()),
        category: Some("ENGINEERING".to_string()),
        max_budget: Some(190000.0),
    };
    let rows = find(&dataset, &filter);
    assert_eq!(names(&rows), vec!["DTU", "NSUT"]);
    for row in &rows {
        assert!(row.number(catalog::FEES).unwrap() <= 190000.0);
    }
}

#[test]
fn omitted_criteria_match_all_sorted_descending() {
    let dataset = fixture();
    let rows = find(&dataset, &CatalogFilter::default());
    assert_eq!(rows.len(), dataset.len());
    let ratings: Vec<f64> = rows
        .iter()
        .map(|row| row.number(catalog::STUDENT_RATING).unwrap())
        .collect();
    for pair in ratings.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn equal_ratings_keep_dataset_order() {
    let dataset = fixture();
    let rows = find(&dataset, &CatalogFilter::default());
    // DTU precedes NSUT in the source and both carry rating 4.1.
    let order = names(&rows);
    let dtu = order.iter().position(|n| n == "DTU").unwrap();
    let nsut = order.iter().position(|n| n == "NSUT").unwrap();
    assert!(dtu < nsut);
}

#[test]
fn repeated_calls_are_idempotent() {
    let dataset = fixture();
    let filter = CatalogFilter {
        region: Some("Delhi".to_string()),
        ..CatalogFilter::default()
    };
    let first = names(&find(&dataset, &filter));
    let second = names(&find(&dataset, &filter));
    assert_eq!(first, second);
}

#[test]
fn no_match_returns_empty_view() {
    let dataset = fixture();
    let filter = CatalogFilter {
        region: Some("Atlantis".to_string()),
        ..CatalogFilter::default()
    };
    assert!(find(&dataset, &filter).is_empty());
}

#[test]
fn mean_by_group_matches_direct_recomputation() {
    let dataset = fixture();
    let means = mean_by_group(&dataset, catalog::STREAM, catalog::FEES);
    assert_eq!(
        means,
        vec![
            GroupMean {
                group: "Engineering".to_string(),
                mean: (250000.0 + 190000.0 + 180000.0 + 260000.0) / 4.0,
            },
            GroupMean {
                group: "Commerce".to_string(),
                mean: 80000.0,
            },
        ]
    );
}

#[test]
fn groups_without_contributing_rows_are_omitted() {
    let mut dataset = fixture();
    // A row whose fees are missing contributes to no group.
    let mut orphan = college("Orphan", "Goa", "Arts", 0.0, 3.0);
    orphan.insert(catalog::FEES, Value::Missing);
    dataset.push_row(orphan);

    let means = mean_by_group(&dataset, catalog::STREAM, catalog::FEES);
    assert!(means.iter().all(|entry| entry.group != "Arts"));
}
