//! Eligibility filter behavior.

use edustat_engine::eligible_schemes;
use edustat_model::{Dataset, Row, Value, schemes};

fn scheme(name: &str, state: &str, sector: &str, min_age: i64, max_age: i64) -> Row {
    [
        (schemes::SCHEME_NAME, Value::from(name)),
        (schemes::CONDITIONS, Value::from("None")),
        (schemes::DOCUMENTS_NEEDED, Value::from("Aadhaar")),
        (schemes::SKILLS_OFFERED, Value::from("Welding")),
        (schemes::OFFERED_BY, Value::from("Central")),
        (schemes::STATE, Value::from(state)),
        (schemes::SECTOR, Value::from(sector)),
        (schemes::MIN_AGE, Value::from(min_age)),
        (schemes::MAX_AGE, Value::from(max_age)),
    ]
    .into_iter()
    .collect()
}

fn fixture() -> Dataset {
    let mut dataset = Dataset::new(
        "government_schemes",
        schemes::schema()
            .columns
            .iter()
            .map(|column| column.name.clone())
            .collect(),
    );
    dataset.push_row(scheme("Skill India", "Kerala", "Manufacturing", 18, 45));
    dataset.push_row(scheme("Skill India", "Kerala", "Manufacturing", 18, 45));
    dataset.push_row(scheme("Startup Boost", "Kerala", "Manufacturing", 21, 35));
    dataset.push_row(scheme("Other State", "Goa", "Manufacturing", 18, 45));
    dataset.push_row(scheme("Other Sector", "Kerala", "Services", 18, 45));
    dataset
}

fn names(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|row| row.text(schemes::SCHEME_NAME).unwrap().to_string())
        .collect()
}

#[test]
fn filters_on_state_sector_and_age_range() {
    let dataset = fixture();
    let rows = eligible_schemes(&dataset, "Kerala", "Manufacturing", 25);
    assert_eq!(names(&rows), vec!["Skill India", "Startup Boost"]);
}

#[test]
fn age_bounds_are_inclusive() {
    let dataset = fixture();
    assert_eq!(
        names(&eligible_schemes(&dataset, "Kerala", "Manufacturing", 18)),
        vec!["Skill India"]
    );
    assert_eq!(
        names(&eligible_schemes(&dataset, "Kerala", "Manufacturing", 45)),
        vec!["Skill India"]
    );
    assert!(eligible_schemes(&dataset, "Kerala", "Manufacturing", 46).is_empty());
}

#[test]
fn matching_is_case_sensitive() {
    let dataset = fixture();
    assert!(eligible_schemes(&dataset, "kerala", "Manufacturing", 25).is_empty());
    assert!(eligible_schemes(&dataset, "Kerala", "manufacturing", 25).is_empty());
}

#[test]
fn duplicate_projections_collapse_to_first_occurrence() {
    let dataset = fixture();
    let rows = eligible_schemes(&dataset, "Kerala", "Manufacturing", 25);
    let skill_india = rows
        .iter()
        .filter(|row| row.text(schemes::SCHEME_NAME) == Some("Skill India"))
        .count();
    assert_eq!(skill_india, 1);
}

#[test]
fn results_carry_only_projected_fields() {
    let dataset = fixture();
    let rows = eligible_schemes(&dataset, "Kerala", "Manufacturing", 25);
    for row in &rows {
        assert!(row.get(schemes::STATE).is_none());
        assert!(row.get(schemes::MIN_AGE).is_none());
        for field in schemes::PROJECTION {
            assert!(row.get(field).is_some());
        }
    }
}
