//! Signed field-wise deltas between two snapshots.

use serde::Serialize;

use crate::snapshot::DevelopmentSnapshot;

/// Direction of a delta's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    fn of_i64(delta: i64) -> Self {
        if delta > 0 {
            Direction::Up
        } else if delta < 0 {
            Direction::Down
        } else {
            Direction::Flat
        }
    }

    fn of_f64(delta: f64) -> Self {
        if delta > 0.0 {
            Direction::Up
        } else if delta < 0.0 {
            Direction::Down
        } else {
            Direction::Flat
        }
    }
}

/// Delta of one numeric field, with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldChange<T> {
    pub delta: T,
    pub direction: Direction,
}

impl FieldChange<i64> {
    fn between(to: i64, from: i64) -> Self {
        let delta = to - from;
        Self {
            delta,
            direction: Direction::of_i64(delta),
        }
    }
}

impl FieldChange<f64> {
    fn between(to: f64, from: f64) -> Self {
        let delta = to - from;
        Self {
            delta,
            direction: Direction::of_f64(delta),
        }
    }
}

/// Field-wise changes between two snapshots of one state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapshotChange {
    #[serde(rename = "Population")]
    pub population: FieldChange<i64>,
    #[serde(rename = "Poverty Rate (%)")]
    pub poverty_rate: FieldChange<f64>,
    #[serde(rename = "Literacy Rate (%)")]
    pub literacy_rate: FieldChange<f64>,
    #[serde(rename = "Average Income (INR)")]
    pub average_income: FieldChange<i64>,
}

/// Per-field delta = to - from. Direction is up for a positive delta,
/// down for a negative one, flat when the delta is exactly zero.
pub fn compute_change(to: &DevelopmentSnapshot, from: &DevelopmentSnapshot) -> SnapshotChange {
    SnapshotChange {
        population: FieldChange::<i64>::between(to.population, from.population),
        poverty_rate: FieldChange::<f64>::between(to.poverty_rate, from.poverty_rate),
        literacy_rate: FieldChange::<f64>::between(to.literacy_rate, from.literacy_rate),
        average_income: FieldChange::<i64>::between(to.average_income, from.average_income),
    }
}
