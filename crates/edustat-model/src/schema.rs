//! Per-dataset column declarations.
//!
//! Each loaded dataset has an explicit schema validated at load time:
//! declared columns must exist in the source (missing ones fail fast with a
//! load error) and Int/Float columns are coerced row by row. Post-trim
//! column names form the field contract with the boundary layer.

use serde::{Deserialize, Serialize};

/// Declared type of a schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Kept as text. Empty cells become `Value::Missing`.
    Text,
    /// Coerced to i64; rows with non-coercible values are dropped.
    Int,
    /// Coerced to finite f64; rows with non-coercible values are dropped.
    Float,
}

/// One declared column of a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Schema of one dataset. All declared columns are required; source columns
/// not declared here pass through as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    pub dataset: String,
    pub columns: Vec<ColumnSpec>,
}

impl Schema {
    pub fn new(dataset: impl Into<String>, columns: Vec<ColumnSpec>) -> Self {
        Self {
            dataset: dataset.into(),
            columns,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|column| column.name == name)
    }
}

/// Institution catalog field contract.
pub mod catalog {
    use super::{ColumnKind, ColumnSpec, Schema};

    pub const NAME: &str = "name";
    pub const STATE: &str = "state";
    pub const STREAM: &str = "stream";
    pub const FEES: &str = "fees";
    pub const STUDENT_RATING: &str = "student_rating";
    pub const PLACEMENT_RATE: &str = "placement_rate";
    pub const INDUSTRY_TIEUPS: &str = "industry_tieups";
    pub const LOCATION: &str = "location";

    /// After load every row carries finite `fees`, `student_rating`, and
    /// `placement_rate`; rows failing coercion are excluded entirely.
    pub fn schema() -> Schema {
        Schema::new(
            "institution_catalog",
            vec![
                ColumnSpec::new(NAME, ColumnKind::Text),
                ColumnSpec::new(STATE, ColumnKind::Text),
                ColumnSpec::new(STREAM, ColumnKind::Text),
                ColumnSpec::new(FEES, ColumnKind::Float),
                ColumnSpec::new(STUDENT_RATING, ColumnKind::Float),
                ColumnSpec::new(PLACEMENT_RATE, ColumnKind::Float),
                ColumnSpec::new(INDUSTRY_TIEUPS, ColumnKind::Text),
                ColumnSpec::new(LOCATION, ColumnKind::Text),
            ],
        )
    }
}

/// Demographic census field contract, shared by all three snapshots.
pub mod census {
    use super::{ColumnKind, ColumnSpec, Schema};

    pub const STATE: &str = "State";
    pub const POPULATION: &str = "Population";
    pub const POVERTY_RATE: &str = "Poverty Rate (%)";
    pub const LITERACY_RATE: &str = "Literacy Rate (%)";
    pub const AVERAGE_INCOME: &str = "Average Income (INR)";

    /// Numeric census fields stay text at load (sources carry thousands
    /// separators) and are normalized at snapshot extraction time.
    pub fn schema(dataset: &str) -> Schema {
        Schema::new(
            dataset,
            vec![
                ColumnSpec::new(STATE, ColumnKind::Text),
                ColumnSpec::new(POPULATION, ColumnKind::Text),
                ColumnSpec::new(POVERTY_RATE, ColumnKind::Text),
                ColumnSpec::new(LITERACY_RATE, ColumnKind::Text),
                ColumnSpec::new(AVERAGE_INCOME, ColumnKind::Text),
            ],
        )
    }
}

/// Per-region cost and job index contract. Only the key column is
/// structurally required; index variants pass through as text.
pub mod cost_index {
    use super::{ColumnKind, ColumnSpec, Schema};

    pub const STATE: &str = "State";

    pub fn schema() -> Schema {
        Schema::new(
            "state_cost_index",
            vec![ColumnSpec::new(STATE, ColumnKind::Text)],
        )
    }
}

/// Government scheme eligibility contract.
pub mod schemes {
    use super::{ColumnKind, ColumnSpec, Schema};

    pub const SCHEME_NAME: &str = "scheme_name";
    pub const CONDITIONS: &str = "conditions";
    pub const DOCUMENTS_NEEDED: &str = "documents_needed";
    pub const SKILLS_OFFERED: &str = "skills_offered";
    pub const OFFERED_BY: &str = "offered_by";
    pub const STATE: &str = "state";
    pub const SECTOR: &str = "sector";
    pub const MIN_AGE: &str = "min_age";
    pub const MAX_AGE: &str = "max_age";

    /// Fields projected into eligibility results.
    pub const PROJECTION: [&str; 5] = [
        SCHEME_NAME,
        CONDITIONS,
        DOCUMENTS_NEEDED,
        SKILLS_OFFERED,
        OFFERED_BY,
    ];

    pub fn schema() -> Schema {
        Schema::new(
            "government_schemes",
            vec![
                ColumnSpec::new(SCHEME_NAME, ColumnKind::Text),
                ColumnSpec::new(CONDITIONS, ColumnKind::Text),
                ColumnSpec::new(DOCUMENTS_NEEDED, ColumnKind::Text),
                ColumnSpec::new(SKILLS_OFFERED, ColumnKind::Text),
                ColumnSpec::new(OFFERED_BY, ColumnKind::Text),
                ColumnSpec::new(STATE, ColumnKind::Text),
                ColumnSpec::new(SECTOR, ColumnKind::Text),
                ColumnSpec::new(MIN_AGE, ColumnKind::Int),
                ColumnSpec::new(MAX_AGE, ColumnKind::Int),
            ],
        )
    }
}
