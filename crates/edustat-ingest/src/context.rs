//! Startup data context.
//!
//! All datasets load exactly once here. The context outlives every query
//! and is passed explicitly into engine operations; nothing reads ambient
//! global state. Any future hot reload must swap the whole context
//! reference atomically rather than mutate a live dataset.

use std::path::Path;

use tracing::info;

use edustat_model::{Dataset, catalog, census, cost_index, schemes};

use crate::error::Result;
use crate::loader::load_dataset;

pub const CATALOG_FILE: &str = "enhanced_college_dataset.csv";
pub const COST_INDEX_FILE: &str = "India_State_Costs_and_Job_Index.csv";
pub const CENSUS_1991_FILE: &str = "census_1991_india_formatted.csv";
pub const CENSUS_2001_FILE: &str = "census_2001_india_formatted.csv";
pub const CENSUS_2011_FILE: &str = "census_2011_india_formatted.csv";
pub const SCHEMES_FILE: &str = "indian_government_schemes_dataset_updated.csv";

/// Every dataset the engine serves queries against.
#[derive(Debug, Clone)]
pub struct DataContext {
    pub catalog: Dataset,
    pub cost_index: Dataset,
    pub census_1991: Dataset,
    pub census_2001: Dataset,
    pub census_2011: Dataset,
    pub schemes: Dataset,
}

impl DataContext {
    /// Load all datasets from `data_dir`. A failure here is startup-fatal.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let catalog = load_dataset(&data_dir.join(CATALOG_FILE), &catalog::schema())?;
        let cost_index = load_dataset(&data_dir.join(COST_INDEX_FILE), &cost_index::schema())?;
        let census_1991 = load_dataset(
            &data_dir.join(CENSUS_1991_FILE),
            &census::schema("census_1991"),
        )?;
        let census_2001 = load_dataset(
            &data_dir.join(CENSUS_2001_FILE),
            &census::schema("census_2001"),
        )?;
        let census_2011 = load_dataset(
            &data_dir.join(CENSUS_2011_FILE),
            &census::schema("census_2011"),
        )?;
        let schemes = load_dataset(&data_dir.join(SCHEMES_FILE), &schemes::schema())?;

        let context = Self {
            catalog,
            cost_index,
            census_1991,
            census_2001,
            census_2011,
            schemes,
        };
        for dataset in [
            &context.catalog,
            &context.cost_index,
            &context.census_1991,
            &context.census_2001,
            &context.census_2011,
            &context.schemes,
        ] {
            info!(dataset = %dataset.name, rows = dataset.len(), "dataset loaded");
        }
        Ok(context)
    }
}
