//! Query command execution against the loaded data context.

use anyhow::Result;

use edustat_cli::output::{self, OutputFormat};
use edustat_compare::{CensusSeries, compare};
use edustat_engine::{
    CatalogFilter, compare_two, eligible_schemes, exact_match, find, mean_by_group, unique_values,
};
use edustat_ingest::DataContext;
use edustat_model::{QueryError, Row, catalog, census, cost_index, schemes};

use crate::cli::{Command, CompareArgs, DevelopmentArgs, FindArgs, SchemesArgs, StateArgs};

/// Catalog fields in boundary-contract order.
const CATALOG_COLUMNS: [&str; 8] = [
    catalog::NAME,
    catalog::STATE,
    catalog::STREAM,
    catalog::FEES,
    catalog::STUDENT_RATING,
    catalog::PLACEMENT_RATE,
    catalog::INDUSTRY_TIEUPS,
    catalog::LOCATION,
];

pub fn run(context: &DataContext, command: &Command, format: OutputFormat) -> Result<()> {
    match command {
        Command::Find(args) => run_find(context, args, format),
        Command::Averages => run_averages(context, format),
        Command::Names => run_names(context, format),
        Command::Compare(args) => run_compare(context, args, format),
        Command::StateCosts(args) => run_state_costs(context, args, format),
        Command::Census(args) => run_census(context, args, format),
        Command::Development(args) => run_development(context, args, format),
        Command::Schemes(args) => run_schemes(context, args, format),
    }
}

fn run_find(context: &DataContext, args: &FindArgs, format: OutputFormat) -> Result<()> {
    let filter = CatalogFilter {
        region: args.region.clone(),
        category: args.category.clone(),
        max_budget: args.max_budget,
    };
    let rows = find(&context.catalog, &filter);
    println!("{}", output::render_rows(&CATALOG_COLUMNS, &rows, format)?);
    Ok(())
}

fn run_averages(context: &DataContext, format: OutputFormat) -> Result<()> {
    let means = mean_by_group(&context.catalog, catalog::STREAM, catalog::FEES);
    println!(
        "{}",
        output::render_means("Stream", "Average fees", &means, format)?
    );
    Ok(())
}

fn run_names(context: &DataContext, format: OutputFormat) -> Result<()> {
    let names = unique_values(&context.catalog, catalog::NAME);
    println!("{}", output::render_names(&names, format)?);
    Ok(())
}

fn run_compare(context: &DataContext, args: &CompareArgs, format: OutputFormat) -> Result<()> {
    let slots = compare_two(&context.catalog, catalog::NAME, &args.first, &args.second);
    let rows: Vec<&Row> = slots.iter().collect();
    println!("{}", output::render_rows(&CATALOG_COLUMNS, &rows, format)?);
    Ok(())
}

fn run_state_costs(context: &DataContext, args: &StateArgs, format: OutputFormat) -> Result<()> {
    let row = exact_match(&context.cost_index, cost_index::STATE, &args.state)
        .ok_or_else(|| QueryError::not_found("state", args.state.as_str()))?;
    println!(
        "{}",
        output::render_record(&context.cost_index.columns, row, format)?
    );
    Ok(())
}

fn run_census(context: &DataContext, args: &StateArgs, format: OutputFormat) -> Result<()> {
    let row = exact_match(&context.census_2011, census::STATE, &args.state)
        .ok_or_else(|| QueryError::not_found("state", args.state.as_str()))?;
    println!(
        "{}",
        output::render_record(&context.census_2011.columns, row, format)?
    );
    Ok(())
}

fn run_development(
    context: &DataContext,
    args: &DevelopmentArgs,
    format: OutputFormat,
) -> Result<()> {
    let series = CensusSeries::new(
        &context.census_1991,
        &context.census_2001,
        &context.census_2011,
    );
    let result = compare(&series, &args.state1, &args.state2, args.from, args.to)?;
    println!("{}", output::render_comparison(&result, format)?);
    Ok(())
}

fn run_schemes(context: &DataContext, args: &SchemesArgs, format: OutputFormat) -> Result<()> {
    let rows = eligible_schemes(&context.schemes, &args.state, &args.sector, args.age);
    let rows: Vec<&Row> = rows.iter().collect();
    println!(
        "{}",
        output::render_rows(&schemes::PROJECTION, &rows, format)?
    );
    Ok(())
}
