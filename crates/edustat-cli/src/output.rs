//! Result rendering: tables for humans, JSON for machines.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use edustat_compare::{ComparisonResult, Direction, FieldChange, StateComparison};
use edustat_engine::GroupMean;
use edustat_model::{QueryError, Row, Value};

/// Output medium selected by the `--json` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Render a sequence of rows under a fixed column order.
pub fn render_rows(columns: &[&str], rows: &[&Row], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(rows)?);
    }
    let mut table = new_table();
    table.set_header(columns.iter().map(|column| header_cell(column)));
    for row in rows {
        table.add_row(columns.iter().map(|column| value_cell(row.get(column))));
    }
    Ok(table.to_string())
}

/// Render one record as a field/value listing in column order.
pub fn render_record(columns: &[String], row: &Row, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(row)?);
    }
    let mut table = new_table();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    for column in columns {
        table.add_row(vec![Cell::new(column), value_cell(row.get(column))]);
    }
    Ok(table.to_string())
}

/// Render grouped means, highest first.
pub fn render_means(
    group_label: &str,
    value_label: &str,
    means: &[GroupMean],
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(means)?);
    }
    let mut table = new_table();
    table.set_header(vec![header_cell(group_label), header_cell(value_label)]);
    for entry in means {
        table.add_row(vec![
            Cell::new(&entry.group),
            Cell::new(format!("{:.2}", entry.mean)),
        ]);
    }
    Ok(table.to_string())
}

/// Render a plain list of values, one per line (JSON: an array).
pub fn render_names(names: &[String], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(names)?);
    }
    Ok(names.join("\n"))
}

/// Render a development comparison: one block per state plus the combined
/// suggestion when any rule fired.
pub fn render_comparison(result: &ComparisonResult, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(result)?);
    }
    let mut text = String::new();
    for (state, comparison) in &result.states {
        text.push_str(state);
        text.push('\n');
        text.push_str(&state_table(comparison).to_string());
        text.push('\n');
    }
    if !result.suggestion.is_empty() {
        text.push_str("Suggestions:\n");
        text.push_str(&result.suggestion);
        text.push('\n');
    }
    Ok(text.trim_end().to_string())
}

/// Render a query error for the boundary: `--json` mode mirrors the error
/// body a service would return, table mode is a plain message.
pub fn render_query_error(error: &QueryError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::json!({
            "error": error.to_string(),
            "kind": error.kind(),
        })
        .to_string(),
        OutputFormat::Table => format!("error: {error}"),
    }
}

fn state_table(comparison: &StateComparison) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Indicator"),
        header_cell("From"),
        header_cell("To"),
        header_cell("Delta"),
        header_cell("Direction"),
    ]);
    table.add_row(indicator_row_i64(
        "Population",
        comparison.from.population,
        comparison.to.population,
        &comparison.change.population,
    ));
    table.add_row(indicator_row_f64(
        "Poverty Rate (%)",
        comparison.from.poverty_rate,
        comparison.to.poverty_rate,
        &comparison.change.poverty_rate,
    ));
    table.add_row(indicator_row_f64(
        "Literacy Rate (%)",
        comparison.from.literacy_rate,
        comparison.to.literacy_rate,
        &comparison.change.literacy_rate,
    ));
    table.add_row(indicator_row_i64(
        "Average Income (INR)",
        comparison.from.average_income,
        comparison.to.average_income,
        &comparison.change.average_income,
    ));
    table
}

fn indicator_row_i64(label: &str, from: i64, to: i64, change: &FieldChange<i64>) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(from),
        Cell::new(to),
        Cell::new(change.delta),
        direction_cell(change.direction),
    ]
}

fn indicator_row_f64(label: &str, from: f64, to: f64, change: &FieldChange<f64>) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(from),
        Cell::new(to),
        Cell::new(format!("{:.2}", change.delta)),
        direction_cell(change.direction),
    ]
}

fn direction_cell(direction: Direction) -> Cell {
    match direction {
        Direction::Up => Cell::new("up").fg(Color::Green),
        Direction::Down => Cell::new("down").fg(Color::Red),
        Direction::Flat => Cell::new("flat").fg(Color::DarkGrey),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: Option<&Value>) -> Cell {
    match value {
        Some(value) if !value.is_missing() => Cell::new(value.render()),
        _ => Cell::new("-").fg(Color::DarkGrey),
    }
}
