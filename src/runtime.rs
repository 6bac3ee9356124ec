// Pivot executor: options + table -> chart data

use crate::axis::normalize_opt;
use crate::category::{categories, effective_x_columns};
use crate::data::Table;
use crate::error::PivotError;
use crate::ir::ChartData;
use crate::options::ChartOptions;
use crate::pivot::build as build_series;
use tracing::warn;

/// Turn a row table into categories and series according to the axis options.
///
/// Missing columns, empty tables and empty axis options all produce an empty
/// (but valid) result: no series means no categories either. The only error
/// is an unusable first X-axis column.
pub fn pivot(options: &ChartOptions, table: &Table) -> Result<ChartData, PivotError> {
    let x_specs = normalize_opt(options.x_axis.as_ref());
    let x_columns = effective_x_columns(&x_specs, table);
    let categories = categories(&x_columns, table)?;

    let y_specs = normalize_opt(options.y_axis.as_ref());
    let series = build_series(&y_specs, table, &x_columns, &categories);
    if series.is_empty() {
        return Ok(ChartData::default());
    }

    Ok(ChartData { categories, series })
}

/// Like [`pivot`], but reports an invalid configuration and returns an
/// empty result instead of failing.
pub fn pivot_or_empty(options: &ChartOptions, table: &Table) -> ChartData {
    pivot(options, table).unwrap_or_else(|e| {
        warn!(error = %e, "chart options rejected; nothing to render");
        ChartData::default()
    })
}
