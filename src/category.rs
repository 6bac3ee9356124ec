use crate::axis::{AxisSpec, ColumnKey};
use crate::data::{cell, Scalar, Table};
use crate::error::PivotError;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Filter X-axis specs down to the columns present on the first row.
///
/// Named columns missing from the data (stale saved options, for example)
/// are dropped. Non-string columns are kept so that [`categories`] can
/// report them.
pub fn effective_x_columns(specs: &[AxisSpec], table: &Table) -> Vec<ColumnKey> {
    if table.is_empty() {
        return Vec::new();
    }

    specs
        .iter()
        .filter(|spec| match &spec.column {
            ColumnKey::Name(name) => {
                let present = table.has_column(name);
                if !present {
                    debug!(column = %name, "dropping X-axis column not present in data");
                }
                present
            }
            ColumnKey::Invalid(_) => true,
        })
        .map(|spec| spec.column.clone())
        .collect()
}

/// Distinct values of the first X column, in order of first appearance.
/// Null and absent values share a single `Null` category.
pub fn categories(columns: &[ColumnKey], table: &Table) -> Result<Vec<Scalar>, PivotError> {
    if table.is_empty() {
        return Ok(Vec::new());
    }
    let Some(first) = columns.first() else {
        return Ok(Vec::new());
    };

    let column = match first {
        ColumnKey::Name(name) => name,
        ColumnKey::Invalid(value) => {
            warn!(column = %value, "Invalid X-Axis option. Please re-select the X-Axis option.");
            return Err(PivotError::InvalidAxisConfiguration {
                column: value.to_string(),
            });
        }
    };

    Ok(distinct_values(table, column))
}

/// First-seen distinct values of `column` across the whole table
pub(crate) fn distinct_values(table: &Table, column: &str) -> Vec<Scalar> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for row in &table.rows {
        let value = cell(row, column);
        if seen.insert(value) {
            values.push(value.clone());
        }
    }
    values
}
