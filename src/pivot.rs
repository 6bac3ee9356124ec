use crate::axis::{AxisSpec, ColumnKey};
use crate::category::distinct_values;
use crate::data::{cell, Scalar, Table};
use crate::ir::Series;
use std::collections::HashMap;
use tracing::debug;

/// Build one or more series per Y-axis spec, aligned to `categories`.
///
/// With a single X column each Y column becomes one series holding per-category
/// sums. With several X columns, every distinct value of each secondary column
/// becomes its own series (see [`expand_sub_series`]).
pub fn build(
    y_specs: &[AxisSpec],
    table: &Table,
    x_columns: &[ColumnKey],
    categories: &[Scalar],
) -> Vec<Series> {
    if table.is_empty() || y_specs.is_empty() {
        return Vec::new();
    }

    let valid_y: Vec<(&str, &AxisSpec)> = y_specs
        .iter()
        .filter_map(|spec| {
            let name = spec.column.as_name()?;
            if table.has_column(name) {
                Some((name, spec))
            } else {
                debug!(column = %name, "dropping Y-axis column not present in data");
                None
            }
        })
        .collect();

    let x_names: Vec<&str> = x_columns.iter().filter_map(ColumnKey::as_name).collect();
    let Some((primary, secondary)) = x_names.split_first() else {
        return Vec::new();
    };

    let category_index: HashMap<&Scalar, usize> =
        categories.iter().enumerate().map(|(i, c)| (c, i)).collect();

    if secondary.is_empty() {
        debug!(x = %primary, y_columns = valid_y.len(), "aggregating single-key series");
        valid_y
            .into_iter()
            .map(|(y_col, spec)| Series {
                label: y_col.to_string(),
                data: sum_by_category(table, primary, y_col, &category_index),
                series_options: spec.series_options.clone(),
            })
            .collect()
    } else {
        debug!(
            x = %primary,
            secondary_columns = secondary.len(),
            y_columns = valid_y.len(),
            "expanding sub-series"
        );
        let mut series = Vec::new();
        for (y_col, spec) in valid_y {
            for sub_col in secondary {
                series.extend(expand_sub_series(table, primary, sub_col, y_col, &category_index, spec));
            }
        }
        series
    }
}

/// Sum of numeric `y_col` values per category. A missing X value counts as
/// the `Null` category; non-numeric values add nothing.
fn sum_by_category(
    table: &Table,
    x_col: &str,
    y_col: &str,
    category_index: &HashMap<&Scalar, usize>,
) -> Vec<f64> {
    let mut sums = vec![0.0; category_index.len()];
    for row in &table.rows {
        let Some(&idx) = category_index.get(cell(row, x_col)) else {
            continue;
        };
        if let Some(y) = row.get(y_col).and_then(Scalar::as_number) {
            sums[idx] += y;
        }
    }
    sums
}

/// One series per distinct value of `sub_col`, labelled with that value.
///
/// For each (sub value, category) pair only the first matching row is used;
/// its `y_col` value is taken as is, not summed. Pairs with no matching row,
/// or whose row has no numeric value, yield 0.
fn expand_sub_series(
    table: &Table,
    primary: &str,
    sub_col: &str,
    y_col: &str,
    category_index: &HashMap<&Scalar, usize>,
    spec: &AxisSpec,
) -> Vec<Series> {
    let sub_values = distinct_values(table, sub_col);
    let sub_index: HashMap<&Scalar, usize> =
        sub_values.iter().enumerate().map(|(i, v)| (v, i)).collect();

    let mut slots: Vec<Vec<Option<f64>>> = vec![vec![None; category_index.len()]; sub_values.len()];
    for row in &table.rows {
        let Some(&s) = sub_index.get(cell(row, sub_col)) else {
            continue;
        };
        let Some(&c) = category_index.get(cell(row, primary)) else {
            continue;
        };
        let slot = &mut slots[s][c];
        if slot.is_none() {
            *slot = Some(row.get(y_col).and_then(Scalar::as_number).unwrap_or(0.0));
        }
    }

    sub_values
        .iter()
        .zip(slots)
        .map(|(value, data)| Series {
            label: value.to_string(),
            data: data.into_iter().map(|v| v.unwrap_or(0.0)).collect(),
            series_options: spec.series_options.clone(),
        })
        .collect()
}
