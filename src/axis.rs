//! Axis option normalization.
//!
//! Axis options arrive in several shapes: a bare column name, a list of
//! column names, or a list of `{column, series_options}` objects. Everything
//! downstream works on the canonical `Vec<AxisSpec>` produced here.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// Per-series options forwarded untouched to whoever draws the chart.
pub type SeriesOptions = Map<String, Value>;

/// Axis option as written in a chart options document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AxisInput {
    Column(String),
    Columns(Vec<String>),
    Specs(Vec<RawAxisSpec>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAxisSpec {
    pub column: Value,
    #[serde(default)]
    pub series_options: Option<SeriesOptions>,
}

/// A configured column reference. Anything other than a string is kept as
/// `Invalid` so the bad configuration can be reported instead of guessed at.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKey {
    Name(String),
    Invalid(Value),
}

impl ColumnKey {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => ColumnKey::Name(s.clone()),
            other => ColumnKey::Invalid(other.clone()),
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            ColumnKey::Name(name) => Some(name),
            ColumnKey::Invalid(_) => None,
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKey::Name(name) => write!(f, "{}", name),
            ColumnKey::Invalid(value) => write!(f, "{}", value),
        }
    }
}

/// Canonical axis descriptor: one column plus its pass-through options
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub column: ColumnKey,
    pub series_options: SeriesOptions,
}

impl AxisSpec {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: ColumnKey::Name(column.into()),
            series_options: SeriesOptions::new(),
        }
    }

    pub fn with_options(mut self, series_options: SeriesOptions) -> Self {
        self.series_options = series_options;
        self
    }
}

impl From<&str> for AxisInput {
    fn from(column: &str) -> Self {
        AxisInput::Column(column.to_string())
    }
}

impl From<Vec<&str>> for AxisInput {
    fn from(columns: Vec<&str>) -> Self {
        AxisInput::Columns(columns.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<AxisSpec>> for AxisInput {
    fn from(specs: Vec<AxisSpec>) -> Self {
        AxisInput::Specs(
            specs
                .into_iter()
                .map(|spec| RawAxisSpec {
                    column: match spec.column {
                        ColumnKey::Name(name) => Value::String(name),
                        ColumnKey::Invalid(value) => value,
                    },
                    series_options: Some(spec.series_options),
                })
                .collect(),
        )
    }
}

/// Normalize any accepted axis shape into an ordered list of specs
pub fn normalize(input: &AxisInput) -> Vec<AxisSpec> {
    match input {
        AxisInput::Column(column) => vec![AxisSpec::new(column.clone())],
        AxisInput::Columns(columns) => columns.iter().cloned().map(AxisSpec::new).collect(),
        AxisInput::Specs(specs) => specs
            .iter()
            .map(|raw| AxisSpec {
                column: ColumnKey::from_value(&raw.column),
                series_options: raw.series_options.clone().unwrap_or_default(),
            })
            .collect(),
    }
}

/// Same as [`normalize`], with an absent option treated as empty
pub fn normalize_opt(input: Option<&AxisInput>) -> Vec<AxisSpec> {
    input.map(normalize).unwrap_or_default()
}
