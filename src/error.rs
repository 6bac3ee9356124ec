use thiserror::Error;

/// Errors raised by the pivot core. All of them are recoverable: the caller
/// can fall back to an empty `ChartData`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PivotError {
    #[error("Invalid X-Axis option {column}. Please re-select the X-Axis option.")]
    InvalidAxisConfiguration { column: String },
}
