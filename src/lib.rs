// Library exports for axischart

pub mod axis;
pub mod category;
pub mod data;
pub mod error;
pub mod ir;
pub mod options;
pub mod parser;
pub mod pivot;
pub mod reader;
pub mod runtime;
pub mod writer;

pub use axis::{AxisInput, AxisSpec, ColumnKey, SeriesOptions};
pub use data::{Row, Scalar, Table};
pub use error::PivotError;
pub use ir::{ChartData, Series};
pub use options::{ChartOptions, OutputFormat, OutputOptions};
pub use runtime::{pivot, pivot_or_empty};
