use crate::axis::SeriesOptions;
use crate::data::Scalar;
use serde::Serialize;

// =============================================================================
// Pivot output
// =============================================================================

/// Everything a categorical chart needs: the X-axis labels plus one value
/// sequence per series, aligned index by index with `categories`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub categories: Vec<Scalar>,
    pub series: Vec<Series>,
}

impl ChartData {
    /// Nothing to render
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series_by_label(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
    pub series_options: SeriesOptions,
}
