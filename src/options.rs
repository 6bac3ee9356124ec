use crate::axis::AxisInput;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[serde(rename = "json")]
    #[default]
    Json,
    #[serde(rename = "csv")]
    Csv,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputOptions {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub pretty: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: false,
        }
    }
}

/// Chart options document.
///
/// Only the axis configuration matters to the pivot. Styling keys meant for
/// the chart renderer (`colors`, `stack`, `smoothLines`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ChartOptions {
    #[serde(default, rename = "xAxis")]
    pub x_axis: Option<AxisInput>,
    #[serde(default, rename = "yAxis")]
    pub y_axis: Option<AxisInput>,
    #[serde(default)]
    pub output: OutputOptions,
}

impl ChartOptions {
    pub fn new(x_axis: impl Into<AxisInput>, y_axis: impl Into<AxisInput>) -> Self {
        Self {
            x_axis: Some(x_axis.into()),
            y_axis: Some(y_axis.into()),
            output: OutputOptions::default(),
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("Failed to parse chart options")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file '{}'", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Invalid options file '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ChartOptions::from_json_str("{}").unwrap();
        assert!(opts.x_axis.is_none());
        assert!(opts.y_axis.is_none());
        assert_eq!(opts.output, OutputOptions::default());
    }

    #[test]
    fn test_axis_shapes_and_ignored_styling() {
        let opts = ChartOptions::from_json_str(
            r##"{
                "xAxis": ["month", "region"],
                "yAxis": [{"column": "sales", "series_options": {"type": "line"}}],
                "colors": ["#fff"],
                "stack": true,
                "output": {"format": "csv"}
            }"##,
        )
        .unwrap();
        assert_eq!(opts.x_axis, Some(AxisInput::from(vec!["month", "region"])));
        assert!(matches!(opts.y_axis, Some(AxisInput::Specs(ref s)) if s.len() == 1));
        assert_eq!(opts.output.format, OutputFormat::Csv);
        assert!(!opts.output.pretty);
    }

    #[test]
    fn test_bare_string_axis() {
        let opts = ChartOptions::from_json_str(r#"{"xAxis": "month", "yAxis": null}"#).unwrap();
        assert_eq!(opts.x_axis, Some(AxisInput::from("month")));
        assert!(opts.y_axis.is_none());
    }

    #[test]
    fn test_output_format_cli_names_match_options_file() {
        use clap::ValueEnum;
        assert_eq!(OutputFormat::from_str("csv", false), Ok(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_str("json", false), Ok(OutputFormat::Json));
        let opts = ChartOptions::from_json_str(r#"{"output": {"format": "csv", "pretty": true}}"#).unwrap();
        assert_eq!(opts.output, OutputOptions { format: OutputFormat::Csv, pretty: true });
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(ChartOptions::from_json_str(r#"{"output": {"format": "xml"}}"#).is_err());
    }
}
