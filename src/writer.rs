// Output writers for pivoted chart data

use crate::ir::ChartData;
use crate::options::{OutputFormat, OutputOptions};
use anyhow::{Context, Result};
use std::io::Write;

pub fn write_chart_data<W: Write>(data: &ChartData, options: &OutputOptions, writer: W) -> Result<()> {
    match options.format {
        OutputFormat::Json => write_json(data, options.pretty, writer),
        OutputFormat::Csv => write_csv(data, writer),
    }
}

fn write_json<W: Write>(data: &ChartData, pretty: bool, mut writer: W) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, data)
    } else {
        serde_json::to_writer(&mut writer, data)
    }
    .context("Failed to serialize chart data")?;
    writeln!(writer).context("Failed to write output")?;
    Ok(())
}

/// Wide layout: a `category` column followed by one column per series
fn write_csv<W: Write>(data: &ChartData, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["category".to_string()];
    header.extend(data.series.iter().map(|s| s.label.clone()));
    wtr.write_record(&header).context("Failed to write CSV header")?;

    for (idx, category) in data.categories.iter().enumerate() {
        let mut record = vec![category.to_string()];
        // Series shorter than the category list leave the cell blank
        record.extend(
            data.series
                .iter()
                .map(|s| s.data.get(idx).map(f64::to_string).unwrap_or_default()),
        );
        wtr.write_record(&record)
            .with_context(|| format!("Failed to write CSV row for category '{}'", category))?;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::SeriesOptions;
    use crate::data::Scalar;
    use crate::ir::Series;

    fn sample() -> ChartData {
        ChartData {
            categories: vec![Scalar::from("Jan"), Scalar::from("Feb")],
            series: vec![
                Series { label: "A".to_string(), data: vec![10.0, 20.0], series_options: SeriesOptions::new() },
                Series { label: "B".to_string(), data: vec![5.0, 0.5], series_options: SeriesOptions::new() },
            ],
        }
    }

    fn render(data: &ChartData, options: &OutputOptions) -> String {
        let mut out = Vec::new();
        write_chart_data(data, options, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_json() {
        let text = render(&sample(), &OutputOptions::default());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["categories"], serde_json::json!(["Jan", "Feb"]));
        assert_eq!(value["series"][1]["label"], "B");
        assert_eq!(value["series"][1]["data"][1], 0.5);
        assert!(value["series"][0]["series_options"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_write_csv() {
        let options = OutputOptions { format: OutputFormat::Csv, pretty: false };
        let text = render(&sample(), &options);
        assert_eq!(text, "category,A,B\nJan,10,5\nFeb,20,0.5\n");
    }

    #[test]
    fn test_write_csv_short_series_leaves_blank_cells() {
        let mut data = sample();
        data.series[1].data.truncate(1);
        let options = OutputOptions { format: OutputFormat::Csv, pretty: false };
        assert_eq!(render(&data, &options), "category,A,B\nJan,10,5\nFeb,20,\n");
    }

    #[test]
    fn test_write_json_numeric_categories_stay_integral() {
        let mut data = sample();
        data.categories = vec![Scalar::Number(2023.0), Scalar::Number(2024.5)];
        let text = render(&data, &OutputOptions::default());
        assert!(text.starts_with(r#"{"categories":[2023,2024.5],"#), "{}", text);
    }

    #[test]
    fn test_write_csv_empty() {
        let options = OutputOptions { format: OutputFormat::Csv, pretty: false };
        assert_eq!(render(&ChartData::default(), &options), "category\n");
    }
}
