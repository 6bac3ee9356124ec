// Table readers for CSV and JSON input

use crate::data::Table;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Guess from a file extension; anything that is not `.json` is CSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

/// Read CSV with a header row. Cell values are inferred (see `Scalar::infer`).
pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read CSV record {}", idx + 1))?;
        records.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(Table::from_records(&headers, records))
}

/// Read a JSON array of objects
pub fn read_json<R: Read>(reader: R) -> Result<Table> {
    let value: serde_json::Value =
        serde_json::from_reader(reader).context("Failed to parse JSON input")?;
    Table::from_json(&value)
}

pub fn read_table<R: Read>(reader: R, format: InputFormat) -> Result<Table> {
    match format {
        InputFormat::Csv => read_csv(reader),
        InputFormat::Json => read_json(reader),
    }
}

/// Read a table from a file, or from stdin when `path` is `None` or `-`
pub fn read_input(path: Option<&Path>, format: Option<InputFormat>) -> Result<Table> {
    match path {
        Some(p) if p != Path::new("-") => {
            let format = format.unwrap_or_else(|| InputFormat::from_path(p));
            let file = File::open(p)
                .with_context(|| format!("Failed to open input file '{}'", p.display()))?;
            read_table(BufReader::new(file), format)
                .with_context(|| format!("Failed to read table from '{}'", p.display()))
        }
        _ => {
            let stdin = io::stdin();
            read_table(stdin.lock(), format.unwrap_or(InputFormat::Csv))
                .context("Failed to read table from stdin")
        }
    }
}
