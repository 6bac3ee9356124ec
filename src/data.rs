use anyhow::{anyhow, Result};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single cell value.
#[derive(Debug, Clone)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl Scalar {
    /// Numeric view used by aggregation. Only finite numbers count.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Infer a scalar from a raw CSV cell
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Scalar::Null;
        }
        match trimmed {
            "true" => return Scalar::Bool(true),
            "false" => return Scalar::Bool(false),
            _ => {}
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Scalar::Number(n),
            _ => Scalar::Text(raw.to_string()),
        }
    }

    /// Convert a JSON cell. Arrays and objects are not scalars.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Scalar::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(Scalar::Number),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Null => Some(Scalar::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Number(a), Scalar::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Null, Scalar::Null) => true,
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Scalar::Number(n) => {
                // -0.0 and 0.0 compare equal, so they must hash equal too
                let bits = if *n == 0.0 {
                    0u64
                } else if n.is_nan() {
                    f64::NAN.to_bits()
                } else {
                    n.to_bits()
                };
                bits.hash(state);
            }
            Scalar::Text(s) => s.hash(state),
            Scalar::Bool(b) => b.hash(state),
            Scalar::Null => {}
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) if *n == 0.0 => write!(f, "0"),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Null => write!(f, "null"),
        }
    }
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Whole numbers keep their integer form, e.g. `2024` rather than `2024.0`
            Scalar::Number(n) if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Scalar::Number(n) => serializer.serialize_f64(*n),
            Scalar::Text(s) => serializer.serialize_str(s),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Null => serializer.serialize_none(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

pub type Row = HashMap<String, Scalar>;

static NULL: Scalar = Scalar::Null;

/// Value of `column` in `row`, with an absent key read as `Null`
pub fn cell<'a>(row: &'a Row, column: &str) -> &'a Scalar {
    row.get(column).unwrap_or(&NULL)
}

/// Ordered sequence of rows
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether `column` exists as a key on the first row.
    /// Column presence is always judged against the first row only.
    pub fn has_column(&self, column: &str) -> bool {
        self.rows.first().is_some_and(|row| row.contains_key(column))
    }

    /// Create a Table from headers and raw string records (e.g. CSV)
    pub fn from_records(headers: &[String], records: Vec<Vec<String>>) -> Self {
        let rows = records
            .into_iter()
            .map(|record| {
                headers
                    .iter()
                    .cloned()
                    .zip(record.iter().map(|cell| Scalar::infer(cell)))
                    .collect::<Row>()
            })
            .collect();
        Self { rows }
    }

    /// Create a Table from a JSON Array of Objects.
    /// An empty array is a valid, empty table.
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value
            .as_array()
            .ok_or_else(|| anyhow!("Input data must be a JSON array of objects"))?;

        let mut rows = Vec::with_capacity(array.len());
        for (idx, item) in array.iter().enumerate() {
            let obj = item
                .as_object()
                .ok_or_else(|| anyhow!("Item {} in array must be an object", idx))?;

            let mut row = Row::with_capacity(obj.len());
            for (key, val) in obj {
                let scalar = Scalar::from_json(val).ok_or_else(|| {
                    anyhow!("Unsupported value type for field '{}' in row {}", key, idx)
                })?;
                row.insert(key.clone(), scalar);
            }
            rows.push(row);
        }

        Ok(Self { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_infer_scalars() {
        assert_eq!(Scalar::infer("10"), Scalar::Number(10.0));
        assert_eq!(Scalar::infer(" -2.5 "), Scalar::Number(-2.5));
        assert_eq!(Scalar::infer(""), Scalar::Null);
        assert_eq!(Scalar::infer("true"), Scalar::Bool(true));
        assert_eq!(Scalar::infer("Jan"), Scalar::Text("Jan".to_string()));
        assert_eq!(Scalar::infer("NaN"), Scalar::Text("NaN".to_string()));
    }

    #[test]
    fn test_number_equality_is_same_value_zero() {
        assert_eq!(Scalar::Number(0.0), Scalar::Number(-0.0));
        assert_eq!(Scalar::Number(f64::NAN), Scalar::Number(f64::NAN));
        assert_ne!(Scalar::Number(1.0), Scalar::Text("1".to_string()));
    }

    #[test]
    fn test_cell_reads_absent_as_null() {
        let mut row = Row::new();
        row.insert("a".to_string(), Scalar::Number(1.0));
        assert_eq!(cell(&row, "a"), &Scalar::Number(1.0));
        assert!(cell(&row, "b").is_null());
    }

    #[test]
    fn test_display() {
        assert_eq!(Scalar::Number(10.0).to_string(), "10");
        assert_eq!(Scalar::Number(1.5).to_string(), "1.5");
        assert_eq!(Scalar::Number(-0.0).to_string(), "0");
        assert_eq!(Scalar::from("A").to_string(), "A");
    }

    #[test]
    fn test_serialize_keeps_integers_integral() {
        assert_eq!(serde_json::to_value(Scalar::Number(2024.0)).unwrap(), json!(2024));
        assert_eq!(serde_json::to_value(Scalar::Number(-0.0)).unwrap(), json!(0));
        assert_eq!(serde_json::to_value(Scalar::Number(1.5)).unwrap(), json!(1.5));
        assert_eq!(serde_json::to_value(Scalar::Null).unwrap(), json!(null));
        assert_eq!(
            serde_json::to_string(&vec![Scalar::Number(2023.0), Scalar::from("Jan")]).unwrap(),
            r#"[2023,"Jan"]"#
        );
    }

    #[test]
    fn test_from_json() {
        let table = Table::from_json(&json!([
            {"month": "Jan", "sales": 10, "note": null},
            {"month": "Feb", "sales": 20.5}
        ]))
        .unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.has_column("note"));
        assert!(!table.has_column("region"));
        assert_eq!(table.rows[1]["sales"], Scalar::Number(20.5));
    }

    #[test]
    fn test_from_json_empty_array() {
        let table = Table::from_json(&json!([])).unwrap();
        assert!(table.is_empty());
        assert!(!table.has_column("anything"));
    }

    #[test]
    fn test_from_json_rejects_nested_values() {
        assert!(Table::from_json(&json!([{"a": [1, 2]}])).is_err());
        assert!(Table::from_json(&json!({"a": 1})).is_err());
        assert!(Table::from_json(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_from_records() {
        let headers = vec!["month".to_string(), "sales".to_string()];
        let table = Table::from_records(
            &headers,
            vec![vec!["Jan".to_string(), "10".to_string()], vec!["Feb".to_string(), "".to_string()]],
        );
        assert_eq!(table.rows[0]["sales"], Scalar::Number(10.0));
        assert!(table.rows[1]["sales"].is_null());
    }
}
