// Parser for command-line axis expressions
//
// Grammar:
//   list  := item ("," item)*
//   item  := column ("(" (arg ("," arg)*)? ")")?
//   column:= identifier | "quoted name"
//   arg   := identifier ":" (string | bool | number)

use super::lexer::{bool_literal, identifier, number_literal, string_literal, ws};
use crate::axis::{AxisSpec, SeriesOptions};
use anyhow::{anyhow, Result};
use nom::{
    branch::alt,
    character::complete::char,
    combinator::{eof, map, map_opt, opt},
    multi::{separated_list0, separated_list1},
    sequence::{delimited, separated_pair},
    IResult,
};
use serde_json::Value;

fn option_value(input: &str) -> IResult<&str, Value> {
    alt((
        map(string_literal, Value::String),
        map(bool_literal, Value::Bool),
        map_opt(number_literal, number_to_json),
    ))(input)
}

/// Whole numbers stay integers so they serialize as `2`, not `2.0`
fn number_to_json(n: f64) -> Option<Value> {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Some(Value::from(n as i64))
    } else {
        serde_json::Number::from_f64(n).map(Value::Number)
    }
}

fn named_arg(input: &str) -> IResult<&str, (String, Value)> {
    separated_pair(ws(identifier), ws(char(':')), ws(option_value))(input)
}

/// Parse one axis item, e.g. `sales` or `sales(color: "red", smoothLines: true)`
pub fn parse_axis_item(input: &str) -> IResult<&str, AxisSpec> {
    let (input, column) = ws(alt((identifier, string_literal)))(input)?;
    let (input, args) = opt(delimited(
        ws(char('(')),
        separated_list0(ws(char(',')), named_arg),
        ws(char(')')),
    ))(input)?;

    let series_options: SeriesOptions = args.unwrap_or_default().into_iter().collect();
    Ok((input, AxisSpec::new(column).with_options(series_options)))
}

pub fn parse_axis_list(input: &str) -> IResult<&str, Vec<AxisSpec>> {
    separated_list1(ws(char(',')), parse_axis_item)(input)
}

/// Parse a complete axis expression; trailing input is an error
pub fn parse_axis_expr(input: &str) -> Result<Vec<AxisSpec>> {
    let (_, (specs, _)) = nom::sequence::pair(parse_axis_list, ws(eof))(input)
        .map_err(|e| anyhow!("Parse error in axis expression '{}': {:?}", input, e))?;
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::ColumnKey;
    use serde_json::json;

    #[test]
    fn test_parse_bare_column() {
        let specs = parse_axis_expr("month").unwrap();
        assert_eq!(specs, vec![AxisSpec::new("month")]);
    }

    #[test]
    fn test_parse_column_list() {
        let specs = parse_axis_expr(" month , region ").unwrap();
        assert_eq!(specs, vec![AxisSpec::new("month"), AxisSpec::new("region")]);
    }

    #[test]
    fn test_parse_with_options() {
        let specs =
            parse_axis_expr(r#"sales(color: "red", smoothLines: true, width: 2, alpha: 0.5), cost"#)
                .unwrap();
        assert_eq!(specs.len(), 2);
        let opts = &specs[0].series_options;
        assert_eq!(opts["color"], json!("red"));
        assert_eq!(opts["smoothLines"], json!(true));
        assert_eq!(opts["width"], json!(2));
        assert_eq!(opts["alpha"], json!(0.5));
        assert!(specs[1].series_options.is_empty());
    }

    #[test]
    fn test_parse_quoted_column() {
        let specs = parse_axis_expr(r#""unit price"()"#).unwrap();
        assert_eq!(specs[0].column, ColumnKey::Name("unit price".to_string()));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_axis_expr("").is_err());
        assert!(parse_axis_expr("sales(color red)").is_err());
        assert!(parse_axis_expr("sales(color: \"red\"").is_err());
        assert!(parse_axis_expr("sales,, cost").is_err());
        assert!(parse_axis_expr("sales cost").is_err());
    }
}
