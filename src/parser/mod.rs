// Axis expression parser module

pub mod axis_expr;
pub mod lexer;

// Public API re-exports
pub use axis_expr::{parse_axis_expr, parse_axis_item, parse_axis_list};
