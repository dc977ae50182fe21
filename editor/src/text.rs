//! Text entered into and shown by the editor panels.
use crate::error::{Error, Result};
use itertools::Itertools;
use nurbs::ControlPoint;

fn malformed(input: &str) -> Error {
    Error::MalformedNumericInput {
        input: input.to_owned(),
    }
}

/// Parses one finite real, ignoring surrounding whitespace
pub fn parse_number(input: &str) -> Result<f64> {
    match fast_float::parse::<f64, _>(input.trim()) {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(malformed(input)),
    }
}

pub fn parse_count(input: &str) -> Result<usize> {
    input.trim().parse().map_err(|_| malformed(input))
}

/// Parses a knot vector written as reals separated by commas and/or
/// whitespace, e.g. `0, 0, 0.5, 1, 1`.
pub fn parse_knots(input: &str) -> Result<Vec<f64>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(parse_number)
        .collect()
}

pub fn format_knots(knots: &[f64]) -> String {
    knots.iter().map(|k| format!("{:?}", k)).join(", ")
}

/// One `P{i} = (x, y, w)` line per control point
pub fn format_polygon(points: &[ControlPoint]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, cp)| format!("P{} = {}", i, cp))
        .join("\n")
}
