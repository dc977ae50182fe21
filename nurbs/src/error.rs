use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("knot value {u} lies outside the curve domain [{min}, {max}]")]
    InvalidDomainValue { u: f64, min: f64, max: f64 },

    #[error("knot vector has {actual} entries, expected {expected}")]
    InvalidKnotVectorLength { expected: usize, actual: usize },

    #[error("knot {index} is smaller than the knot before it")]
    DecreasingKnots { index: usize },

    #[error("control point {index} is out of range ({len} points)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("curve degree must be at least 1")]
    InvalidDegree,

    #[error("{count} control points are too few for a degree {degree} curve")]
    TooFewControlPoints { count: usize, degree: usize },

    #[error("curve evaluates to a non-finite point at u = {u}")]
    NumericDegeneracy { u: f64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
