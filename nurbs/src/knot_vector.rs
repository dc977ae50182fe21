use crate::error::{Error, Result};
use std::borrow::Cow;

/// A non-decreasing knot vector for a curve of known degree and
/// control-point count.
#[derive(Clone, Debug, PartialEq)]
pub struct KnotVector(Vec<f64>);

impl KnotVector {
    /// Builds a uniform clamped knot vector of length `count + degree + 1`:
    /// `degree + 1` zeros, evenly spaced interior knots, `degree + 1` ones.
    pub fn uniform(count: usize, degree: usize) -> Result<Self> {
        check_shape(count, degree)?;
        Ok(Self(clamped_uniform(count, degree)))
    }

    /// Validates an externally supplied knot vector against the curve shape.
    ///
    /// Only the length and ordering are checked.  The ends need not be
    /// clamped: evaluation runs over `[U[p], U[m - p]]` whatever those values
    /// are, and inserting a knot at either end of the domain already leaves a
    /// vector whose end multiplicity differs from `p + 1`.
    pub fn new(knots: Vec<f64>, count: usize, degree: usize) -> Result<Self> {
        let expected = count + degree + 1;
        if knots.len() != expected {
            return Err(Error::InvalidKnotVectorLength {
                expected,
                actual: knots.len(),
            });
        }
        if let Some(index) = (1..knots.len()).find(|&i| knots[i] < knots[i - 1]) {
            return Err(Error::DecreasingKnots { index });
        }
        Ok(Self(knots))
    }

    pub(crate) fn from_vec_unchecked(knots: Vec<f64>) -> Self {
        Self(knots)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Valid evaluation range `[U[p], U[m - p]]`
    pub fn domain(&self, degree: usize) -> (f64, f64) {
        domain(&self.0, degree)
    }

    /// See [`find_span`]
    pub fn span(&self, degree: usize, u: f64) -> usize {
        find_span(&self.0, degree, u)
    }

    /// Drops the knot at `index`; the caller keeps the control points in step.
    pub(crate) fn remove(&mut self, index: usize) -> f64 {
        self.0.remove(index)
    }
}

impl std::ops::Deref for KnotVector {
    type Target = [f64];
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<KnotVector> for Vec<f64> {
    fn from(k: KnotVector) -> Self {
        k.0
    }
}

pub(crate) fn check_shape(count: usize, degree: usize) -> Result<()> {
    if degree == 0 {
        Err(Error::InvalidDegree)
    } else if count < degree + 1 {
        Err(Error::TooFewControlPoints { count, degree })
    } else {
        Ok(())
    }
}

/// Knot values for `count` points of degree `p`, assuming
/// `count >= p + 1` (otherwise the interior spacing divides by zero).
pub(crate) fn clamped_uniform(count: usize, p: usize) -> Vec<f64> {
    let n = count - 1;
    let m = n + p + 1;
    (0..=m)
        .map(|i| {
            if i <= p {
                0.0
            } else if i >= m - p {
                1.0
            } else {
                (i - p) as f64 / (m - 2 * p) as f64
            }
        })
        .collect()
}

/// Returns `U` when it fits `count` points of degree `p`.  A vector of the
/// wrong length is replaced by a fresh uniform one for the caller's pass;
/// a shape that no knot vector can carry is an error.
pub(crate) fn repair(U: &[f64], count: usize, p: usize) -> Result<Cow<'_, [f64]>> {
    check_shape(count, p)?;
    if U.len() == count + p + 1 {
        Ok(Cow::Borrowed(U))
    } else {
        log::warn!(
            "knot vector has {} entries for {} points of degree {}, using a uniform one",
            U.len(),
            count,
            p
        );
        Ok(Cow::Owned(clamped_uniform(count, p)))
    }
}

pub(crate) fn domain(U: &[f64], p: usize) -> (f64, f64) {
    (U[p], U[U.len() - p - 1])
}

/// Finds the span `k` in `[p, m - p - 1]` with `U[k] <= u < U[k + 1]`.
///
/// The closed upper bound `u == U[m - p]` maps to `m - p - 1`, stepping back
/// past empty spans if the end knot has been repeated more than `p + 1`
/// times.  Values outside the domain land on the first or last span, so the
/// result always addresses `p + 1` real control points.
pub fn find_span(U: &[f64], p: usize, u: f64) -> usize {
    let m = U.len() - 1;
    let last = m - p - 1;
    if u >= U[m - p] {
        return (p..=last).rev().find(|&k| U[k] < U[k + 1]).unwrap_or(last);
    }
    (p..last).find(|&k| u < U[k + 1]).unwrap_or(last)
}
