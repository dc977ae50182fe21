use crate::{
    basis, de_boor,
    error::Result,
    knot_vector::{domain, repair},
    ControlPoint,
};
use nalgebra_glm::DVec3;
use std::borrow::Cow;

/// Which evaluator a [`SampledCurve`] uses
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Evaluation {
    /// Weighted basis-function sum over every control point
    Global,
    /// Homogeneous de Boor recursion over the containing span
    #[default]
    DeBoor,
}

impl Evaluation {
    /// Evaluates with this method, repairing a knot vector of the wrong
    /// length first
    pub fn point(self, U: &[f64], p: usize, P: &[ControlPoint], u: f64) -> Result<DVec3> {
        let U = repair(U, P.len(), p)?;
        Ok(self.eval(&U, p, P, u))
    }

    fn eval(self, U: &[f64], p: usize, P: &[ControlPoint], u: f64) -> DVec3 {
        match self {
            Evaluation::Global => basis::eval(U, p, P, u),
            Evaluation::DeBoor => de_boor::eval(U, p, P, u),
        }
    }
}

/// A one-shot polyline over the curve domain: `count + 1` points at
/// uniformly spaced parameters from `U[p]` to `U[m - p]`.
pub struct SampledCurve<'a> {
    knots: Cow<'a, [f64]>,
    degree: usize,
    points: &'a [ControlPoint],
    evaluation: Evaluation,
    start: f64,
    end: f64,
    count: usize,
    next: usize,
}

impl<'a> SampledCurve<'a> {
    /// Samples the curve with `count` segments.
    ///
    /// A knot vector whose length does not match `points.len() + degree + 1`
    /// is replaced by a fresh uniform one for this pass; the caller still owns
    /// the stale vector.
    pub fn new(
        knots: &'a [f64],
        degree: usize,
        points: &'a [ControlPoint],
        count: usize,
    ) -> Result<Self> {
        let knots = repair(knots, points.len(), degree)?;
        Ok(Self::from_parts(knots, degree, points, count))
    }

    /// Skips validation; `knots` must already match the control polygon.
    pub(crate) fn from_parts(
        knots: Cow<'a, [f64]>,
        degree: usize,
        points: &'a [ControlPoint],
        count: usize,
    ) -> Self {
        let (start, end) = domain(&knots, degree);
        Self {
            knots,
            degree,
            points,
            evaluation: Evaluation::default(),
            start,
            end,
            count,
            next: 0,
        }
    }

    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// The knot vector actually being sampled
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    fn parameter(&self, i: usize) -> f64 {
        if self.count == 0 {
            self.start
        } else {
            self.start + (self.end - self.start) * i as f64 / self.count as f64
        }
    }
}

impl<'a> Iterator for SampledCurve<'a> {
    type Item = DVec3;

    fn next(&mut self) -> Option<DVec3> {
        if self.next > self.count {
            return None;
        }
        let u = self.parameter(self.next);
        self.next += 1;
        Some(
            self.evaluation
                .eval(&self.knots, self.degree, self.points, u),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for SampledCurve<'a> {}
impl<'a> std::iter::FusedIterator for SampledCurve<'a> {}

/// Convenience wrapper around [`SampledCurve::new`]
pub fn sample_curve<'a>(
    knots: &'a [f64],
    degree: usize,
    points: &'a [ControlPoint],
    count: usize,
) -> Result<SampledCurve<'a>> {
    SampledCurve::new(knots, degree, points, count)
}
