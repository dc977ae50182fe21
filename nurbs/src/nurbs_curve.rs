use crate::{
    basis, de_boor,
    error::{Error, Result},
    insert::insert_knot,
    knot_vector::{check_shape, clamped_uniform, KnotVector},
    sampled_curve::SampledCurve,
    ControlPoint,
};
use nalgebra_glm::DVec3;
use std::{borrow::Cow, f64::consts::FRAC_1_SQRT_2};

/// An editable rational B-spline curve.
///
/// The control polygon and knot vector are only changed together, so
/// `knots.len() == control_points.len() + degree + 1` holds between calls.
#[derive(Clone, Debug, PartialEq)]
pub struct NurbsCurve {
    control_points: Vec<ControlPoint>,
    degree: usize,
    knots: KnotVector,
}

impl NurbsCurve {
    /// Builds a curve with a uniform clamped knot vector
    pub fn new(control_points: Vec<ControlPoint>, degree: usize) -> Result<Self> {
        let knots = KnotVector::uniform(control_points.len(), degree)?;
        Ok(Self {
            control_points,
            degree,
            knots,
        })
    }

    pub fn with_knots(
        control_points: Vec<ControlPoint>,
        degree: usize,
        knots: Vec<f64>,
    ) -> Result<Self> {
        check_shape(control_points.len(), degree)?;
        let knots = KnotVector::new(knots, control_points.len(), degree)?;
        Ok(Self {
            control_points,
            degree,
            knots,
        })
    }

    fn seed(control_points: Vec<ControlPoint>, degree: usize) -> Self {
        let knots = KnotVector::from_vec_unchecked(clamped_uniform(control_points.len(), degree));
        Self {
            control_points,
            degree,
            knots,
        }
    }

    /// Exact quarter of the unit circle: a quadratic with its middle point on
    /// the tangent intersection `(1, 1)`, weighted by `cos 45°`.
    pub fn quarter_circle() -> Self {
        Self::seed(
            vec![
                ControlPoint::planar(1.0, 0.0, 1.0),
                ControlPoint::planar(1.0, 1.0, FRAC_1_SQRT_2),
                ControlPoint::planar(0.0, 1.0, 1.0),
            ],
            2,
        )
    }

    /// A planar six-point cubic
    pub fn cubic() -> Self {
        Self::seed(
            vec![
                ControlPoint::planar(-0.5, 0.0, 1.0),
                ControlPoint::planar(-0.2, 0.8, 1.0),
                ControlPoint::planar(0.4, 1.0, 1.0),
                ControlPoint::planar(0.8, 0.2, 1.0),
                ControlPoint::planar(1.4, 0.1, 1.0),
                ControlPoint::planar(1.6, 0.9, 1.0),
            ],
            3,
        )
    }

    /// A quadratic lifted out of the XY plane
    pub fn spatial() -> Self {
        Self::seed(
            vec![
                ControlPoint::new(1.0, 0.0, 0.0, 1.0),
                ControlPoint::new(1.0, 1.0, 1.0, 1.0),
                ControlPoint::new(0.0, 1.0, 0.0, 1.0),
            ],
            2,
        )
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    pub fn domain(&self) -> (f64, f64) {
        self.knots.domain(self.degree)
    }

    /// Evaluates the curve at `u` with de Boor's recursion.  Degenerate
    /// weights or knot spans surface as NaN.
    pub fn point(&self, u: f64) -> DVec3 {
        de_boor::eval(&self.knots, self.degree, &self.control_points, u)
    }

    /// Same as [`point`](Self::point), summing every basis function instead
    pub fn point_global(&self, u: f64) -> DVec3 {
        basis::eval(&self.knots, self.degree, &self.control_points, u)
    }

    /// Like [`point`](Self::point), but reports a non-finite result
    pub fn try_point(&self, u: f64) -> Result<DVec3> {
        let p = self.point(u);
        if p.iter().all(|c| c.is_finite()) {
            Ok(p)
        } else {
            Err(Error::NumericDegeneracy { u })
        }
    }

    /// Polyline with `count` segments across the domain
    pub fn samples(&self, count: usize) -> SampledCurve<'_> {
        SampledCurve::from_parts(
            Cow::Borrowed(self.knots.as_slice()),
            self.degree,
            &self.control_points,
            count,
        )
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.control_points.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.control_points.len(),
            })
        }
    }

    /// Replaces one control point, returning the old one
    pub fn set_control_point(&mut self, index: usize, point: ControlPoint) -> Result<ControlPoint> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.control_points[index], point))
    }

    /// Moves a control point within the XY plane, keeping `z` and the weight
    pub fn move_control_point(&mut self, index: usize, x: f64, y: f64) -> Result<ControlPoint> {
        self.check_index(index)?;
        let old = self.control_points[index];
        self.set_control_point(index, ControlPoint { x, y, ..old })
    }

    pub fn set_weight(&mut self, index: usize, weight: f64) -> Result<ControlPoint> {
        self.check_index(index)?;
        let old = self.control_points[index];
        self.set_control_point(index, ControlPoint { weight, ..old })
    }

    /// Changes the degree and regenerates a uniform knot vector, discarding
    /// any refinement.
    pub fn set_degree(&mut self, degree: usize) -> Result<()> {
        let knots = KnotVector::uniform(self.control_points.len(), degree)?;
        log::debug!("degree {} -> {}", self.degree, degree);
        self.degree = degree;
        self.knots = knots;
        Ok(())
    }

    /// Replaces the knot vector after validating it against the curve shape
    pub fn set_knots(&mut self, knots: Vec<f64>) -> Result<()> {
        self.knots = KnotVector::new(knots, self.control_points.len(), self.degree)?;
        Ok(())
    }

    /// Refines the curve with one more knot at `u` without changing its shape
    pub fn insert_knot(&mut self, u: f64) -> Result<()> {
        let (knots, points) = insert_knot(&self.knots, self.degree, &self.control_points, u)?;
        log::debug!("inserted knot {} ({} control points)", u, points.len());
        self.knots = KnotVector::from_vec_unchecked(knots);
        self.control_points = points;
        Ok(())
    }

    /// Removes the control point at `index` together with the knot at the
    /// same index.  The shape changes; this is not the inverse of insertion.
    pub fn remove_control_point(&mut self, index: usize) -> Result<ControlPoint> {
        self.check_index(index)?;
        check_shape(self.control_points.len() - 1, self.degree)?;
        self.knots.remove(index);
        let removed = self.control_points.remove(index);
        log::debug!("removed control point {} {}", index, removed);
        Ok(removed)
    }
}
