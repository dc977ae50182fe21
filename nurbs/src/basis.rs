//! Global evaluation by summing every weighted basis function.
//!
//! Each call rebuilds the whole Cox–de Boor tree, so this is exponential in
//! the degree.  It exists as an independent reference for [`crate::de_boor`].
use crate::{error::Result, knot_vector::repair, ControlPoint};
use nalgebra_glm::DVec3;

/// Cox–de Boor recursion for `N[i,p](u)`.
///
/// The degree-0 step is half-open, except that `u` sitting on the final knot
/// lights up the last non-empty span so the curve end evaluates cleanly.
pub fn basis(U: &[f64], i: usize, p: usize, u: f64) -> f64 {
    if p == 0 {
        let last = U[U.len() - 1];
        let inside = U[i] <= u && u < U[i + 1];
        let at_end = u == last && U[i] < U[i + 1] && U[i + 1] == last;
        return if inside || at_end { 1.0 } else { 0.0 };
    }

    let d1 = U[i + p] - U[i];
    let d2 = U[i + p + 1] - U[i + 1];
    let a = if d1 != 0.0 {
        (u - U[i]) / d1 * basis(U, i, p - 1, u)
    } else {
        0.0
    };
    let b = if d2 != 0.0 {
        (U[i + p + 1] - u) / d2 * basis(U, i + 1, p - 1, u)
    } else {
        0.0
    };
    a + b
}

/// Evaluates the rational curve as `Σ wᵢNᵢPᵢ / Σ wᵢNᵢ`.
///
/// A knot vector of the wrong length is swapped for a uniform one first.  A
/// vanishing denominator (e.g. all weights zero) yields NaN coordinates.
pub fn point(U: &[f64], p: usize, P: &[ControlPoint], u: f64) -> Result<DVec3> {
    let U = repair(U, P.len(), p)?;
    Ok(eval(&U, p, P, u))
}

pub(crate) fn eval(U: &[f64], p: usize, P: &[ControlPoint], u: f64) -> DVec3 {
    let mut numerator = DVec3::zeros();
    let mut denominator = 0.0;
    for (i, cp) in P.iter().enumerate() {
        let wN = cp.weight * basis(U, i, p, u);
        numerator += cp.position() * wN;
        denominator += wN;
    }
    numerator / denominator
}
