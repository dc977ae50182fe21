//! Local evaluation by de Boor's recursion in homogeneous coordinates.
use crate::{
    error::Result,
    knot_vector::{find_span, repair},
    ControlPoint, VecH,
};
use nalgebra_glm::DVec3;

/// Evaluates the rational curve at `u` by blending the `p + 1` control points
/// of the containing span as `(w·x, w·y, w·z, w)`, then dividing through by
/// the final weight.
///
/// A knot vector whose length does not match `P.len() + p + 1` is swapped
/// for a uniform one first.  Zero-length spans inside the blend produce NaN
/// rather than an error.
pub fn point(U: &[f64], p: usize, P: &[ControlPoint], u: f64) -> Result<DVec3> {
    let U = repair(U, P.len(), p)?;
    Ok(eval(&U, p, P, u))
}

/// [`point`] without the knot check; `U` must already fit `P` and `p`.
pub(crate) fn eval(U: &[f64], p: usize, P: &[ControlPoint], u: f64) -> DVec3 {
    let k = find_span(U, p, u);

    // d[j] holds the homogeneous point for control point k - p + j
    let mut d: VecH = P[k - p..=k].iter().map(|cp| cp.homogeneous()).collect();
    for r in 1..=p {
        for j in (r..=p).rev() {
            let i = k - p + j;
            let alpha = (u - U[i]) / (U[i + p - r + 1] - U[i]);
            d[j] = d[j - 1] * (1.0 - alpha) + d[j] * alpha;
        }
    }
    let h = d[p];
    h.xyz() / h.w
}
