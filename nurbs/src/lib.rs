#![allow(clippy::needless_range_loop)]
// The curve algorithms are written against the textbook notation (U for the
// knot vector, P for the control polygon, p for the degree), so we keep the
// single-character names.
#![allow(non_snake_case)]

pub mod basis;
mod control_point;
pub mod de_boor;
mod error;
mod insert;
mod knot_vector;
mod nurbs_curve;
mod sampled_curve;

#[cfg(test)]
mod testing;

use nalgebra_glm::DVec4;
use smallvec::SmallVec;
type VecH = SmallVec<[DVec4; 8]>;

pub use crate::control_point::ControlPoint;
pub use crate::error::{Error, Result};
pub use crate::insert::insert_knot;
pub use crate::knot_vector::{find_span, KnotVector};
pub use crate::nurbs_curve::NurbsCurve;
pub use crate::sampled_curve::{sample_curve, Evaluation, SampledCurve};
