use nalgebra_glm::{DVec2, DVec3, DVec4};
use std::fmt;

/// A weighted control point.  Planar curves keep `z` at zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub weight: f64,
}

impl ControlPoint {
    pub fn new(x: f64, y: f64, z: f64, weight: f64) -> Self {
        Self { x, y, z, weight }
    }

    pub fn planar(x: f64, y: f64, weight: f64) -> Self {
        Self::new(x, y, 0.0, weight)
    }

    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn xy(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Lifts the point to `(w·x, w·y, w·z, w)`
    pub fn homogeneous(&self) -> DVec4 {
        let w = self.weight;
        DVec4::new(w * self.x, w * self.y, w * self.z, w)
    }

    /// Projects a homogeneous point back down, keeping its weight.  A zero
    /// weight produces non-finite coordinates.
    pub fn from_homogeneous(h: DVec4) -> Self {
        Self::new(h.x / h.w, h.y / h.w, h.z / h.w, h.w)
    }
}

impl fmt::Display for ControlPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.z == 0.0 {
            write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.weight)
        } else {
            write!(
                f,
                "({:.3}, {:.3}, {:.3}, w={:.3})",
                self.x, self.y, self.z, self.weight
            )
        }
    }
}
