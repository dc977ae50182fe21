use nalgebra_glm::DVec2;
use nurbs::ControlPoint;

/// Clicks within this many pixels of a control point grab it
pub const PICK_RADIUS: f64 = 8.0;

/// Maps the planar model onto screen pixels: a fixed scale and origin plus a
/// user-controlled pan offset, with `y` flipped so it grows upwards in the
/// model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanarView {
    pub scale: f64,
    pub origin: DVec2,
    pub pan: DVec2,
}

impl Default for PlanarView {
    fn default() -> Self {
        Self {
            scale: 200.0,
            origin: DVec2::new(200.0, 400.0),
            pan: DVec2::zeros(),
        }
    }
}

impl PlanarView {
    pub fn to_screen(&self, model: DVec2) -> DVec2 {
        DVec2::new(
            self.origin.x + self.pan.x + model.x * self.scale,
            self.origin.y + self.pan.y - model.y * self.scale,
        )
    }

    /// Inverse of [`to_screen`](Self::to_screen), used while dragging
    pub fn to_model(&self, screen: DVec2) -> DVec2 {
        DVec2::new(
            (screen.x - self.origin.x - self.pan.x) / self.scale,
            (self.origin.y + self.pan.y - screen.y) / self.scale,
        )
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan += DVec2::new(dx, dy);
    }

    /// Index of the first control point within [`PICK_RADIUS`] of `click`
    pub fn pick(&self, points: &[ControlPoint], click: DVec2) -> Option<usize> {
        points
            .iter()
            .position(|cp| (self.to_screen(cp.xy()) - click).norm() < PICK_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_round_trip() {
        let mut v = PlanarView::default();
        assert_eq!(v.to_screen(DVec2::new(1.0, 0.5)), DVec2::new(400.0, 300.0));
        v.pan_by(15.0, -20.0);
        let p = DVec2::new(0.25, -0.75);
        assert!((v.to_model(v.to_screen(p)) - p).norm() < 1e-12);
    }

    #[test]
    fn picking() {
        let v = PlanarView::default();
        let points = [
            ControlPoint::planar(0.0, 0.0, 1.0),
            ControlPoint::planar(1.0, 0.0, 1.0),
            ControlPoint::planar(1.01, 0.0, 1.0),
        ];
        assert_eq!(v.pick(&points, DVec2::new(203.0, 397.0)), Some(0));
        // Overlapping points resolve to the first one
        assert_eq!(v.pick(&points, DVec2::new(401.0, 400.0)), Some(1));
        assert_eq!(v.pick(&points, DVec2::new(300.0, 300.0)), None);
    }
}
