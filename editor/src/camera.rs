use nalgebra_glm as glm;
use glm::{DMat4, DVec2, DVec3};
use std::f64::consts::FRAC_PI_2;

/// Radians of orbit per pixel of mouse travel
const ORBIT_SPEED: f64 = 0.01;
/// Fractional change in distance per zoom step
const ZOOM_STEP: f64 = 0.1;
/// Elevation stays this far away from the poles
const POLE_MARGIN: f64 = 0.1;
const MAX_ELEVATION: f64 = FRAC_PI_2 - POLE_MARGIN;

/// A perspective camera orbiting a fixed target.
///
/// `position` is derived from `(azimuth, elevation, distance)` whenever one of
/// them changes; azimuth is measured from +Z towards +X and elevation from the
/// XZ plane towards +Y.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    position: DVec3,
    target: DVec3,
    up: DVec3,

    /// Vertical field of view, in degrees
    pub fov: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,

    azimuth: f64,
    elevation: f64,
    distance: f64,
}

impl Camera {
    pub fn new(
        position: DVec3,
        target: DVec3,
        up: DVec3,
        fov: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) -> Self {
        // A start too close to a pole is pulled back to the orbit limit, so
        // the position passed in may move.
        let offset = position - target;
        let distance = glm::length(&offset);
        let (azimuth, elevation) = if distance > 0.0 {
            (offset.x.atan2(offset.z), (offset.y / distance).asin())
        } else {
            (0.0, 0.0)
        };
        let clamped = elevation.clamp(-MAX_ELEVATION, MAX_ELEVATION);
        let mut camera = Self {
            position,
            target,
            up,
            fov,
            aspect,
            near,
            far,
            azimuth,
            elevation: clamped,
            distance,
        };
        if clamped != elevation {
            camera.update_position();
        }
        camera
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn target(&self) -> DVec3 {
        self.target
    }

    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.aspect = width / height;
    }

    /// Rotates around the target by a mouse delta in pixels
    pub fn orbit(&mut self, dx: f64, dy: f64) {
        self.azimuth += dx * ORBIT_SPEED;
        self.elevation = (self.elevation + dy * ORBIT_SPEED).clamp(-MAX_ELEVATION, MAX_ELEVATION);
        self.update_position();
    }

    /// Scales the distance to the target by `1 + steps / 10`.  Negative steps
    /// move closer; large ones can push the distance to zero or below.
    pub fn zoom(&mut self, steps: f64) {
        self.distance *= 1.0 + steps * ZOOM_STEP;
        self.update_position();
    }

    fn update_position(&mut self) {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        self.position = self.target + DVec3::new(ce * sa, se, ce * ca) * self.distance;
    }

    pub fn view_matrix(&self) -> DMat4 {
        glm::look_at(&self.position, &self.target, &self.up)
    }

    pub fn projection_matrix(&self) -> DMat4 {
        glm::perspective(self.aspect, self.fov.to_radians(), self.near, self.far)
    }

    /// Projects a world-space point to pixel coordinates, with `y` growing
    /// downwards.
    pub fn project(&self, point: &DVec3, width: f64, height: f64) -> DVec2 {
        let clip = self.projection_matrix() * self.view_matrix() * glm::vec4(point.x, point.y, point.z, 1.0);
        let ndc = if clip.w != 0.0 {
            clip.xyz() / clip.w
        } else {
            clip.xyz()
        };
        DVec2::new(
            (ndc.x + 1.0) / 2.0 * width,
            (1.0 - (ndc.y + 1.0) / 2.0) * height,
        )
    }
}

impl Default for Camera {
    /// Five units down +Z, looking at the origin
    fn default() -> Self {
        Self::new(
            DVec3::new(0.0, 0.0, 5.0),
            DVec3::zeros(),
            DVec3::new(0.0, 1.0, 0.0),
            60.0,
            1.0,
            0.1,
            100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: DVec3, b: DVec3) -> bool {
        glm::length(&(a - b)) < 1e-12
    }

    #[test]
    fn derives_orbit_state() {
        let c = Camera::default();
        assert_eq!(c.distance(), 5.0);
        assert_eq!(c.azimuth(), 0.0);
        assert_eq!(c.elevation(), 0.0);

        let c = Camera::new(
            DVec3::new(3.0, 0.0, 4.0),
            DVec3::zeros(),
            DVec3::new(0.0, 1.0, 0.0),
            45.0,
            1.5,
            0.1,
            100.0,
        );
        assert_eq!(c.distance(), 5.0);
        assert!((c.azimuth() - 3f64.atan2(4.0)).abs() < 1e-12);
    }

    #[test]
    fn identity_moves() {
        let mut c = Camera::new(
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(0.5, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            60.0,
            1.0,
            0.1,
            100.0,
        );
        let before = c.position();
        c.orbit(0.0, 0.0);
        c.zoom(0.0);
        assert!(close(c.position(), before), "{:?} vs {:?}", c.position(), before);
    }

    #[test]
    fn start_above_the_pole_is_clamped() {
        let mut c = Camera::new(
            DVec3::new(0.0, 5.0, 0.0),
            DVec3::zeros(),
            DVec3::new(0.0, 1.0, 0.0),
            60.0,
            1.0,
            0.1,
            100.0,
        );
        assert!((c.elevation() - MAX_ELEVATION).abs() < 1e-12);
        assert!((glm::length(&c.position()) - 5.0).abs() < 1e-12);
        assert!((c.position().y - 5.0 * MAX_ELEVATION.sin()).abs() < 1e-12);

        let before = c.position();
        c.orbit(0.0, 0.0);
        assert!(close(c.position(), before), "{:?} vs {:?}", c.position(), before);
    }

    #[test]
    fn zooming_in_shrinks_towards_zero() {
        let mut c = Camera::default();
        let mut last = c.distance();
        for _ in 0..10 {
            c.zoom(-1.0);
            assert!(c.distance() < last);
            assert!(c.distance() > 0.0);
            last = c.distance();
        }
        assert!((c.distance() - 5.0 * 0.9f64.powi(10)).abs() < 1e-12);
        assert!((glm::length(&(c.position() - c.target())) - c.distance()).abs() < 1e-12);
    }

    #[test]
    fn elevation_is_clamped() {
        let mut c = Camera::default();
        c.orbit(0.0, 1000.0);
        assert!((c.elevation() - (FRAC_PI_2 - POLE_MARGIN)).abs() < 1e-12);
        c.orbit(0.0, -5000.0);
        assert!((c.elevation() + (FRAC_PI_2 - POLE_MARGIN)).abs() < 1e-12);
    }

    #[test]
    fn orbit_quarter_turn() {
        let mut c = Camera::default();
        c.orbit(FRAC_PI_2 / ORBIT_SPEED, 0.0);
        assert!(close(c.position(), DVec3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn projection() {
        let c = Camera::default();
        let centre = c.project(&DVec3::zeros(), 800.0, 600.0);
        assert!((centre - DVec2::new(400.0, 300.0)).norm() < 1e-9);

        // Up in the world is up on screen, right is right
        let above = c.project(&DVec3::new(0.0, 1.0, 0.0), 800.0, 600.0);
        assert!(above.y < 300.0);
        let right = c.project(&DVec3::new(1.0, 0.0, 0.0), 800.0, 600.0);
        assert!(right.x > 400.0);

        // A point at the edge of the vertical field of view lands on the edge
        let half = 30f64.to_radians().tan() * 5.0;
        let top = c.project(&DVec3::new(0.0, half, 0.0), 600.0, 600.0);
        assert!(top.y.abs() < 1e-9, "{:?}", top);
    }

    #[test]
    fn aspect_follows_size() {
        let mut c = Camera::default();
        c.set_size(800.0, 400.0);
        assert_eq!(c.aspect, 2.0);
    }
}
