use crate::ControlPoint;
use rand::Rng;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random spatial control polygon with strictly positive weights
pub fn random_points<R: Rng>(rng: &mut R, count: usize) -> Vec<ControlPoint> {
    (0..count)
        .map(|_| {
            ControlPoint::new(
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(0.25..2.0),
            )
        })
        .collect()
}

pub fn assert_close(a: nalgebra_glm::DVec3, b: nalgebra_glm::DVec3, tol: f64) {
    assert!(
        (a - b).norm() <= tol,
        "{:?} and {:?} differ by {}",
        a,
        b,
        (a - b).norm()
    );
}
