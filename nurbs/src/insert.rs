//! Boehm's knot insertion.
use crate::{
    error::{Error, Result},
    knot_vector::{check_shape, domain, find_span},
    ControlPoint,
};

/// Inserts `u` once into `U`, returning the refined knot vector and control
/// polygon.  Both grow by exactly one entry and describe the same curve.
///
/// Inputs are never modified, so a failed insertion leaves the caller's
/// curve as it was.  Repeated knots beyond multiplicity `p` divide by zero
/// and are not guarded.
pub fn insert_knot(
    U: &[f64],
    p: usize,
    P: &[ControlPoint],
    u: f64,
) -> Result<(Vec<f64>, Vec<ControlPoint>)> {
    check_shape(P.len(), p)?;
    let expected = P.len() + p + 1;
    if U.len() != expected {
        return Err(Error::InvalidKnotVectorLength {
            expected,
            actual: U.len(),
        });
    }

    let (min, max) = domain(U, p);
    if !(min..=max).contains(&u) {
        return Err(Error::InvalidDomainValue { u, min, max });
    }
    let k = find_span(U, p, u);

    let mut knots = Vec::with_capacity(U.len() + 1);
    knots.extend_from_slice(&U[..=k]);
    knots.push(u);
    knots.extend_from_slice(&U[k + 1..]);

    // Points up to k - p survive, k - p + 1..=k are blended from their
    // neighbours in homogeneous space, and the tail shifts up by one.
    let mut points = Vec::with_capacity(P.len() + 1);
    points.extend_from_slice(&P[..=k - p]);
    for i in (k - p + 1)..=k {
        let alpha = (u - U[i]) / (U[i + p] - U[i]);
        let h = P[i - 1].homogeneous() * (1.0 - alpha) + P[i].homogeneous() * alpha;
        points.push(ControlPoint::from_homogeneous(h));
    }
    points.extend_from_slice(&P[k..]);

    Ok((knots, points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        de_boor,
        knot_vector::clamped_uniform,
        testing::{assert_close, random_points, rng},
    };

    fn line(xs: &[f64]) -> Vec<ControlPoint> {
        xs.iter().map(|&x| ControlPoint::planar(x, 0.0, 1.0)).collect()
    }

    #[test]
    fn degree_1() {
        let (U, P) = insert_knot(&[0.0, 0.0, 1.0, 1.0], 1, &line(&[-1.0, 1.0]), 0.5).unwrap();
        assert_eq!(U, vec![0.0, 0.0, 0.5, 1.0, 1.0]);
        assert_eq!(P, line(&[-1.0, 0.0, 1.0]));
    }

    #[test]
    fn degree_2() {
        let U = clamped_uniform(3, 2);
        let (U, P) = insert_knot(&U, 2, &line(&[-1.0, 0.0, 1.0]), 0.5).unwrap();
        assert_eq!(U, vec![0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0]);
        assert_eq!(P, line(&[-1.0, -0.5, 0.5, 1.0]));
    }

    #[test]
    fn cubic_grows_by_one() {
        let mut rng = rng(6);
        let P = random_points(&mut rng, 6);
        let U = clamped_uniform(6, 3);
        assert_eq!(U.len(), 10);

        let (U2, P2) = insert_knot(&U, 3, &P, 0.5).unwrap();
        assert_eq!(U2.len(), 11);
        assert_eq!(P2.len(), 7);
        assert!(U2.windows(2).all(|w| w[0] <= w[1]), "{:?}", U2);
        assert!(U2[..4].iter().all(|&u| u == 0.0));
        assert!(U2[7..].iter().all(|&u| u == 1.0));
        assert!(U2.contains(&0.5));
    }

    #[test]
    fn shape_preserving() {
        let mut rng = rng(0xb0e);
        for p in 1..=5 {
            for extra in 0..4 {
                let count = p + 1 + extra;
                let P = random_points(&mut rng, count);
                let U = clamped_uniform(count, p);
                for &u in &[0.0, 0.05, 0.3, 0.5, 0.77, 0.999, 1.0] {
                    let (U2, P2) = insert_knot(&U, p, &P, u).unwrap();
                    for s in 0..=60 {
                        let t = s as f64 / 60.0;
                        assert_close(
                            de_boor::eval(&U, p, &P, t),
                            de_boor::eval(&U2, p, &P2, t),
                            1e-9,
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn insert_at_upper_bound() {
        let mut rng = rng(7);
        let P = random_points(&mut rng, 6);
        let U = clamped_uniform(6, 3);
        let (U2, P2) = insert_knot(&U, 3, &P, 1.0).unwrap();
        assert_eq!(U2.len(), 11);
        assert_eq!(&U2[6..], &[1.0; 5]);
        assert_eq!(P2.len(), 7);
        assert_eq!(P2[6], P[5]);
        assert_close(de_boor::eval(&U2, 3, &P2, 1.0), P[5].position(), 1e-12);

        // Upper bound of a vector whose end is not clamped
        let P = line(&[0.0, 1.0, 2.0]);
        let U = [0.0, 0.0, 0.0, 0.5, 1.0, 2.0];
        let (U2, P2) = insert_knot(&U, 2, &P, 0.5).unwrap();
        assert_eq!(U2, vec![0.0, 0.0, 0.0, 0.5, 0.5, 1.0, 2.0]);
        assert_eq!(P2.len(), 4);
        for s in 0..=20 {
            let t = s as f64 / 40.0;
            assert_close(
                de_boor::eval(&U, 2, &P, t),
                de_boor::eval(&U2, 2, &P2, t),
                1e-9,
            );
        }
    }

    #[test]
    fn repeated_insertion_preserves_shape() {
        let mut rng = rng(99);
        let P = random_points(&mut rng, 5);
        let U = clamped_uniform(5, 2);
        let (mut U2, mut P2) = (U.clone(), P.clone());
        for &u in &[0.4, 0.4, 0.1, 0.85] {
            let (a, b) = insert_knot(&U2, 2, &P2, u).unwrap();
            U2 = a;
            P2 = b;
        }
        assert_eq!(P2.len(), 9);
        for s in 0..=50 {
            let t = s as f64 / 50.0;
            assert_close(
                de_boor::eval(&U, 2, &P, t),
                de_boor::eval(&U2, 2, &P2, t),
                1e-9,
            );
        }
    }

    #[test]
    fn rational_weights_are_blended() {
        let P = vec![
            ControlPoint::planar(0.0, 0.0, 1.0),
            ControlPoint::planar(1.0, 0.0, 3.0),
        ];
        let (_, P2) = insert_knot(&[0.0, 0.0, 1.0, 1.0], 1, &P, 0.5).unwrap();
        assert_eq!(P2[1].weight, 2.0);
        assert_eq!(P2[1].x, 0.75);
    }

    #[test]
    fn out_of_domain() {
        let U = clamped_uniform(4, 2);
        let P = line(&[0.0, 1.0, 2.0, 3.0]);
        for &u in &[-0.01, 1.5, f64::NAN] {
            match insert_knot(&U, 2, &P, u) {
                Err(Error::InvalidDomainValue { min, max, .. }) => {
                    assert_eq!((min, max), (0.0, 1.0));
                }
                other => panic!("expected a domain error, got {:?}", other),
            }
        }
    }

    #[test]
    fn mismatched_knots() {
        let P = line(&[0.0, 1.0, 2.0]);
        assert_eq!(
            insert_knot(&[0.0, 0.0, 1.0, 1.0], 1, &P, 0.5),
            Err(Error::InvalidKnotVectorLength {
                expected: 5,
                actual: 4
            })
        );
    }
}
