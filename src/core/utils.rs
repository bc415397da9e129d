use crate::{DVector, Float};
use fastrand::Rng;

/// A helper trait to get feature-gated floating-point random values
pub trait SampleFloat {
    /// Get a random value in the range `[lower, upper)`
    fn range(&mut self, lower: Float, upper: Float) -> Float;
    /// Get a random value in the range `[0, 1)`
    fn float(&mut self) -> Float;
}
impl SampleFloat for Rng {
    #[allow(clippy::suboptimal_flops)]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        lower + (upper - lower) * self.float()
    }
    #[cfg(not(feature = "f32"))]
    fn float(&mut self) -> Float {
        self.f64()
    }
    #[cfg(feature = "f32")]
    fn float(&mut self) -> Float {
        self.f32()
    }
}

pub(crate) fn generate_random_vector(
    dimension: usize,
    lb: Float,
    ub: Float,
    rng: &mut Rng,
) -> DVector<Float> {
    DVector::from_vec((0..dimension).map(|_| rng.range(lb, ub)).collect())
}

pub(crate) fn generate_random_vector_in_limits(
    limits: &[(Float, Float)],
    rng: &mut Rng,
) -> DVector<Float> {
    DVector::from_vec(
        limits
            .iter()
            .map(|&(lower, upper)| rng.range(lower, upper))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_stays_in_limits() {
        let mut rng = Rng::with_seed(0);
        for _ in 0..1000 {
            let v = rng.range(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&v));
        }
    }

    #[test]
    fn test_random_vectors_are_reproducible() {
        let mut a = Rng::with_seed(42);
        let mut b = Rng::with_seed(42);
        let va = generate_random_vector(4, 0.0, 5.0, &mut a);
        let vb = generate_random_vector(4, 0.0, 5.0, &mut b);
        assert_eq!(va, vb);
        assert_eq!(va.len(), 4);
        assert!(va.iter().all(|&v| (0.0..5.0).contains(&v)));
    }

    #[test]
    fn test_random_vector_in_limits() {
        let mut rng = Rng::with_seed(1);
        let limits = [(0.0, 1.0), (10.0, 11.0), (-5.0, -4.0)];
        let v = generate_random_vector_in_limits(&limits, &mut rng);
        for (vi, (lo, hi)) in v.iter().zip(limits) {
            assert!(*vi >= lo && *vi < hi);
        }
    }
}
