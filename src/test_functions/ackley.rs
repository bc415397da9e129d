use crate::{
    test_functions::TestFunctionError,
    traits::{Benchmark, CostFunction},
    DVector, Float, E, PI,
};

/// The Ackley function, a nearly flat outer region with a deep hole at the origin.
///
/// ```math
/// f(\vec{x}) = -20\exp\left(-0.2\sqrt{\frac{1}{n}\sum_{i=1}^n x_i^2}\right) - \exp\left(\frac{1}{n}\sum_{i=1}^n \cos(2\pi x_i)\right) + 20 + e
/// ```
/// The global minimum is $`f(\vec{0}) = 0`$.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ackley;
impl CostFunction<(), TestFunctionError> for Ackley {
    fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, TestFunctionError> {
        let n = x.len() as Float;
        let mean_square = x.iter().map(|xi| xi.powi(2)).sum::<Float>() / n;
        let mean_cos = x.iter().map(|xi| Float::cos(2.0 * PI * xi)).sum::<Float>() / n;
        Ok(-20.0 * Float::exp(-0.2 * mean_square.sqrt()) - mean_cos.exp() + 20.0 + E)
    }
}
impl Benchmark<(), TestFunctionError> for Ackley {
    fn name(&self) -> &'static str {
        "ackley_function"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ackley() {
        let origin = DVector::zeros(3);
        assert_relative_eq!(Ackley.evaluate(&origin, &()).unwrap(), 0.0, epsilon = 1e-12);
        let x = DVector::from_vec(vec![1.0, 2.0]);
        assert_relative_eq!(
            Ackley.evaluate(&x, &()).unwrap(),
            5.422131717799509,
            epsilon = 1e-10
        );
    }
}
