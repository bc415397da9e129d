#![allow(clippy::suboptimal_flops)]
use crate::{
    test_functions::{require_dimension, TestFunctionError},
    traits::{Benchmark, CostFunction},
    DVector, Float,
};

/// The Goldstein-Price function, defined on the first two coordinates.
///
/// The global minimum is $`f(0, -1) = 3`$.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoldsteinPrice;
impl CostFunction<(), TestFunctionError> for GoldsteinPrice {
    fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, TestFunctionError> {
        require_dimension(self.name(), 2, x.len())?;
        let (x1, x2) = (x[0], x[1]);
        let a = 1.0
            + (x1 + x2 + 1.0).powi(2)
                * (19.0 - 14.0 * x1 + 3.0 * x1.powi(2) - 14.0 * x2
                    + 6.0 * x1 * x2
                    + 3.0 * x2.powi(2));
        let b = 30.0
            + (2.0 * x1 - 3.0 * x2).powi(2)
                * (18.0 - 32.0 * x1 + 12.0 * x1.powi(2) + 48.0 * x2 - 36.0 * x1 * x2
                    + 27.0 * x2.powi(2));
        Ok(a * b)
    }
}
impl Benchmark<(), TestFunctionError> for GoldsteinPrice {
    fn name(&self) -> &'static str {
        "goldstein_price_function"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goldstein_price_minimum() {
        let x = DVector::from_vec(vec![0.0, -1.0, 7.0]);
        assert_eq!(GoldsteinPrice.evaluate(&x, &()).unwrap(), 3.0);
    }
}
