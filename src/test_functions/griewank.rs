use crate::{
    test_functions::TestFunctionError,
    traits::{Benchmark, CostFunction},
    DVector, Float,
};

/// The Griewank function.
///
/// ```math
/// f(\vec{x}) = 1 + \frac{1}{4000}\sum_{i=1}^n x_i^2 - \prod_{i=1}^n \cos\left(\frac{x_i}{\sqrt{i}}\right)
/// ```
/// The global minimum is $`f(\vec{0}) = 0`$.
#[derive(Debug, Clone, Copy, Default)]
pub struct Griewank;
impl CostFunction<(), TestFunctionError> for Griewank {
    fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, TestFunctionError> {
        let sum = x.iter().map(|xi| xi.powi(2)).sum::<Float>() / 4000.0;
        let product = x
            .iter()
            .enumerate()
            .map(|(i, xi)| Float::cos(xi / ((i + 1) as Float).sqrt()))
            .product::<Float>();
        Ok(1.0 + sum - product)
    }
}
impl Benchmark<(), TestFunctionError> for Griewank {
    fn name(&self) -> &'static str {
        "griewank_function"
    }
}
