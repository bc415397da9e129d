use crate::{
    test_functions::TestFunctionError,
    traits::{Benchmark, CostFunction},
    DVector, Float,
};

/// The Rosenbrock function, a non-convex function with a single minimum.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^{n-1} \left[100(x_{i+1} - x_i^2)^2 + (1 - x_i)^2 \right]
/// ```
/// This function has a minimum at $`f(\vec{1}) = 0`$. A one-dimensional input evaluates to `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rosenbrock;
impl CostFunction<(), TestFunctionError> for Rosenbrock {
    fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, TestFunctionError> {
        #[allow(clippy::suboptimal_flops)]
        Ok(x.as_slice()
            .windows(2)
            .map(|w| 100.0 * (w[1] - w[0].powi(2)).powi(2) + (1.0 - w[0]).powi(2))
            .sum())
    }
}
impl Benchmark<(), TestFunctionError> for Rosenbrock {
    fn name(&self) -> &'static str {
        "rosenbrock_function"
    }
}
