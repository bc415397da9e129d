use crate::{
    test_functions::TestFunctionError,
    traits::{Benchmark, CostFunction},
    DVector, Float, PI,
};

/// The Rastrigin function, a non-convex function with a single minimum but many local minima.
///
/// ```math
/// f(\vec{x}) = 10n + \sum_{i=1}^n (x_i^2 - 10cos(2\pi x_i))
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Rastrigin;
impl CostFunction<(), TestFunctionError> for Rastrigin {
    fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, TestFunctionError> {
        #[allow(clippy::suboptimal_flops)]
        Ok(10.0 * x.len() as Float
            + x.iter()
                .map(|xi| xi.powi(2) - 10.0 * Float::cos(2.0 * PI * xi))
                .sum::<Float>())
    }
}
impl Benchmark<(), TestFunctionError> for Rastrigin {
    fn name(&self) -> &'static str {
        "rastrigin_function"
    }
}
