use crate::{
    test_functions::TestFunctionError,
    traits::{Benchmark, CostFunction},
    DVector, Float,
};

/// The sphere function, $`f(\vec{x}) = \sum_{i=1}^n x_i^2`$, with its minimum at
/// $`f(\vec{0}) = 0`$.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;
impl CostFunction<(), TestFunctionError> for Sphere {
    fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, TestFunctionError> {
        Ok(x.norm_squared())
    }
}
impl Benchmark<(), TestFunctionError> for Sphere {
    fn name(&self) -> &'static str {
        "sphere_function"
    }
}
