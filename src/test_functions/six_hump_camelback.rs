#![allow(clippy::suboptimal_flops)]
use crate::{
    test_functions::{require_dimension, TestFunctionError},
    traits::{Benchmark, CostFunction},
    DVector, Float,
};

/// The six-hump camelback function, defined on the first two coordinates.
///
/// ```math
/// f(\vec{x}) = \left(4 - 2.1x_1^2 + \frac{x_1^4}{3}\right)x_1^2 + x_1x_2 + (-4 + 4x_2^2)x_2^2
/// ```
/// The two global minima are $`f(\pm 0.0898, \mp 0.7126) \approx -1.0316`$.
#[derive(Debug, Clone, Copy, Default)]
pub struct SixHumpCamelback;
impl CostFunction<(), TestFunctionError> for SixHumpCamelback {
    fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, TestFunctionError> {
        require_dimension(self.name(), 2, x.len())?;
        let (x1, x2) = (x[0], x[1]);
        Ok((4.0 - 2.1 * x1.powi(2) + x1.powi(4) / 3.0) * x1.powi(2)
            + x1 * x2
            + (-4.0 + 4.0 * x2.powi(2)) * x2.powi(2))
    }
}
impl Benchmark<(), TestFunctionError> for SixHumpCamelback {
    fn name(&self) -> &'static str {
        "six_hump_camelback_function"
    }
}
