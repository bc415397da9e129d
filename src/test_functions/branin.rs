#![allow(clippy::suboptimal_flops)]
use crate::{
    test_functions::{require_dimension, TestFunctionError},
    traits::{Benchmark, CostFunction},
    DVector, Float, PI,
};

/// The Branin RCOS function, defined on the first two coordinates.
///
/// ```math
/// f(\vec{x}) = \left(x_2 - \frac{5.1}{4\pi^2}x_1^2 + \frac{5}{\pi}x_1 - 6\right)^2 + 10\left(1 - \frac{1}{8\pi}\right)\cos x_1 + 10
/// ```
/// It has three global minima with $`f \approx 0.397887`$, one of them at $`(\pi, 2.275)`$.
#[derive(Debug, Clone, Copy, Default)]
pub struct BraninRcos;
impl CostFunction<(), TestFunctionError> for BraninRcos {
    fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, TestFunctionError> {
        require_dimension(self.name(), 2, x.len())?;
        let b = 5.1 / (4.0 * PI.powi(2));
        let c = 5.0 / PI;
        let t = 1.0 / (8.0 * PI);
        let (x1, x2) = (x[0], x[1]);
        Ok((x2 - b * x1.powi(2) + c * x1 - 6.0).powi(2) + 10.0 * (1.0 - t) * x1.cos() + 10.0)
    }
}
impl Benchmark<(), TestFunctionError> for BraninRcos {
    fn name(&self) -> &'static str {
        "branin_rcos_function"
    }
}
