#![allow(clippy::suboptimal_flops)]
use crate::{
    test_functions::{require_dimension, TestFunctionError},
    traits::{Benchmark, CostFunction},
    DVector, Float, PI,
};

/// The Levy function.
///
/// ```math
/// f(\vec{x}) = \sin^2(\pi w_1) + \sum_{i=1}^{n-1}(w_i - 1)^2\left[1 + 10\sin^2(\pi w_i + 1)\right] + (w_n - 1)^2\left[1 + \sin^2(2\pi w_n)\right]
/// ```
/// where $`w_i = 1 + (x_i - 1)/4`$. The global minimum is $`f(\vec{1}) = 0`$.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levy;
impl CostFunction<(), TestFunctionError> for Levy {
    fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, TestFunctionError> {
        require_dimension(self.name(), 1, x.len())?;
        let w: Vec<Float> = x.iter().map(|xi| 1.0 + (xi - 1.0) / 4.0).collect();
        let n = w.len();
        let head = Float::sin(PI * w[0]).powi(2);
        let body = w[..n - 1]
            .iter()
            .map(|wi| (wi - 1.0).powi(2) * (1.0 + 10.0 * Float::sin(PI * wi + 1.0).powi(2)))
            .sum::<Float>();
        let tail = (w[n - 1] - 1.0).powi(2) * (1.0 + Float::sin(2.0 * PI * w[n - 1]).powi(2));
        Ok(head + body + tail)
    }
}
impl Benchmark<(), TestFunctionError> for Levy {
    fn name(&self) -> &'static str {
        "levy_function"
    }
}
