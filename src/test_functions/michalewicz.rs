use crate::{
    test_functions::TestFunctionError,
    traits::{Benchmark, CostFunction},
    DVector, Float, PI,
};

/// The Michalewicz function, with steep valleys whose steepness is controlled by `m`.
///
/// ```math
/// f(\vec{x}) = -\sum_{i=1}^n \sin(x_i)\sin^{2m}\left(\frac{i x_i^2}{\pi}\right)
/// ```
/// In two dimensions the global minimum is $`f(2.20, 1.57) \approx -1.8013`$.
#[derive(Debug, Clone, Copy)]
pub struct Michalewicz {
    /// The steepness parameter (default = `10`).
    pub m: i32,
}
impl Default for Michalewicz {
    fn default() -> Self {
        Self { m: 10 }
    }
}
impl CostFunction<(), TestFunctionError> for Michalewicz {
    fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, TestFunctionError> {
        Ok(-x
            .iter()
            .enumerate()
            .map(|(i, xi)| {
                xi.sin() * Float::sin((i + 1) as Float * xi.powi(2) / PI).powi(2 * self.m)
            })
            .sum::<Float>())
    }
}
impl Benchmark<(), TestFunctionError> for Michalewicz {
    fn name(&self) -> &'static str {
        "michalewicz_function"
    }
}
