use std::convert::Infallible;

use crate::{DVector, Float};

/// A trait which describes a function $`f(\mathbb{R}^n) \to \mathbb{R}`$
///
/// Such a function may also take an `args: &U` field which can be used to pass external,
/// read-only arguments to the function during minimization. Functions are expected to be pure:
/// evaluating the same point twice must give the same value.
///
/// The `CostFunction` trait takes a generic `U` representing the type of user data/arguments
/// and a generic `E` representing any possible errors that might be returned during function
/// execution.
pub trait CostFunction<U = (), E = Infallible> {
    /// The evaluation of the function at a point `x` with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement this trait to return a
    /// [`std::convert::Infallible`] if the function evaluation never fails.
    fn evaluate(&self, x: &DVector<Float>, args: &U) -> Result<Float, E>;
}

/// A named [`CostFunction`] which can be run as part of a benchmark suite.
///
/// The name is what gets written to the `Benchmark` column of the results file, so it should be
/// stable across runs.
pub trait Benchmark<U = (), E = Infallible>: CostFunction<U, E> {
    /// The name of the benchmark.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use crate::{traits::CostFunction, DVector, Float};

    struct TestFunction;
    impl CostFunction for TestFunction {
        fn evaluate(&self, x: &DVector<Float>, _: &()) -> Result<Float, Infallible> {
            Ok(x[0].powi(2) + x[1].powi(2) + 1.0)
        }
    }

    struct Shifted;
    impl CostFunction<Float, String> for Shifted {
        fn evaluate(&self, x: &DVector<Float>, shift: &Float) -> Result<Float, String> {
            if x.is_empty() {
                return Err("empty input".to_string());
            }
            Ok(x.iter().map(|xi| (xi - shift).powi(2)).sum())
        }
    }

    #[test]
    fn test_cost_function() {
        let x: DVector<Float> = DVector::from_vec(vec![1.0, 2.0]);
        let y = TestFunction.evaluate(&x, &()).unwrap();
        assert_eq!(y, 6.0);
    }

    #[test]
    fn test_cost_function_with_args_and_errors() {
        let x: DVector<Float> = DVector::from_vec(vec![1.0, 3.0]);
        assert_eq!(Shifted.evaluate(&x, &1.0).unwrap(), 4.0);
        assert_eq!(
            Shifted.evaluate(&DVector::zeros(0), &1.0),
            Err("empty input".to_string())
        );
    }
}
