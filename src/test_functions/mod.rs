//! The benchmark functions used by the experiment.
//!
//! Every function is a stateless unit struct (or a struct holding only fixed shape parameters)
//! which takes its dimension from the input vector and implements [`Benchmark`] so it can be run
//! as part of [`benchmark_suite`].
use std::fmt::Display;

use crate::traits::Benchmark;

/// Module containing the Ackley test function.
pub mod ackley;
pub use ackley::Ackley;

/// Module containing the Branin RCOS test function.
pub mod branin;
pub use branin::BraninRcos;

/// Module containing the Goldstein-Price test function.
pub mod goldstein_price;
pub use goldstein_price::GoldsteinPrice;

/// Module containing the Griewank test function.
pub mod griewank;
pub use griewank::Griewank;

/// Module containing the Levy test function.
pub mod levy;
pub use levy::Levy;

/// Module containing the Michalewicz test function.
pub mod michalewicz;
pub use michalewicz::Michalewicz;

/// Module containing the Rastrigin test function.
pub mod rastrigin;
pub use rastrigin::Rastrigin;

/// Module containing the Rosenbrock test function.
pub mod rosenbrock;
pub use rosenbrock::Rosenbrock;

/// Module containing the six-hump camelback test function.
pub mod six_hump_camelback;
pub use six_hump_camelback::SixHumpCamelback;

/// Module containing the sphere test function.
pub mod sphere;
pub use sphere::Sphere;

/// The error returned by a test function evaluated on an input it is not defined for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestFunctionError {
    /// The input has fewer coordinates than the function reads.
    Dimension {
        /// The name of the function.
        function: &'static str,
        /// The minimum number of coordinates the function needs.
        required: usize,
        /// The number of coordinates it was given.
        got: usize,
    },
}

impl Display for TestFunctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dimension {
                function,
                required,
                got,
            } => write!(
                f,
                "{function} needs at least {required} dimensions, got {got}"
            ),
        }
    }
}

impl std::error::Error for TestFunctionError {}

pub(crate) const fn require_dimension(
    function: &'static str,
    required: usize,
    got: usize,
) -> Result<(), TestFunctionError> {
    if got < required {
        return Err(TestFunctionError::Dimension {
            function,
            required,
            got,
        });
    }
    Ok(())
}

/// A boxed benchmark function as used by [`benchmark_suite`].
pub type BoxedBenchmark = Box<dyn Benchmark<(), TestFunctionError>>;

/// All benchmark functions of the experiment, in the order they are run.
pub fn benchmark_suite() -> Vec<BoxedBenchmark> {
    vec![
        Box::new(Ackley),
        Box::new(BraninRcos),
        Box::new(GoldsteinPrice),
        Box::new(Griewank),
        Box::new(Levy),
        Box::new(Michalewicz::default()),
        Box::new(Rastrigin),
        Box::new(Rosenbrock),
        Box::new(SixHumpCamelback),
        Box::new(Sphere),
    ]
}
