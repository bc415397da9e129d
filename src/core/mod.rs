/// [`PsoError`] type returned by the optimizer.
pub mod error;
/// [`Point`] type for defining a point in the parameter space.
pub mod point;
/// [`OptimizationResult`] type for the result of an optimization run.
pub mod summary;
/// Random sampling helpers.
pub mod utils;

pub use error::PsoError;
pub use point::Point;
pub use summary::OptimizationResult;
