//! `swarmbench` is a small experimental harness for Particle Swarm Optimization (PSO). It runs two
//! PSO variants, one with a fixed inertia weight and one with a linearly changing ("dynamic")
//! inertia weight, against a battery of standard benchmark functions, records the best solutions
//! found, and compares the two variants.
//!
//! # Table of Contents
//! - [Quick Start](#quick-start)
//! - [The Update Rule](#the-update-rule)
//! - [Recording and Reporting](#recording-and-reporting)
//!
//! # Quick Start
//!
//! Any type implementing [`CostFunction`](traits::CostFunction) can be minimized. The benchmark
//! functions used by the experiment live in [`test_functions`]:
//!
//! ```rust
//! use fastrand::Rng;
//! use swarmbench::algorithms::particles::{InertiaWeight, PSO};
//! use swarmbench::test_functions::Sphere;
//!
//! let mut pso = PSO::new(2, Rng::with_seed(7));
//! pso.configure(|c| {
//!     c.with_inertia_weight(InertiaWeight::dynamic())
//!         .with_max_iterations(50)
//!         .setup_swarm(|swarm| swarm.with_n_particles(10))
//! });
//! let result = pso.run(&Sphere, &()).unwrap();
//! assert!(result.fx < 1.0);
//! ```
//!
//! # The Update Rule
//!
//! Every iteration each particle's velocity and position are updated as
//!
//! ```math
//! v_i \leftarrow \omega v_i + c_1 r_1 (p_i - x_i) + c_2 r_2 (g - x_i), \qquad x_i \leftarrow x_i + v_i
//! ```
//!
//! where $`\omega`$ is the inertia weight given by an
//! [`InertiaWeight`](algorithms::particles::InertiaWeight) schedule, $`c_1`$ and $`c_2`$ are the
//! cognitive and social coefficients, $`p_i`$ is the particle's personal best and $`g`$ is the
//! swarm's global best. By default $`r_1`$ and $`r_2`$ are single scalars drawn once per iteration
//! and shared by every particle and dimension. See
//! [`SwarmRandomDraw`](algorithms::particles::SwarmRandomDraw) for the canonical per-dimension
//! variant.
//!
//! # Recording and Reporting
//!
//! [`ResultRecorder`](io::ResultRecorder) collects one row per benchmark and algorithm and writes
//! them to a CSV file, which [`compare_results`](io::compare_results) later reads back to compute
//! the percentage difference between the two PSO variants. The `run_benchmarks` and
//! `percentage_difference` binaries wire these together with a [`Logger`](logging::Logger).
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing the particle swarm optimizer.
pub mod algorithms;
/// Module containing the [`Point`](core::Point), result and error types.
pub mod core;
/// Module containing CSV persistence of results and the percentage-difference report.
pub mod io;
/// Module containing the [`Logger`](logging::Logger) context.
pub mod logging;
/// Module containing [`Observer`](traits::Observer) implementations.
pub mod observers;
/// Module containing standard functions for testing algorithms.
pub mod test_functions;
/// Module containing the traits used throughout the crate.
pub mod traits;

/// The floating-point type used throughout the crate (`f64` unless the `f32` feature is enabled).
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// The floating-point type used throughout the crate (`f64` unless the `f32` feature is enabled).
#[cfg(feature = "f32")]
pub type Float = f32;

/// The mathematical constant $`\pi`$.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;

/// The mathematical constant $`\pi`$.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;

/// Euler's number $`e`$.
#[cfg(not(feature = "f32"))]
pub const E: Float = std::f64::consts::E;

/// Euler's number $`e`$.
#[cfg(feature = "f32")]
pub const E: Float = std::f32::consts::E;

pub use nalgebra::DVector;
