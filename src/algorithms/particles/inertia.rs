use serde::{Deserialize, Serialize};

use crate::Float;

/// The name used for runs with a [`InertiaWeight::Constant`] schedule.
pub const BASE_PSO: &str = "Base PSO";
/// The name used for runs with a [`InertiaWeight::Linear`] schedule.
pub const DYNAMIC_WEIGHT_PSO: &str = "PSO with Dynamic Weight";

/// Schedules for the inertia weight $`\omega`$ used by the [`PSO`](super::PSO) velocity update.
///
/// A schedule is a pure function of the current iteration and the total number of iterations and
/// is evaluated once per iteration, before the velocity update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InertiaWeight {
    /// The same weight for every iteration.
    Constant(Float),
    /// A weight interpolated linearly from `initial` (at iteration `0`) to `final_weight` (at
    /// iteration `max_iterations`):
    ///
    /// ```math
    /// \omega(t) = \omega_\text{initial} - (\omega_\text{initial} - \omega_\text{final})\frac{t}{T}
    /// ```
    Linear {
        /// The weight at the first iteration.
        initial: Float,
        /// The weight reached at the last iteration.
        final_weight: Float,
    },
}

impl Default for InertiaWeight {
    /// A constant weight of `0.5`.
    fn default() -> Self {
        Self::Constant(0.5)
    }
}

impl InertiaWeight {
    /// The "dynamic weight" schedule of the experiment, a [`InertiaWeight::Linear`] schedule going
    /// from `0.0` to `0.5`.
    ///
    /// Note that despite being described as a decaying weight, these parameters make the weight
    /// *increase* over the run. The values are kept as-is so results stay comparable with earlier
    /// experiments; use [`InertiaWeight::Linear`] directly for a decreasing schedule.
    pub const fn dynamic() -> Self {
        Self::Linear {
            initial: 0.0,
            final_weight: 0.5,
        }
    }

    /// The inertia weight for `iteration` out of `max_iterations`.
    ///
    /// The linear schedule returns exactly `initial` at iteration `0` and exactly `final_weight` at
    /// iteration `max_iterations`. If `max_iterations` is zero, `initial` is returned.
    pub fn weight(&self, iteration: usize, max_iterations: usize) -> Float {
        match *self {
            Self::Constant(omega) => omega,
            Self::Linear {
                initial,
                final_weight,
            } => {
                if max_iterations == 0 {
                    return initial;
                }
                if iteration == max_iterations {
                    return final_weight;
                }
                initial
                    - (initial - final_weight) * iteration as Float / max_iterations as Float
            }
        }
    }

    /// The algorithm name recorded for runs using this schedule.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Constant(_) => BASE_PSO,
            Self::Linear { .. } => DYNAMIC_WEIGHT_PSO,
        }
    }
}
