use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Float;

/// A struct that holds the result of a particle swarm optimization run.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OptimizationResult {
    /// The best position found by the swarm.
    pub x: Vec<Float>,
    /// The value of the objective at [`OptimizationResult::x`].
    pub fx: Float,
    /// The number of particles in the swarm.
    pub n_particles: usize,
    /// The number of iterations (swarm updates) performed.
    pub iterations: usize,
    /// The number of objective function evaluations, including initialization.
    pub cost_evals: usize,
    /// A message set by the optimizer.
    pub message: String,
}

impl Display for OptimizationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MSG:        {}", self.message)?;
        write!(f, "X:         ")?;
        for (i, xi) in self.x.iter().enumerate() {
            if i == 0 {
                writeln!(f, " {xi:+.5}")?;
            } else {
                writeln!(f, "            {xi:+.5}")?;
            }
        }
        writeln!(f, "F(X):       {:+.5}", self.fx)?;
        writeln!(f, "PARTICLES:  {}", self.n_particles)?;
        writeln!(f, "ITERATIONS: {}", self.iterations)?;
        write!(f, "N_F_EVALS:  {}", self.cost_evals)
    }
}
