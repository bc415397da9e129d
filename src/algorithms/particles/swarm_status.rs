use crate::{algorithms::particles::Swarm, core::Point, Float};
use serde::{Deserialize, Serialize};

/// The state of a [`PSO`](super::PSO) run, handed to every
/// [`Observer`](crate::traits::Observer) after each step.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct SwarmStatus {
    /// The swarm
    pub swarm: Swarm,
    /// The inertia weight used by the most recent step
    pub inertia_weight: Float,
    /// The number of cost function evaluations so far, including initialization
    pub n_f_evals: usize,
    /// A message describing the state of the run
    pub message: String,
}

impl SwarmStatus {
    /// Get the global best position found by the swarm.
    pub fn get_best(&self) -> Point {
        self.swarm.gbest.clone()
    }
    /// Resets the status to its default state. This is called at the beginning of every run.
    pub fn reset(&mut self) {
        self.swarm.particles = vec![];
        self.swarm.gbest = Point::default();
        self.inertia_weight = 0.0;
        self.n_f_evals = 0;
        self.message = String::new();
    }
    /// Sets the message of the run.
    pub fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}
