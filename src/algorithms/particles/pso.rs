use std::sync::Arc;

use fastrand::Rng;
use parking_lot::RwLock;

use crate::{
    algorithms::particles::{InertiaWeight, Swarm, SwarmCoefficients, SwarmStatus},
    core::{OptimizationResult, PsoError},
    traits::{CostFunction, Observer},
    Float,
};

const DEFAULT_MAX_ITERATIONS: usize = 200;

/// The internal configuration struct for the [`PSO`] algorithm.
#[derive(Clone)]
pub struct PSOConfig {
    swarm: Swarm,
    inertia_weight: InertiaWeight,
    c1: Float,
    c2: Float,
    max_iterations: usize,
}
impl PSOConfig {
    /// Sets the inertia weight schedule $`\omega(t)`$ (default = [`InertiaWeight::Constant`]
    /// with a weight of `0.5`).
    pub fn with_inertia_weight(&mut self, value: InertiaWeight) -> &mut Self {
        self.inertia_weight = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ which controls the particle's tendency
    /// to move towards its personal best (default = `1.5`).
    pub fn with_c1(&mut self, value: Float) -> &mut Self {
        self.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ which controls the particle's tendency
    /// to move towards the global best (default = `2.0`).
    pub fn with_c2(&mut self, value: Float) -> &mut Self {
        self.c2 = value;
        self
    }
    /// Sets the number of swarm updates performed by a run (default = `200`). There is no early
    /// stopping, so every run performs exactly this many updates.
    pub fn with_max_iterations(&mut self, value: usize) -> &mut Self {
        self.max_iterations = value;
        self
    }
    /// Convenience method to configure the swarm.
    pub fn setup_swarm<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Swarm) -> &mut Swarm,
    {
        f(&mut self.swarm);
        self
    }
    fn validate<E>(&self) -> Result<(), PsoError<E>> {
        for (name, value) in [("c1", self.c1), ("c2", self.c2)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PsoError::InvalidConfiguration(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        let weights_finite = match self.inertia_weight {
            InertiaWeight::Constant(omega) => omega.is_finite(),
            InertiaWeight::Linear {
                initial,
                final_weight,
            } => initial.is_finite() && final_weight.is_finite(),
        };
        if !weights_finite {
            return Err(PsoError::InvalidConfiguration(format!(
                "inertia weights must be finite, got {:?}",
                self.inertia_weight
            )));
        }
        Ok(())
    }
}
impl Default for PSOConfig {
    fn default() -> Self {
        Self {
            swarm: Swarm::default(),
            inertia_weight: InertiaWeight::default(),
            c1: 1.5,
            c2: 2.0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Particle Swarm Optimizer
///
/// The PSO algorithm involves an ensemble of particles which are aware of the best position found
/// by the whole swarm. Each iteration, every particle's velocity is updated as follows:
///
/// ```math
/// v_i^{t+1} = \omega(t) v_i^t + c_1 r_1^{t+1}(p^t_i - x^t_i) + c_2 r_2^{t+1}(g^t - x^t_i)
/// ```
/// where $`r_1`$ and $`r_2`$ are uniformly distributed in $`[0,1)`$, $`\omega(t)`$ is the
/// inertia weight given by an [`InertiaWeight`] schedule, $`c_1`$ and $`c_2`$ are cognitive and
/// social weights respectively, $`p_i^t`$ is the particle's personal best position, and $`g^t`$
/// is the swarm's best position. The particle then moves to $`x_i^{t+1} = x_i^t + v_i^{t+1}`$.
///
/// By default $`r_1`$ and $`r_2`$ are drawn once per iteration and shared across the swarm (see
/// [`SwarmRandomDraw`](super::SwarmRandomDraw)), and positions are not clamped.
///
/// A run always performs the configured number of iterations and either returns the global best
/// or fails as a whole.
pub struct PSO<U = ()> {
    config: PSOConfig,
    rng: Rng,
    dimension: usize,
    observers: Vec<Arc<RwLock<dyn Observer<U>>>>,
    /// The [`SwarmStatus`] of the most recent run.
    pub status: SwarmStatus,
}

impl<U> PSO<U> {
    /// Construct a new particle swarm optimizer working in a `dimension` dimensional space and
    /// drawing random numbers from `rng`.
    pub fn new(dimension: usize, rng: Rng) -> Self {
        Self {
            config: PSOConfig::default(),
            rng,
            dimension,
            observers: Vec::default(),
            status: SwarmStatus::default(),
        }
    }

    /// Edit the [`PSOConfig`] of the optimizer.
    pub fn configure<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut PSOConfig) -> &mut PSOConfig,
    {
        f(&mut self.config);
        self
    }

    /// Adds a single [`Observer`] to the optimizer.
    pub fn with_observer(&mut self, observer: Arc<RwLock<dyn Observer<U>>>) -> &mut Self {
        self.observers.push(observer);
        self
    }

    /// Minimize the given [`CostFunction`].
    ///
    /// This method initializes a fresh [`Swarm`] from the configuration, then performs exactly
    /// `max_iterations` swarm updates, computing the inertia weight from the schedule before each
    /// one. All [`Observer`]s are called after every update.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InvalidConfiguration`] if the optimizer is misconfigured, or an
    /// evaluation error if the cost function fails or returns a non-finite value at any point
    /// during the run. No partial result is returned.
    pub fn run<F, E>(&mut self, func: &F, args: &U) -> Result<OptimizationResult, PsoError<E>>
    where
        F: CostFunction<U, E> + ?Sized,
    {
        self.config.validate()?;
        self.status.reset();
        self.status.swarm = self.config.swarm.clone();
        self.status
            .swarm
            .initialize(&mut self.rng, self.dimension, func, args)?;
        self.status.n_f_evals = self.status.swarm.n_particles;
        self.status.update_message("Initialized");

        let max_iterations = self.config.max_iterations;
        for iteration in 0..max_iterations {
            let omega = self.config.inertia_weight.weight(iteration, max_iterations);
            let coefficients = SwarmCoefficients {
                omega,
                c1: self.config.c1,
                c2: self.config.c2,
            };
            self.status
                .swarm
                .step(coefficients, &mut self.rng, func, args)?;
            self.status.inertia_weight = omega;
            self.status.n_f_evals += self.status.swarm.n_particles;
            for observer in &self.observers {
                observer.write().observe(iteration, &self.status, args);
            }
        }
        self.status.update_message(&format!(
            "Maximum number of iterations reached ({max_iterations})"
        ));
        Ok(self.summarize())
    }

    fn summarize(&self) -> OptimizationResult {
        let (x, fx) = self.status.get_best().destructure();
        OptimizationResult {
            x: x.iter().copied().collect(),
            fx,
            n_particles: self.status.swarm.n_particles,
            iterations: self.config.max_iterations,
            cost_evals: self.status.n_f_evals,
            message: self.status.message.clone(),
        }
    }
}

/// Run a [`PSO`] with `n_particles` particles in `n_dimensions` dimensions for `max_iterations`
/// iterations using the given inertia weight schedule and default settings otherwise.
///
/// # Errors
///
/// See [`PSO::run`].
pub fn minimize<F, E>(
    func: &F,
    n_particles: usize,
    n_dimensions: usize,
    max_iterations: usize,
    inertia_weight: InertiaWeight,
    rng: Rng,
) -> Result<OptimizationResult, PsoError<E>>
where
    F: CostFunction<(), E> + ?Sized,
{
    let mut pso = PSO::new(n_dimensions, rng);
    pso.configure(|c| {
        c.with_inertia_weight(inertia_weight)
            .with_max_iterations(max_iterations)
            .setup_swarm(|swarm| swarm.with_n_particles(n_particles))
    });
    pso.run(func, &())
}
