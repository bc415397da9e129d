use crate::{
    core::{
        utils::{generate_random_vector, generate_random_vector_in_limits, SampleFloat},
        Point, PsoError,
    },
    traits::CostFunction,
    DVector, Float,
};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const DEFAULT_N_PARTICLES: usize = 100;

/// The coefficients of a single velocity update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwarmCoefficients {
    /// The inertia weight $`\omega`$.
    pub omega: Float,
    /// The cognitive coefficient $`c_1`$.
    pub c1: Float,
    /// The social coefficient $`c_2`$.
    pub c2: Float,
}

/// A swarm of particles used in particle swarm optimization.
#[derive(Clone, Serialize, Deserialize)]
pub struct Swarm {
    /// The number of particles
    pub n_particles: usize,
    /// A list of the particles in the swarm
    pub particles: Vec<SwarmParticle>,
    /// The best position found by any particle so far
    pub gbest: Point,
    /// How the random factors of the velocity update are drawn
    pub random_draw: SwarmRandomDraw,
    /// Optional `(min, max)` limits every coordinate is clamped to after each move
    pub bounds: Option<(Float, Float)>,
    /// The position initializer used by the swarm
    pub position_initializer: SwarmPositionInitializer,
    /// The velocity initializer used by the swarm
    pub velocity_initializer: SwarmVelocityInitializer,
}

impl Default for Swarm {
    fn default() -> Self {
        Self {
            n_particles: DEFAULT_N_PARTICLES,
            particles: Vec::default(),
            gbest: Point::default(),
            random_draw: SwarmRandomDraw::default(),
            bounds: None,
            position_initializer: SwarmPositionInitializer::default(),
            velocity_initializer: SwarmVelocityInitializer::default(),
        }
    }
}

impl Swarm {
    /// Sets the number of particles in the swarm (default = `100`).
    pub fn with_n_particles(&mut self, value: usize) -> &mut Self {
        self.n_particles = value;
        self
    }
    /// Sets how the random factors are drawn (default = [`SwarmRandomDraw::Shared`]).
    pub fn with_random_draw(&mut self, value: SwarmRandomDraw) -> &mut Self {
        self.random_draw = value;
        self
    }
    /// Shorthand for [`Swarm::with_random_draw`]: `true` selects [`SwarmRandomDraw::Shared`] and
    /// `false` selects [`SwarmRandomDraw::PerDimension`].
    pub fn with_shared_random_draw(&mut self, shared: bool) -> &mut Self {
        self.random_draw = if shared {
            SwarmRandomDraw::Shared
        } else {
            SwarmRandomDraw::PerDimension
        };
        self
    }
    /// Clamp every coordinate to `[min, max]` after each move. By default particles are free to
    /// leave the region they were initialized in.
    pub fn with_bounds(&mut self, bounds: Option<(Float, Float)>) -> &mut Self {
        self.bounds = bounds;
        self
    }
    /// Set the swarm's [`SwarmPositionInitializer`].
    pub fn with_position_initializer(
        &mut self,
        position_initializer: SwarmPositionInitializer,
    ) -> &mut Self {
        self.position_initializer = position_initializer;
        self
    }
    /// Set the swarm's [`SwarmVelocityInitializer`].
    pub fn with_velocity_initializer(
        &mut self,
        velocity_initializer: SwarmVelocityInitializer,
    ) -> &mut Self {
        self.velocity_initializer = velocity_initializer;
        self
    }

    /// Check the configuration of the swarm against the problem dimension.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InvalidConfiguration`] if the swarm has no particles, the dimension is
    /// zero, the bounds are malformed, or an initializer does not match the swarm's shape.
    pub fn validate<E>(&self, dimension: usize) -> Result<(), PsoError<E>> {
        if self.n_particles == 0 {
            return Err(PsoError::InvalidConfiguration(
                "the swarm needs at least one particle".to_string(),
            ));
        }
        if dimension == 0 {
            return Err(PsoError::InvalidConfiguration(
                "the search space needs at least one dimension".to_string(),
            ));
        }
        if let Some(limit) = self.bounds {
            check_limit(limit, "bounds")?;
        }
        self.position_initializer
            .validate(dimension, self.n_particles)?;
        self.velocity_initializer.validate()?;
        Ok(())
    }

    /// Create the particles of the swarm using the given random number generator, dimension and
    /// cost function, then set the global best.
    ///
    /// All positions are drawn before all velocities. Each particle's personal best starts at its
    /// initial position, and the global best is the particle with the lowest value (the lowest
    /// index wins ties).
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::InvalidConfiguration`] if [`Swarm::validate`] fails, or an evaluation
    /// error if the cost function fails or returns a non-finite value at any initial position.
    pub fn initialize<F, U, E>(
        &mut self,
        rng: &mut Rng,
        dimension: usize,
        func: &F,
        args: &U,
    ) -> Result<(), PsoError<E>>
    where
        F: CostFunction<U, E> + ?Sized,
    {
        self.validate(dimension)?;
        let particle_positions =
            self.position_initializer
                .init_positions(rng, dimension, self.n_particles);
        let particle_velocities =
            self.velocity_initializer
                .init_velocities(rng, dimension, self.n_particles);
        self.particles = particle_positions
            .into_iter()
            .zip(particle_velocities)
            .map(|(position, velocity)| SwarmParticle::new(position, velocity, func, args))
            .collect::<Result<Vec<SwarmParticle>, PsoError<E>>>()?;
        self.gbest = self.particles[self.index_of_best()].best.clone();
        Ok(())
    }

    /// Perform one generation of the swarm update.
    ///
    /// Every particle's velocity is updated against the global best from before this step, the
    /// particle is moved (and clamped if [`Swarm::bounds`] is set) and the cost function is
    /// evaluated exactly once at its new position. Personal bests and then the global best are
    /// replaced only on strict improvement.
    ///
    /// # Errors
    ///
    /// Returns an evaluation error if the cost function fails or returns a non-finite value. The
    /// swarm is left partially updated in that case.
    pub fn step<F, U, E>(
        &mut self,
        coefficients: SwarmCoefficients,
        rng: &mut Rng,
        func: &F,
        args: &U,
    ) -> Result<(), PsoError<E>>
    where
        F: CostFunction<U, E> + ?Sized,
    {
        let SwarmCoefficients { omega, c1, c2 } = coefficients;
        let gbest = self.gbest.x.clone();
        match self.random_draw {
            SwarmRandomDraw::Shared => {
                let r1 = rng.float();
                let r2 = rng.float();
                for particle in &mut self.particles {
                    particle.velocity = particle.velocity.scale(omega)
                        + (&particle.best.x - &particle.position.x).scale(c1 * r1)
                        + (&gbest - &particle.position.x).scale(c2 * r2);
                    particle.update_position(func, args, self.bounds)?;
                }
            }
            SwarmRandomDraw::PerDimension => {
                for particle in &mut self.particles {
                    let dim = particle.position.dimension();
                    let rv1 = generate_random_vector(dim, 0.0, 1.0, rng);
                    let rv2 = generate_random_vector(dim, 0.0, 1.0, rng);
                    particle.velocity = particle.velocity.scale(omega)
                        + rv1
                            .component_mul(&(&particle.best.x - &particle.position.x))
                            .scale(c1)
                        + rv2
                            .component_mul(&(&gbest - &particle.position.x))
                            .scale(c2);
                    particle.update_position(func, args, self.bounds)?;
                }
            }
        }
        for particle in &mut self.particles {
            particle.update_best();
        }
        let best = &self.particles[self.index_of_best()].best;
        if best.total_cmp(&self.gbest) == Ordering::Less {
            self.gbest = best.clone();
        }
        Ok(())
    }

    /// Index of the particle with the lowest personal best value. The lowest index wins ties.
    ///
    /// # Panics
    ///
    /// This method panics if the swarm has no particles.
    pub fn index_of_best(&self) -> usize {
        let mut index = 0;
        for (i, particle) in self.particles.iter().enumerate().skip(1) {
            if particle.total_cmp(&self.particles[index]) == Ordering::Less {
                index = i;
            }
        }
        index
    }
}

fn check_limit<E>((lower, upper): (Float, Float), what: &str) -> Result<(), PsoError<E>> {
    if !(lower.is_finite() && upper.is_finite() && lower < upper) {
        return Err(PsoError::InvalidConfiguration(format!(
            "{what} must be finite with min < max, got ({lower}, {upper})"
        )));
    }
    Ok(())
}

/// How the random factors $`r_1`$ and $`r_2`$ of the velocity update are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwarmRandomDraw {
    /// Draw one scalar $`r_1`$ and one scalar $`r_2`$ per step, shared by every particle and
    /// every dimension.
    #[default]
    Shared,
    /// Draw fresh $`r_1`$ and $`r_2`$ vectors for every particle, one value per dimension
    /// (canonical PSO).
    PerDimension,
}

/// Methods to initialize the positions of particles in a swarm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SwarmPositionInitializer {
    /// Uniform distribution in `[min, max)` for every dimension.
    Uniform(Float, Float),
    /// Uniform distribution within the given limits for each dimension.
    RandomInLimits(Vec<(Float, Float)>),
    /// Latin Hypercube sampling within the given limits for each dimension.
    LatinHypercube(Vec<(Float, Float)>),
    /// Custom positions, one per particle.
    Custom(Vec<DVector<Float>>),
}
impl Default for SwarmPositionInitializer {
    /// Uniform in `[0, 5)` for every dimension.
    fn default() -> Self {
        Self::Uniform(0.0, 5.0)
    }
}
impl SwarmPositionInitializer {
    fn validate<E>(&self, dimension: usize, n_particles: usize) -> Result<(), PsoError<E>> {
        match self {
            Self::Uniform(lower, upper) => check_limit((*lower, *upper), "position limits"),
            Self::RandomInLimits(limits) | Self::LatinHypercube(limits) => {
                if limits.len() != dimension {
                    return Err(PsoError::InvalidConfiguration(format!(
                        "expected {dimension} position limits, got {}",
                        limits.len()
                    )));
                }
                limits
                    .iter()
                    .try_for_each(|&limit| check_limit(limit, "position limits"))
            }
            Self::Custom(positions) => {
                if positions.len() != n_particles {
                    return Err(PsoError::InvalidConfiguration(format!(
                        "expected {n_particles} custom positions, got {}",
                        positions.len()
                    )));
                }
                if let Some(p) = positions.iter().find(|p| p.len() != dimension) {
                    return Err(PsoError::InvalidConfiguration(format!(
                        "custom position has dimension {}, expected {dimension}",
                        p.len()
                    )));
                }
                Ok(())
            }
        }
    }
    /// Initialize the positions of the particles in the swarm
    /// using the given random number generator and dimension.
    pub fn init_positions(
        &self,
        rng: &mut Rng,
        dimension: usize,
        n_particles: usize,
    ) -> Vec<DVector<Float>> {
        match self {
            Self::Uniform(lower, upper) => (0..n_particles)
                .map(|_| generate_random_vector(dimension, *lower, *upper, rng))
                .collect(),
            Self::RandomInLimits(limits) => (0..n_particles)
                .map(|_| generate_random_vector_in_limits(limits, rng))
                .collect(),
            Self::LatinHypercube(limits) => {
                let mut lhs = vec![DVector::zeros(limits.len()); n_particles];
                for (d, &(min, max)) in limits.iter().enumerate() {
                    let mut bins: Vec<usize> = (0..n_particles).collect();
                    rng.shuffle(&mut bins);
                    let bin_size = (max - min) / n_particles as Float;
                    for (i, &bin) in bins.iter().enumerate() {
                        let lower = (bin as Float).mul_add(bin_size, min);
                        lhs[i][d] = rng.range(lower, lower + bin_size);
                    }
                }
                lhs
            }
            Self::Custom(positions) => positions.clone(),
        }
    }
}

/// Methods for setting the initial velocity of particles in a swarm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SwarmVelocityInitializer {
    /// Initialize all velocities to zero
    Zero,
    /// Uniform distribution in `[min, max)` for every dimension.
    Uniform(Float, Float),
}
impl Default for SwarmVelocityInitializer {
    /// Uniform in `[0, 0.1)` for every dimension.
    fn default() -> Self {
        Self::Uniform(0.0, 0.1)
    }
}
impl SwarmVelocityInitializer {
    fn validate<E>(&self) -> Result<(), PsoError<E>> {
        match self {
            Self::Zero => Ok(()),
            Self::Uniform(lower, upper) => check_limit((*lower, *upper), "velocity limits"),
        }
    }
    /// Initialize the velocities of the particles in the swarm
    /// using the given random number generator and dimension.
    pub fn init_velocities(
        &self,
        rng: &mut Rng,
        dimension: usize,
        n_particles: usize,
    ) -> Vec<DVector<Float>> {
        match self {
            Self::Zero => (0..n_particles)
                .map(|_| DVector::zeros(dimension))
                .collect(),
            Self::Uniform(lower, upper) => (0..n_particles)
                .map(|_| generate_random_vector(dimension, *lower, *upper, rng))
                .collect(),
        }
    }
}

/// A particle with a position, velocity, and best known position
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SwarmParticle {
    /// The position of the particle and the value of the cost function there
    pub position: Point,
    /// The velocity of the particle
    pub velocity: DVector<Float>,
    /// The best position of the particle (as measured by the minimum value of `fx`)
    pub best: Point,
}
impl SwarmParticle {
    /// Create a new particle with the given position and velocity, evaluating the cost function
    /// at its position.
    ///
    /// # Errors
    ///
    /// Returns an evaluation error if the cost function fails or returns a non-finite value.
    pub fn new<F, U, E>(
        position: DVector<Float>,
        velocity: DVector<Float>,
        func: &F,
        args: &U,
    ) -> Result<Self, PsoError<E>>
    where
        F: CostFunction<U, E> + ?Sized,
    {
        let mut position = Point::from(position);
        position.evaluate(func, args)?;
        Ok(Self {
            position: position.clone(),
            velocity,
            best: position,
        })
    }
    /// Compare the best position to another particle
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.best.total_cmp(&other.best)
    }
    /// Move the particle along its velocity and evaluate the cost function at the new position.
    ///
    /// # Errors
    ///
    /// Returns an evaluation error if the cost function fails or returns a non-finite value.
    pub fn update_position<F, U, E>(
        &mut self,
        func: &F,
        args: &U,
        bounds: Option<(Float, Float)>,
    ) -> Result<(), PsoError<E>>
    where
        F: CostFunction<U, E> + ?Sized,
    {
        let mut new_position = &self.position.x + &self.velocity;
        if let Some((lower, upper)) = bounds {
            new_position.apply(|x| *x = x.clamp(lower, upper));
        }
        self.position.set_position(new_position);
        self.position.evaluate(func, args)
    }
    /// Replace the personal best with the current position if it is strictly better.
    pub fn update_best(&mut self) {
        if self.position.total_cmp(&self.best) == Ordering::Less {
            self.best = self.position.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_functions::{Rosenbrock, Sphere};
    use approx::assert_relative_eq;
    use nalgebra::dvector;
    use std::{
        convert::Infallible,
        sync::atomic::{AtomicUsize, Ordering as AtomicOrdering},
    };

    #[derive(Default)]
    struct CountingSphere {
        calls: AtomicUsize,
    }
    impl CostFunction for CountingSphere {
        fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, Infallible> {
            self.calls.fetch_add(1, AtomicOrdering::Relaxed);
            Ok(x.norm_squared())
        }
    }

    /// Fails anywhere outside the unit box.
    struct OnlyInsideUnitBox;
    impl CostFunction<(), String> for OnlyInsideUnitBox {
        fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, String> {
            if x.iter().all(|xi| xi.abs() <= 1.0) {
                Ok(x.norm_squared())
            } else {
                Err(format!("{} is out of range", x.amax()))
            }
        }
    }

    struct NanAwayFromOrigin;
    impl CostFunction for NanAwayFromOrigin {
        fn evaluate(&self, x: &DVector<Float>, _args: &()) -> Result<Float, Infallible> {
            Ok(if x.norm() > 10.0 { Float::NAN } else { x.norm() })
        }
    }

    const COEFFICIENTS: SwarmCoefficients = SwarmCoefficients {
        omega: 0.5,
        c1: 1.5,
        c2: 2.0,
    };

    fn swarm_with(n_particles: usize) -> Swarm {
        let mut swarm = Swarm::default();
        swarm.with_n_particles(n_particles);
        swarm
    }

    fn min_personal_best(swarm: &Swarm) -> Float {
        swarm
            .particles
            .iter()
            .map(|p| p.best.fx)
            .fold(Float::INFINITY, Float::min)
    }

    #[test]
    fn test_initialize_sets_global_best() {
        for (n, d) in [(1, 1), (5, 2), (20, 3), (7, 10)] {
            let mut rng = Rng::with_seed(n as u64 * 31 + d as u64);
            let mut swarm = swarm_with(n);
            swarm.initialize(&mut rng, d, &Sphere, &()).unwrap();
            assert_eq!(swarm.particles.len(), n);
            assert_eq!(swarm.gbest.fx, min_personal_best(&swarm));
            assert_eq!(swarm.gbest.x, swarm.particles[swarm.index_of_best()].best.x);
            for particle in &swarm.particles {
                assert_eq!(particle.position.x, particle.best.x);
                assert!(particle.position.x.iter().all(|x| (0.0..5.0).contains(x)));
                assert!(particle.velocity.iter().all(|v| (0.0..0.1).contains(v)));
            }
        }
    }

    #[test]
    fn test_positions_are_drawn_before_velocities() {
        let mut rng = Rng::with_seed(11);
        let mut swarm = swarm_with(4);
        swarm.initialize(&mut rng, 3, &Sphere, &()).unwrap();
        let mut expected = Rng::with_seed(11);
        let positions: Vec<Float> = (0..12).map(|_| expected.range(0.0, 5.0)).collect();
        let velocities: Vec<Float> = (0..12).map(|_| expected.range(0.0, 0.1)).collect();
        for (i, particle) in swarm.particles.iter().enumerate() {
            assert_eq!(particle.position.x.as_slice(), &positions[3 * i..3 * i + 3]);
            assert_eq!(particle.velocity.as_slice(), &velocities[3 * i..3 * i + 3]);
        }
    }

    #[test]
    fn test_best_values_never_increase() {
        for random_draw in [SwarmRandomDraw::Shared, SwarmRandomDraw::PerDimension] {
            let mut rng = Rng::with_seed(3);
            let mut swarm = swarm_with(15);
            swarm.with_random_draw(random_draw);
            swarm.initialize(&mut rng, 3, &Rosenbrock, &()).unwrap();
            for _ in 0..40 {
                let gbest = swarm.gbest.fx;
                let pbests: Vec<Float> = swarm.particles.iter().map(|p| p.best.fx).collect();
                swarm.step(COEFFICIENTS, &mut rng, &Rosenbrock, &()).unwrap();
                assert!(swarm.gbest.fx <= gbest);
                for (particle, pbest) in swarm.particles.iter().zip(pbests) {
                    assert!(particle.best.fx <= pbest);
                    assert!(particle.best.fx <= particle.position.fx);
                }
                assert_eq!(swarm.gbest.fx, min_personal_best(&swarm));
            }
        }
    }

    #[test]
    fn test_one_evaluation_per_particle() {
        for random_draw in [SwarmRandomDraw::Shared, SwarmRandomDraw::PerDimension] {
            let func = CountingSphere::default();
            let mut rng = Rng::with_seed(0);
            let mut swarm = swarm_with(13);
            swarm.with_random_draw(random_draw);
            swarm.initialize(&mut rng, 4, &func, &()).unwrap();
            assert_eq!(func.calls.load(AtomicOrdering::Relaxed), 13);
            for step in 1..=5 {
                swarm.step(COEFFICIENTS, &mut rng, &func, &()).unwrap();
                assert_eq!(func.calls.load(AtomicOrdering::Relaxed), 13 * (step + 1));
            }
        }
    }

    #[test]
    fn test_shared_draw_update() {
        let mut rng = Rng::with_seed(21);
        let mut swarm = swarm_with(2);
        swarm
            .with_position_initializer(SwarmPositionInitializer::Custom(vec![
                dvector![1.0, 1.0],
                dvector![3.0, -1.0],
            ]))
            .with_velocity_initializer(SwarmVelocityInitializer::Zero);
        swarm.initialize(&mut rng, 2, &Sphere, &()).unwrap();
        assert_eq!(swarm.gbest.x, dvector![1.0, 1.0]);

        let mut expected = rng.clone();
        let _r1 = expected.float();
        let r2 = expected.float();
        swarm.step(COEFFICIENTS, &mut rng, &Sphere, &()).unwrap();
        // the best particle has nowhere to go, the other is pulled toward it
        assert_eq!(swarm.particles[0].position.x, dvector![1.0, 1.0]);
        let moved = &swarm.particles[1].position.x;
        assert_relative_eq!(moved[0], 3.0 - 4.0 * r2);
        assert_relative_eq!(moved[1], -1.0 + 4.0 * r2);
        // exactly two numbers are drawn per step
        assert_eq!(rng.u64(..), expected.u64(..));
    }

    #[test]
    fn test_per_dimension_draws() {
        let mut rng = Rng::with_seed(8);
        let mut swarm = swarm_with(3);
        swarm.with_shared_random_draw(false);
        assert_eq!(swarm.random_draw, SwarmRandomDraw::PerDimension);
        swarm.initialize(&mut rng, 2, &Sphere, &()).unwrap();
        let mut expected = rng.clone();
        for _ in 0..3 * 2 * 2 {
            expected.float();
        }
        swarm.step(COEFFICIENTS, &mut rng, &Sphere, &()).unwrap();
        assert_eq!(rng.u64(..), expected.u64(..));
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let mut rng = Rng::with_seed(0);
        let mut swarm = swarm_with(3);
        swarm.with_position_initializer(SwarmPositionInitializer::Custom(vec![
            dvector![0.0, 2.0],
            dvector![1.0, 0.0],
            dvector![0.0, -1.0],
        ]));
        swarm.initialize(&mut rng, 2, &Sphere, &()).unwrap();
        assert_eq!(swarm.index_of_best(), 1);
        assert_eq!(swarm.gbest.x, dvector![1.0, 0.0]);
        assert_eq!(swarm.gbest.fx, 1.0);
    }

    #[test]
    fn test_bounds_clamp_positions() {
        let mut rng = Rng::with_seed(4);
        let mut swarm = swarm_with(10);
        swarm
            .with_bounds(Some((-1.0, 1.0)))
            .with_position_initializer(SwarmPositionInitializer::Uniform(-1.0, 1.0))
            .with_velocity_initializer(SwarmVelocityInitializer::Uniform(-50.0, 50.0));
        swarm.initialize(&mut rng, 3, &OnlyInsideUnitBox, &()).unwrap();
        for _ in 0..20 {
            let coefficients = SwarmCoefficients {
                omega: 1.0,
                c1: 2.0,
                c2: 2.0,
            };
            swarm
                .step(coefficients, &mut rng, &OnlyInsideUnitBox, &())
                .unwrap();
            for particle in &swarm.particles {
                assert!(particle.position.x.iter().all(|x| (-1.0..=1.0).contains(x)));
            }
        }
    }

    #[test]
    fn test_evaluation_failures() {
        let mut rng = Rng::with_seed(4);
        let mut swarm = swarm_with(10);
        swarm
            .with_position_initializer(SwarmPositionInitializer::Uniform(-1.0, 1.0))
            .with_velocity_initializer(SwarmVelocityInitializer::Uniform(5.0, 6.0));
        swarm.initialize(&mut rng, 2, &OnlyInsideUnitBox, &()).unwrap();
        let err = swarm
            .step(COEFFICIENTS, &mut rng, &OnlyInsideUnitBox, &())
            .unwrap_err();
        assert!(matches!(err, PsoError::Evaluation { .. }));

        let mut swarm = swarm_with(4);
        swarm.with_position_initializer(SwarmPositionInitializer::Uniform(20.0, 30.0));
        let err = swarm
            .initialize(&mut rng, 2, &NanAwayFromOrigin, &())
            .unwrap_err();
        assert!(matches!(err, PsoError::NonFinite { value, .. } if value.is_nan()));
        assert!(err.is_evaluation_error());
    }

    #[test]
    fn test_invalid_configurations() {
        let mut invalid = vec![(swarm_with(0), 2), (swarm_with(5), 0)];
        let mut swarm = swarm_with(5);
        swarm.with_bounds(Some((1.0, 1.0)));
        invalid.push((swarm, 2));
        let mut swarm = swarm_with(5);
        swarm.with_bounds(Some((0.0, Float::INFINITY)));
        invalid.push((swarm, 2));
        let mut swarm = swarm_with(5);
        swarm.with_position_initializer(SwarmPositionInitializer::RandomInLimits(vec![(
            0.0, 1.0,
        )]));
        invalid.push((swarm, 2));
        let mut swarm = swarm_with(5);
        swarm.with_position_initializer(SwarmPositionInitializer::LatinHypercube(vec![
            (0.0, 1.0),
            (3.0, 2.0),
        ]));
        invalid.push((swarm, 2));
        let mut swarm = swarm_with(2);
        swarm.with_position_initializer(SwarmPositionInitializer::Custom(vec![
            dvector![0.0, 0.0],
        ]));
        invalid.push((swarm, 2));
        let mut swarm = swarm_with(1);
        swarm.with_position_initializer(SwarmPositionInitializer::Custom(vec![dvector![0.0]]));
        invalid.push((swarm, 2));
        let mut swarm = swarm_with(5);
        swarm.with_velocity_initializer(SwarmVelocityInitializer::Uniform(1.0, 0.0));
        invalid.push((swarm, 2));

        for (mut swarm, dimension) in invalid {
            let mut rng = Rng::with_seed(0);
            let err = swarm
                .initialize(&mut rng, dimension, &Sphere, &())
                .unwrap_err();
            assert!(matches!(err, PsoError::InvalidConfiguration(_)));
            assert!(!err.is_evaluation_error());
        }
    }

    #[test]
    fn test_latin_hypercube_covers_every_bin() {
        let mut rng = Rng::with_seed(9);
        let limits = vec![(0.0, 10.0), (-5.0, 5.0)];
        let positions = SwarmPositionInitializer::LatinHypercube(limits.clone())
            .init_positions(&mut rng, 2, 10);
        for (d, (min, _)) in limits.into_iter().enumerate() {
            let mut bins: Vec<usize> = positions
                .iter()
                .map(|p| (p[d] - min).floor() as usize)
                .collect();
            bins.sort_unstable();
            assert_eq!(bins, (0..10).collect::<Vec<usize>>());
        }
    }
}
