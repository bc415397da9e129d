use std::{io::Write, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{
    algorithms::particles::{SwarmParticle, SwarmStatus},
    core::Point,
    logging::Logger,
    traits::Observer,
};

/// An [`Observer`] which stores the swarm particles' history as well as the
/// history of global best positions.
///
/// # Usage:
///
/// ```rust
/// use fastrand::Rng;
/// use swarmbench::algorithms::particles::PSO;
/// use swarmbench::observers::TrackingSwarmObserver;
/// use swarmbench::test_functions::Sphere;
///
/// let tracker = TrackingSwarmObserver::build();
/// let mut pso = PSO::new(2, Rng::with_seed(1));
/// pso.configure(|c| c.with_max_iterations(5).setup_swarm(|s| s.with_n_particles(4)))
///     .with_observer(tracker.clone());
/// pso.run(&Sphere, &()).unwrap();
/// assert_eq!(tracker.read().history.len(), 5);
/// ```
#[derive(Serialize, Deserialize, Default, Clone)]
pub struct TrackingSwarmObserver {
    /// The history of the swarm particles
    pub history: Vec<Vec<SwarmParticle>>,
    /// The history of the best position in the swarm
    pub best_history: Vec<Point>,
}

impl TrackingSwarmObserver {
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }

    /// Export the recorded history as a Python pickle.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the writer cannot be written to.
    pub fn to_pickle<W: Write>(&self, writer: &mut W) -> Result<(), serde_pickle::Error> {
        serde_pickle::to_writer(writer, self, Default::default())
    }
}

impl<U> Observer<U> for TrackingSwarmObserver {
    fn observe(&mut self, _iteration: usize, status: &SwarmStatus, _args: &U) {
        self.history.push(status.swarm.particles.clone());
        self.best_history.push(status.get_best());
    }
}

/// An [`Observer`] which writes one [`LogLevel::Debug`](crate::logging::LogLevel::Debug) line per
/// iteration with the inertia weight and the global best value.
#[derive(Clone)]
pub struct LoggingObserver {
    logger: Logger,
    label: String,
}

impl LoggingObserver {
    /// Create an observer which prefixes every line with `label`.
    pub fn new(logger: Logger, label: impl Into<String>) -> Self {
        Self {
            logger,
            label: label.into(),
        }
    }

    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build(logger: Logger, label: impl Into<String>) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::new(logger, label)))
    }
}

impl<U> Observer<U> for LoggingObserver {
    fn observe(&mut self, iteration: usize, status: &SwarmStatus, _args: &U) {
        self.logger.debug(format_args!(
            "{}: iteration {iteration}, w = {:.4}, best = {}",
            self.label, status.inertia_weight, status.swarm.gbest.fx
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::particles::PSO,
        logging::{tests::SharedBuffer, LogLevel},
        test_functions::Sphere,
    };
    use fastrand::Rng;

    #[test]
    fn test_tracking_observer_records_every_step() {
        let tracker = TrackingSwarmObserver::build();
        let mut pso = PSO::new(3, Rng::with_seed(7));
        pso.configure(|c| {
            c.with_max_iterations(12)
                .setup_swarm(|s| s.with_n_particles(6))
        })
        .with_observer(tracker.clone());
        let result = pso.run(&Sphere, &()).unwrap();
        let tracker = tracker.read();
        assert_eq!(tracker.history.len(), 12);
        assert!(tracker.history.iter().all(|step| step.len() == 6));
        assert!(tracker
            .best_history
            .windows(2)
            .all(|w| w[1].fx <= w[0].fx));
        let last = tracker.best_history.last().unwrap();
        assert_eq!(last.fx, result.fx);
        assert_eq!(last.x.as_slice(), result.x.as_slice());
    }

    #[test]
    fn test_tracking_observer_pickles() {
        let tracker = TrackingSwarmObserver::build();
        let mut pso = PSO::new(2, Rng::with_seed(3));
        pso.configure(|c| c.with_max_iterations(2).setup_swarm(|s| s.with_n_particles(3)))
            .with_observer(tracker.clone());
        pso.run(&Sphere, &()).unwrap();
        let mut buffer = Vec::new();
        tracker.read().to_pickle(&mut buffer).unwrap();
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_logging_observer() {
        let buffer = SharedBuffer::default();
        let logger = Logger::with_sink(LogLevel::Debug, buffer.clone());
        let mut pso = PSO::new(2, Rng::with_seed(5));
        pso.configure(|c| c.with_max_iterations(4).setup_swarm(|s| s.with_n_particles(3)))
            .with_observer(LoggingObserver::build(logger, "sphere_function"));
        pso.run(&Sphere, &()).unwrap();
        let out = buffer.contents();
        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("DEBUG: sphere_function: iteration 0, w = 0.5000"));
        assert!(out.contains("iteration 3"));
    }
}
