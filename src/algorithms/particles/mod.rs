/// Implementation of the Particle Swarm Optimization (PSO) algorithm
pub mod pso;
pub use pso::{minimize, PSOConfig, PSO};

/// Inertia weight schedules for the [`PSO`] velocity update.
pub mod inertia;
pub use inertia::{InertiaWeight, BASE_PSO, DYNAMIC_WEIGHT_PSO};

/// [`Swarm`] type for swarm-based optimizers.
pub mod swarm;
pub use swarm::{
    Swarm, SwarmCoefficients, SwarmParticle, SwarmPositionInitializer, SwarmRandomDraw,
    SwarmVelocityInitializer,
};

/// [`SwarmStatus`] type for swarm-based optimizers.
pub mod swarm_status;
pub use swarm_status::SwarmStatus;
