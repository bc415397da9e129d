/// Module containing the particle swarm optimizer and its swarm.
pub mod particles;
