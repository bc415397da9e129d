use crate::algorithms::particles::SwarmStatus;

/// A trait which holds an [`observe`](`Observer::observe`) function that is called after every
/// step of a [`PSO`](crate::algorithms::particles::PSO) run with the current [`SwarmStatus`].
///
/// Observers can inspect the swarm but cannot stop a run early: every run uses its full
/// iteration budget.
pub trait Observer<U = ()> {
    /// A function that is called after every step of the optimizer. `iteration` is the
    /// zero-based index of the step that was just taken.
    fn observe(&mut self, iteration: usize, status: &SwarmStatus, args: &U);
}
