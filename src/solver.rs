//! Integration and relaxation passes over the particle and constraint stores.

use crate::config::SolverConfig;
use crate::constraint::{DistanceConstraint, Relaxation};
use crate::interaction::Interaction;
use crate::observer::StepObserver;
use crate::particle::Particle;

/// Integrate every particle once, in index order.
pub fn integrate(particles: &mut [Particle], input: &Interaction, config: &SolverConfig) {
    for p in particles.iter_mut() {
        p.integrate(input, config);
    }
}

/// One relaxation pass over all constraints in storage order.
///
/// Returns the number of constraints that broke during the pass.
pub fn relax_pass<O: StepObserver>(
    particles: &mut [Particle],
    constraints: &mut [DistanceConstraint],
    input: &Interaction,
    config: &SolverConfig,
    observer: &mut O,
) -> usize {
    let mut broken = 0;
    for (index, c) in constraints.iter_mut().enumerate() {
        if let Relaxation::Broken(cause) = c.relax(particles, input, config) {
            broken += 1;
            observer.on_constraint_broken(index, cause);
        }
    }
    broken
}

/// `config.iterations` relaxation passes.
///
/// Passes are sequential and order dependent; a constraint that survives
/// pass `k` is checked again for breaking in pass `k + 1`.
pub fn relax<O: StepObserver>(
    particles: &mut [Particle],
    constraints: &mut [DistanceConstraint],
    input: &Interaction,
    config: &SolverConfig,
    observer: &mut O,
) -> usize {
    let mut broken = 0;
    for i in 0..config.iterations {
        broken += relax_pass(particles, constraints, input, config, observer);
        observer.on_constraint_iteration(i);
    }
    broken
}
