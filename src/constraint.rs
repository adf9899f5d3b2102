//! Breakable distance constraints between pairs of particles.

use crate::config::{SolverConfig, CORRECTION_FACTOR, MIN_DISTANCE};
use crate::interaction::Interaction;
use crate::particle::Particle;

/// Why a constraint was deactivated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BreakCause {
    /// Endpoints drifted further apart than the break length.
    Overstretched,
    /// The cursor cut through the constraint's midpoint.
    Cut,
}

/// Result of visiting one constraint during a relaxation pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relaxation {
    /// Constraint was already inactive.
    Inert,
    /// Constraint broke on this visit and moved nothing.
    Broken(BreakCause),
    /// Endpoints were pulled toward the rest length.
    Relaxed,
}

/// A distance constraint holding particle indices, never the particles.
///
/// Once `active` is false it stays false; inactive constraints are kept in
/// place so indices into the constraint list stay stable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceConstraint {
    pub a: usize,
    pub b: usize,
    pub active: bool,
}

impl DistanceConstraint {
    pub fn new(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "constraint endpoints must differ");
        DistanceConstraint { a, b, active: true }
    }

    /// Visit this constraint once.
    ///
    /// Reads positions fresh from `particles` and writes corrections back
    /// immediately, so later constraints in the same pass see them.
    pub fn relax(
        &mut self,
        particles: &mut [Particle],
        input: &Interaction,
        config: &SolverConfig,
    ) -> Relaxation {
        if !self.active {
            return Relaxation::Inert;
        }
        let a_pos = particles[self.a].pos;
        let b_pos = particles[self.b].pos;

        let delta = b_pos - a_pos;
        let mut dist = delta.length();
        if dist == 0.0 {
            dist = MIN_DISTANCE;
        }

        if dist > config.break_length {
            self.active = false;
            return Relaxation::Broken(BreakCause::Overstretched);
        }
        if input.cut && input.cursor_within(a_pos.midpoint(b_pos), config.cut_radius) {
            self.active = false;
            return Relaxation::Broken(BreakCause::Cut);
        }

        let force = (config.rest_length - dist) / dist * CORRECTION_FACTOR;
        let correction = delta.scale(force);
        particles[self.a].nudge(-correction);
        particles[self.b].nudge(correction);
        Relaxation::Relaxed
    }

    /// Current endpoint distance.
    pub fn length(&self, particles: &[Particle]) -> f64 {
        particles[self.a].pos.distance(particles[self.b].pos)
    }
}
