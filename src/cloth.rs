//! The simulation: particle and constraint stores plus the per-tick driver.

use crate::config::SolverConfig;
use crate::constraint::DistanceConstraint;
use crate::error::PhysicsError;
use crate::grid::{self, GridConfig};
use crate::interaction::Interaction;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::solver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A tearable cloth.
///
/// Owns every particle and constraint. Nothing outside `tick` mutates them,
/// and a tick always runs to completion.
pub struct Cloth {
    particles: AllocVec<Particle>,
    constraints: AllocVec<DistanceConstraint>,
    grid: GridConfig,
    config: SolverConfig,
    ticks: u64,
}

impl Cloth {
    /// Build a cloth from a grid layout and solver tuning.
    pub fn new(grid: GridConfig, config: SolverConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        let (particles, constraints) = grid::build(&grid)?;
        Ok(Cloth { particles, constraints, grid, config, ticks: 0 })
    }

    /// Advance one tick: integrate, then relax `iterations` times.
    pub fn tick(&mut self, input: Interaction) -> Snapshot<'_> {
        self.tick_observed(input, &mut NoOpStepObserver)
    }

    pub fn tick_observed<O: StepObserver>(
        &mut self,
        input: Interaction,
        observer: &mut O,
    ) -> Snapshot<'_> {
        solver::integrate(&mut self.particles, &input, &self.config);
        observer.on_integrate();

        solver::relax(
            &mut self.particles,
            &mut self.constraints,
            &input,
            &self.config,
            observer,
        );

        self.ticks += 1;
        observer.on_step_complete();
        self.snapshot()
    }

    /// Read-only view for drawing.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot { particles: &self.particles, constraints: &self.constraints }
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.grid.cols + col
    }

    pub fn particle(&self, index: usize) -> Result<&Particle, PhysicsError> {
        self.particles.get(index).ok_or(PhysicsError::ParticleOutOfBounds {
            index,
            count: self.particles.len(),
        })
    }

    /// Position of (col, row). Panics if out of range.
    pub fn position_at(&self, col: usize, row: usize) -> Vec2 {
        self.particles[self.index(col, row)].pos
    }

    pub fn positions(&self) -> AllocVec<Vec2> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn particles(&self) -> &[Particle] { &self.particles }
    pub fn constraints(&self) -> &[DistanceConstraint] { &self.constraints }
    pub fn cols(&self) -> usize { self.grid.cols }
    pub fn rows(&self) -> usize { self.grid.rows }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    pub fn ticks(&self) -> u64 { self.ticks }
    pub fn grid_config(&self) -> &GridConfig { &self.grid }
    pub fn solver_config(&self) -> &SolverConfig { &self.config }

    pub fn active_constraint_count(&self) -> usize {
        self.constraints.iter().filter(|c| c.active).count()
    }
}

/// Borrowed view of the cloth after a tick.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a> {
    particles: &'a [Particle],
    constraints: &'a [DistanceConstraint],
}

impl<'a> Snapshot<'a> {
    pub fn particles(&self) -> &'a [Particle] { self.particles }
    pub fn constraints(&self) -> &'a [DistanceConstraint] { self.constraints }

    /// Point positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + 'a {
        let particles = self.particles;
        particles.iter().map(|p| p.pos)
    }

    /// Endpoints of every active constraint, in storage order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + 'a {
        let (particles, constraints) = (self.particles, self.constraints);
        constraints
            .iter()
            .filter(|c| c.active)
            .map(move |c| (particles[c.a].pos, particles[c.b].pos))
    }
}
