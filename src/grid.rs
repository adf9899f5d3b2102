//! Cloth grid construction: particle lattice plus structural constraints.

use crate::config::{GRID_COLS, GRID_ROWS, SPACING_X, SPACING_Y};
use crate::constraint::DistanceConstraint;
use crate::error::PhysicsError;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Configuration for a cloth grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
    /// Distance between neighbouring columns (x) and rows (y).
    pub spacing: Vec2,
    /// Position of particle (col 0, row 0).
    pub origin: Vec2,
    /// Added to each particle's position to get its previous position,
    /// giving the cloth an initial sway.
    pub seed_offset: Vec2,
}

impl GridConfig {
    pub fn new(cols: usize, rows: usize) -> Self {
        GridConfig {
            cols,
            rows,
            spacing: Vec2::new(SPACING_X, SPACING_Y),
            origin: Vec2::zero(),
            seed_offset: Vec2::zero(),
        }
    }

    /// Reference placement for a viewport `width` units wide.
    ///
    /// The cloth hangs a quarter of the way in and 100 units down; previous
    /// positions are laid out from (100, 108) instead, so the cloth starts
    /// out swinging sideways and slightly upward. Placement does not depend
    /// on the viewport height.
    pub fn for_viewport(width: f64) -> Self {
        let origin = Vec2::new(width / 4.0, 100.0);
        GridConfig {
            origin,
            seed_offset: Vec2::new(100.0, 108.0) - origin,
            ..Self::default()
        }
    }

    pub fn with_spacing(mut self, spacing: Vec2) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_seed_offset(mut self, seed_offset: Vec2) -> Self {
        self.seed_offset = seed_offset;
        self
    }

    /// Number of constraints `build` will create.
    pub fn constraint_count(&self) -> usize {
        let horizontal = self.cols.saturating_sub(1) * self.rows;
        let vertical = self.cols * self.rows.saturating_sub(1);
        horizontal + vertical
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(PhysicsError::InvalidGridDimensions { rows: self.rows, cols: self.cols });
        }
        if !self.spacing.is_finite() {
            return Err(PhysicsError::InvalidParameter { name: "spacing" });
        }
        if !self.origin.is_finite() {
            return Err(PhysicsError::InvalidParameter { name: "origin" });
        }
        if !self.seed_offset.is_finite() {
            return Err(PhysicsError::InvalidParameter { name: "seed_offset" });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(GRID_COLS, GRID_ROWS)
    }
}

/// Build the particle lattice and constraint topology.
///
/// Particle at (col, row) has index `row * cols + col`; row 0 is pinned.
/// Constraints are emitted horizontal first, then vertical, each in
/// row-major order. That order is the solver's visiting order.
pub fn build(
    config: &GridConfig,
) -> Result<(AllocVec<Particle>, AllocVec<DistanceConstraint>), PhysicsError> {
    config.validate()?;
    let GridConfig { cols, rows, spacing, origin, seed_offset } = *config;

    let mut particles = AllocVec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let pos = Vec2::new(
                col as f64 * spacing.x + origin.x,
                row as f64 * spacing.y + origin.y,
            );
            let mut p = Particle::with_prev(pos, pos + seed_offset);
            p.pinned = row == 0;
            particles.push(p);
        }
    }

    let mut constraints = AllocVec::with_capacity(config.constraint_count());

    // Horizontal: (col, col+1)
    for row in 0..rows {
        for col in 0..(cols - 1) {
            let a = row * cols + col;
            constraints.push(DistanceConstraint::new(a, a + 1));
        }
    }

    // Vertical: (row, row+1)
    for row in 0..(rows - 1) {
        for col in 0..cols {
            let a = row * cols + col;
            constraints.push(DistanceConstraint::new(a, a + cols));
        }
    }

    Ok((particles, constraints))
}
