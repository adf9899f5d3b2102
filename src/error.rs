//! Error types for cloth construction and queries.

use core::fmt;

/// Errors that can occur while building or querying a cloth.
///
/// Ticking a built cloth never fails; every variant here is raised before
/// the first tick or by an index query.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Grid must have at least one row and one column.
    InvalidGridDimensions { rows: usize, cols: usize },
    /// A configuration value is non-finite or out of its allowed range.
    InvalidParameter { name: &'static str },
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidGridDimensions { rows, cols } => {
                write!(f, "grid must be at least 1x1 (got {} rows, {} cols)", rows, cols)
            }
            PhysicsError::InvalidParameter { name } => {
                write!(f, "invalid configuration value: {}", name)
            }
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
