//! Tuning constants and the solver configuration.
//!
//! The constants are the reference tuning of the cloth. They are behaviour,
//! not presentation: changing any of them changes every recorded trajectory.

use crate::error::PhysicsError;

/// Number of grid columns.
pub const GRID_COLS: usize = 50;
/// Number of grid rows. Row 0 is pinned.
pub const GRID_ROWS: usize = 30;
/// Horizontal distance between neighbouring particles at build time.
pub const SPACING_X: f64 = 20.0;
/// Vertical distance between neighbouring particles at build time.
pub const SPACING_Y: f64 = 28.0;
/// Particles closer than this to the cursor are grabbed while dragging.
pub const DRAG_RADIUS: f64 = 30.0;
/// Target distance of every constraint.
pub const REST_LENGTH: f64 = 20.0;
/// Constraints longer than this break.
pub const BREAK_LENGTH: f64 = 100.0;
/// Constraints whose midpoint is closer than this to the cursor are cut.
pub const CUT_RADIUS: f64 = 15.0;
/// Solver passes per tick.
pub const RELAX_ITERATIONS: usize = 6;
/// Per-axis limit on the implied velocity.
pub const VELOCITY_CLAMP: f64 = 20.0;
/// Added to the y displacement of every free particle each tick.
pub const GRAVITY: f64 = 0.4;
/// Implied velocity is multiplied by this each tick.
pub const DAMPING: f64 = 0.99;
/// Stand-in length for a constraint whose endpoints coincide.
pub const MIN_DISTANCE: f64 = 0.1;
/// Share of the length error each endpoint corrects.
pub const CORRECTION_FACTOR: f64 = 0.5;

/// Configuration for the integrator and the constraint solver.
///
/// # Builder Pattern
/// ```
/// use tatter::config::SolverConfig;
///
/// let config = SolverConfig::new()
///     .with_iterations(8)
///     .with_gravity(0.25)
///     .with_break_length(120.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Number of relaxation passes per tick. Default: 6.
    pub iterations: usize,
    /// Per-tick y displacement added to free particles. Default: 0.4.
    pub gravity: f64,
    /// Velocity damping factor. 1.0 = no damping. Default: 0.99.
    pub damping: f64,
    /// Per-axis clamp on implied velocity. Default: 20.
    pub velocity_clamp: f64,
    /// Constraint rest length. Default: 20.
    pub rest_length: f64,
    /// Constraint break length. Default: 100.
    pub break_length: f64,
    /// Drag capture radius. Default: 30.
    pub drag_radius: f64,
    /// Cut radius around constraint midpoints. Default: 15.
    pub cut_radius: f64,
}

impl SolverConfig {
    /// Create a new config with the reference tuning.
    pub fn new() -> Self {
        SolverConfig {
            iterations: RELAX_ITERATIONS,
            gravity: GRAVITY,
            damping: DAMPING,
            velocity_clamp: VELOCITY_CLAMP,
            rest_length: REST_LENGTH,
            break_length: BREAK_LENGTH,
            drag_radius: DRAG_RADIUS,
            cut_radius: CUT_RADIUS,
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_velocity_clamp(mut self, velocity_clamp: f64) -> Self {
        self.velocity_clamp = velocity_clamp;
        self
    }

    pub fn with_rest_length(mut self, rest_length: f64) -> Self {
        self.rest_length = rest_length;
        self
    }

    pub fn with_break_length(mut self, break_length: f64) -> Self {
        self.break_length = break_length;
        self
    }

    pub fn with_drag_radius(mut self, drag_radius: f64) -> Self {
        self.drag_radius = drag_radius;
        self
    }

    pub fn with_cut_radius(mut self, cut_radius: f64) -> Self {
        self.cut_radius = cut_radius;
        self
    }

    /// Check every value is finite and in range.
    ///
    /// Gravity may be any finite value; lengths, radii and the clamp must be
    /// non-negative, and at least one relaxation pass is required.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.iterations == 0 {
            return Err(PhysicsError::InvalidParameter { name: "iterations" });
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidParameter { name: "gravity" });
        }
        if !self.damping.is_finite() {
            return Err(PhysicsError::InvalidParameter { name: "damping" });
        }
        let non_negative = [
            ("velocity_clamp", self.velocity_clamp),
            ("rest_length", self.rest_length),
            ("break_length", self.break_length),
            ("drag_radius", self.drag_radius),
            ("cut_radius", self.cut_radius),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PhysicsError::InvalidParameter { name });
            }
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
