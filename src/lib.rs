//! Tearable Verlet cloth for games.
//!
//! `tatter` simulates a rectangular grid of point masses joined by breakable
//! distance constraints. Each tick integrates the particles with
//! previous-position Verlet (implicit velocity, per-axis clamp, damping,
//! gravity) and then relaxes the constraints with a few Gauss-Seidel passes.
//! Hosts feed in a cursor and two flags per tick: drag grabs nearby
//! particles, cut severs constraints near the cursor.
//!
//! # Features
//!
//! - **Flat stores**: particles and constraints live in plain vectors;
//!   constraints refer to particles by index
//! - **Tearing**: constraints break when overstretched or cut, and stay broken
//! - **Deterministic**: fixed visiting order, no randomness
//! - **Observable**: monitor ticks and breaks via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use tatter::{Cloth, GridConfig, Interaction, SolverConfig, Vec2};
//!
//! let mut cloth = Cloth::new(GridConfig::new(10, 8), SolverConfig::new()).unwrap();
//! let snapshot = cloth.tick(Interaction::cut_at(Vec2::new(30.0, 40.0)));
//! let lines = snapshot.segments().count();
//! assert!(lines <= cloth.constraint_count());
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "logging")]
extern crate std;

pub mod vec;
pub mod particle;
pub mod constraint;
pub mod solver;
pub mod grid;
pub mod cloth;
pub mod interaction;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::{BreakCause, DistanceConstraint, Relaxation};
pub use grid::GridConfig;
pub use cloth::{Cloth, Snapshot};
pub use interaction::Interaction;
pub use config::SolverConfig;
pub use observer::{StepObserver, NoOpStepObserver};
#[cfg(feature = "logging")]
pub use observer::LogObserver;
pub use error::PhysicsError;
