//! Verlet particles with implicit velocity.

use crate::config::SolverConfig;
use crate::interaction::Interaction;
use crate::vec::Vec2;

/// A Verlet particle: velocity is never stored, only implied by
/// `pos - prev_pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub prev_pos: Vec2,
    pub pinned: bool,
}

impl Particle {
    /// A free particle at rest.
    pub fn new(pos: Vec2) -> Self {
        Particle { pos, prev_pos: pos, pinned: false }
    }

    /// A free particle with an initial implied velocity of `pos - prev_pos`.
    pub fn with_prev(pos: Vec2, prev_pos: Vec2) -> Self {
        Particle { pos, prev_pos, pinned: false }
    }

    pub fn pinned(pos: Vec2) -> Self {
        Particle { pos, prev_pos: pos, pinned: true }
    }

    /// Advance one tick.
    ///
    /// A dragged particle is first teleported onto the cursor, so the jump
    /// shows up in the implied velocity (and is clamped) on the same tick.
    /// Gravity is added to y after the clamp.
    pub fn integrate(&mut self, input: &Interaction, config: &SolverConfig) {
        if self.pinned {
            return;
        }
        if input.drag && input.cursor_within(self.pos, config.drag_radius) {
            self.pos = input.cursor;
        }
        let velocity = (self.pos - self.prev_pos)
            .scale(config.damping)
            .clamp_axes(config.velocity_clamp);
        self.prev_pos = self.pos;
        self.pos.x += velocity.x;
        self.pos.y += velocity.y + config.gravity;
    }

    pub fn velocity_raw(&self) -> Vec2 {
        self.pos - self.prev_pos
    }

    /// Shift by `delta` unless pinned.
    pub fn nudge(&mut self, delta: Vec2) {
        if !self.pinned {
            self.pos += delta;
        }
    }
}
