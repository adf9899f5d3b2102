//! Per-tick input snapshot from the host.

use crate::vec::Vec2;

/// What the host's input layer reports for one tick.
///
/// Taken by value in [`Cloth::tick`](crate::Cloth::tick), so it is fixed for
/// the whole tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Interaction {
    /// Cursor position in simulation space.
    pub cursor: Vec2,
    /// Grab particles near the cursor.
    pub drag: bool,
    /// Sever constraints whose midpoint is near the cursor.
    pub cut: bool,
    /// Host wants to exit. Ignored by the engine.
    pub quit_requested: bool,
}

impl Interaction {
    /// No buttons held; cursor at the origin.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn drag_at(cursor: Vec2) -> Self {
        Interaction { cursor, drag: true, ..Self::default() }
    }

    pub fn cut_at(cursor: Vec2) -> Self {
        Interaction { cursor, cut: true, ..Self::default() }
    }

    /// True when the cursor is strictly closer than `radius` to `point`.
    pub(crate) fn cursor_within(&self, point: Vec2, radius: f64) -> bool {
        point.distance(self.cursor) < radius
    }
}
