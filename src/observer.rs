//! Step observer trait for monitoring simulation ticks.

use crate::constraint::BreakCause;

/// Trait for observing simulation ticks.
///
/// A tick walks `Idle -> Integrating -> Relaxing(1..=n) -> Ready`; the hooks
/// fire as each phase finishes. All methods have default no-op
/// implementations.
pub trait StepObserver {
    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass (zero-based).
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when the constraint at `index` is deactivated.
    fn on_constraint_broken(&mut self, _index: usize, _cause: BreakCause) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Counts breaks across ticks and reports them through `ftlog`.
///
/// Each break is logged at `debug`; a summary is logged at `info` at the end
/// of any tick in which something broke.
#[cfg(feature = "logging")]
#[derive(Debug, Default)]
pub struct LogObserver {
    ticks: u64,
    overstretched: usize,
    cut: usize,
    broken_this_tick: usize,
}

#[cfg(feature = "logging")]
impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> u64 { self.ticks }
    pub fn overstretched(&self) -> usize { self.overstretched }
    pub fn cut(&self) -> usize { self.cut }
    pub fn total_broken(&self) -> usize { self.overstretched + self.cut }
}

#[cfg(feature = "logging")]
impl StepObserver for LogObserver {
    fn on_constraint_broken(&mut self, index: usize, cause: BreakCause) {
        match cause {
            BreakCause::Overstretched => self.overstretched += 1,
            BreakCause::Cut => self.cut += 1,
        }
        self.broken_this_tick += 1;
        ftlog::debug!("tick {}: constraint {} broken ({:?})", self.ticks, index, cause);
    }

    fn on_step_complete(&mut self) {
        if self.broken_this_tick > 0 {
            ftlog::info!(
                "tick {}: {} constraints broken ({} total)",
                self.ticks,
                self.broken_this_tick,
                self.total_broken(),
            );
        }
        self.broken_this_tick = 0;
        self.ticks += 1;
    }
}
