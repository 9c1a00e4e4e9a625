//! Step observer trait for monitoring cloth ticks.

/// Trait for observing simulation ticks.
///
/// Implement this trait to follow solver progress (debug overlays, sound cues
/// on tearing, profiling). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after every free point mass has been integrated and collided.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass, once torn links are dropped.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called for each link torn by excess stretch. `index` is its position
    /// in the link list at the start of the pass that tore it.
    fn on_tear(&mut self, _index: usize) {}

    /// Called when the cursor cuts a link.
    fn on_cut(&mut self, _index: usize) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Tallies link removals across ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TearCounter {
    pub torn: usize,
    pub cut: usize,
    pub ticks: usize,
}

impl StepObserver for TearCounter {
    fn on_tear(&mut self, _index: usize) {
        self.torn += 1;
    }

    fn on_cut(&mut self, _index: usize) {
        self.cut += 1;
    }

    fn on_step_complete(&mut self) {
        self.ticks += 1;
    }
}
