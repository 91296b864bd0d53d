//! Request lifecycle shared by every flow:
//! `Idle -> Validating -> Loading -> Success | Error -> Idle`.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowPhase {
    #[default]
    Idle,
    Validating,
    Loading,
    Success,
    Error,
}

impl FlowPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, FlowPhase::Loading)
    }
}

/// Held for the duration of one request. Entering puts the flow into
/// `Loading`; dropping always returns it to `Idle`, so the triggering control
/// is restored on every exit path.
#[must_use = "dropping the guard immediately ends the loading state"]
pub struct FlowGuard {
    phase: RwSignal<FlowPhase>,
    flow: &'static str,
}

impl FlowGuard {
    pub fn enter(phase: RwSignal<FlowPhase>, flow: &'static str) -> Self {
        phase.set(FlowPhase::Loading);
        log::debug!("{flow}: loading");
        Self { phase, flow }
    }

    pub fn succeed(&self) {
        self.phase.set(FlowPhase::Success);
        log::debug!("{}: success", self.flow);
    }

    pub fn fail(&self) {
        self.phase.set(FlowPhase::Error);
        log::debug!("{}: error", self.flow);
    }
}

impl Drop for FlowGuard {
    fn drop(&mut self) {
        self.phase.set(FlowPhase::Idle);
        log::debug!("{}: idle", self.flow);
    }
}
