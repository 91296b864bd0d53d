use leptos::prelude::*;

use super::flow::{FlowGuard, FlowPhase};
use super::modal_service::ErrorModalState;
use crate::bindings::BatchResultItem;
use crate::error::Result;
use crate::utils::validation::validate_batch;

/// State of the batch tab: several texts, one per line, checked in one call.
#[derive(Clone, Copy)]
pub struct BatchState {
    pub input: RwSignal<String>,
    pub phase: RwSignal<FlowPhase>,
    pub results: RwSignal<Option<Vec<BatchResultItem>>>,
}

impl BatchState {
    pub fn new() -> Self {
        Self {
            input: RwSignal::new(String::new()),
            phase: RwSignal::new(FlowPhase::Idle),
            results: RwSignal::new(None),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase.get().is_busy()
    }

    pub fn begin(
        &self,
        max_texts: usize,
        modal: ErrorModalState,
    ) -> Option<(Vec<String>, FlowGuard)> {
        self.phase.set(FlowPhase::Validating);
        match self.input.with_untracked(|input| validate_batch(input, max_texts)) {
            Ok(texts) => {
                self.results.set(None);
                Some((texts, FlowGuard::enter(self.phase, "batch")))
            }
            Err(e) => {
                modal.report(&e);
                self.phase.set(FlowPhase::Idle);
                None
            }
        }
    }

    pub fn settle(
        &self,
        guard: &FlowGuard,
        outcome: Result<Vec<BatchResultItem>>,
        modal: ErrorModalState,
    ) {
        match outcome {
            Ok(results) => {
                self.results.set(Some(results));
                guard.succeed();
            }
            Err(e) => {
                guard.fail();
                modal.report(&e);
            }
        }
    }

    /// `(flagged as fake, total)` for the last batch.
    pub fn tally(&self) -> Option<(usize, usize)> {
        self.results.with(|results| {
            results.as_ref().map(|items| {
                let fake = items.iter().filter(|item| item.is_fake).count();
                (fake, items.len())
            })
        })
    }
}

impl Default for BatchState {
    fn default() -> Self {
        Self::new()
    }
}
