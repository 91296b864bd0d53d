use leptos::prelude::*;

use super::flow::{FlowGuard, FlowPhase};
use super::modal_service::ErrorModalState;
use crate::bindings::SearchResponse;
use crate::error::Result;
use crate::utils::validation::validate_query;

/// State of the news search tab.
#[derive(Clone, Copy)]
pub struct SearchState {
    pub query: RwSignal<String>,
    pub phase: RwSignal<FlowPhase>,
    /// Last successful response; `None` hides the results container.
    pub response: RwSignal<Option<SearchResponse>>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            phase: RwSignal::new(FlowPhase::Idle),
            response: RwSignal::new(None),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase.get().is_busy()
    }

    /// Validate the query and, if it passes, hide old results and enter
    /// `Loading` until the returned guard drops.
    pub fn begin(&self, modal: ErrorModalState) -> Option<(String, FlowGuard)> {
        self.phase.set(FlowPhase::Validating);
        match self.query.with_untracked(|query| validate_query(query)) {
            Ok(query) => {
                self.response.set(None);
                Some((query, FlowGuard::enter(self.phase, "search")))
            }
            Err(e) => {
                modal.report(&e);
                self.phase.set(FlowPhase::Idle);
                None
            }
        }
    }

    pub fn settle(&self, guard: &FlowGuard, outcome: Result<SearchResponse>, modal: ErrorModalState) {
        match outcome {
            Ok(response) => {
                log::debug!(
                    "search {:?}: {} results",
                    response.query,
                    response.results.len()
                );
                self.response.set(Some(response));
                guard.succeed();
            }
            Err(e) => {
                guard.fail();
                modal.report(&e);
            }
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
