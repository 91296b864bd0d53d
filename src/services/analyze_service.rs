use leptos::prelude::*;

use super::flow::{FlowGuard, FlowPhase};
use super::modal_service::ErrorModalState;
use crate::bindings::AnalysisResult;
use crate::error::Result;
use crate::utils::formatting::{code_unit_len, format_count};
use crate::utils::validation::validate_analysis_text;

pub const ANALYZE_CAPTION: &str = "Analyze Text";
pub const ANALYZE_BUSY_CAPTION: &str = "Analyzing...";

/// State of the single-text analysis tab.
#[derive(Clone, Copy)]
pub struct AnalyzeState {
    /// Raw textarea content, untrimmed.
    pub text: RwSignal<String>,
    pub phase: RwSignal<FlowPhase>,
    /// Last successful verdict; `None` keeps the results panel hidden.
    pub result: RwSignal<Option<AnalysisResult>>,
    /// Confidence meter fill in percent, set after the animation delay.
    pub meter_fill: RwSignal<f64>,
}

impl AnalyzeState {
    pub fn new() -> Self {
        Self {
            text: RwSignal::new(String::new()),
            phase: RwSignal::new(FlowPhase::Idle),
            result: RwSignal::new(None),
            meter_fill: RwSignal::new(0.0),
        }
    }

    pub fn char_count(&self) -> String {
        self.text.with(|text| format_count(code_unit_len(text)))
    }

    pub fn is_busy(&self) -> bool {
        self.phase.get().is_busy()
    }

    pub fn button_caption(&self) -> &'static str {
        if self.is_busy() {
            ANALYZE_BUSY_CAPTION
        } else {
            ANALYZE_CAPTION
        }
    }

    /// Validate the current text. On success the flow is `Loading` until the
    /// returned guard drops; on failure the modal shows why and no request
    /// should be made.
    pub fn begin(&self, min_len: usize, modal: ErrorModalState) -> Option<(String, FlowGuard)> {
        self.phase.set(FlowPhase::Validating);
        let validated = self.text.with_untracked(|text| validate_analysis_text(text, min_len));
        match validated {
            Ok(text) => Some((text, FlowGuard::enter(self.phase, "analyze"))),
            Err(e) => {
                modal.report(&e);
                self.phase.set(FlowPhase::Idle);
                None
            }
        }
    }

    /// Apply the outcome of the request. Returns the confidence the meter
    /// should animate to when the request succeeded.
    pub fn settle(
        &self,
        guard: &FlowGuard,
        outcome: Result<AnalysisResult>,
        modal: ErrorModalState,
    ) -> Option<f64> {
        match outcome {
            Ok(result) => {
                let confidence = result.confidence;
                self.result.set(Some(result));
                guard.succeed();
                Some(confidence)
            }
            Err(e) => {
                guard.fail();
                modal.report(&e);
                None
            }
        }
    }

    /// Deferred half of a successful render. Skipped when the result has been
    /// cleared in the meantime.
    pub fn fill_meter(&self, confidence: f64) {
        if self.result.with_untracked(Option::is_some) {
            self.meter_fill.set(confidence);
        }
    }

    pub fn load_sample(&self, text: &str) {
        self.text.set(text.to_string());
        self.result.set(None);
        self.meter_fill.set(0.0);
    }
}

impl Default for AnalyzeState {
    fn default() -> Self {
        Self::new()
    }
}
