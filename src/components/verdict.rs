use leptos::html::Div;
use leptos::prelude::*;

use crate::bindings::AnalysisResult;
use crate::services::controller::use_controller;
use crate::utils::dom::scroll_into_center;
use crate::utils::formatting::{format_percent, meter_width};

/// Which way a classification went. Drives every fake/real style choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Fake,
    Real,
}

impl Verdict {
    pub fn from_is_fake(is_fake: bool) -> Self {
        if is_fake {
            Verdict::Fake
        } else {
            Verdict::Real
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Verdict::Fake => "fake",
            Verdict::Real => "real",
        }
    }
}

/// Warning circle for fake, check circle for real.
#[component]
pub fn VerdictIcon(verdict: Verdict) -> impl IntoView {
    let path = match verdict {
        Verdict::Fake => "M12 9V13M12 17H12.01M21 12C21 16.9706 16.9706 21 12 21C7.02944 21 3 16.9706 3 12C3 7.02944 7.02944 3 12 3C16.9706 3 21 7.02944 21 12Z",
        Verdict::Real => "M9 12L11 14L15 10M21 12C21 16.9706 16.9706 21 12 21C7.02944 21 3 16.9706 3 12C3 7.02944 7.02944 3 12 3C16.9706 3 21 7.02944 21 12Z",
    };

    view! {
        <div id="resultIcon" class=format!("result-icon {}", verdict.class())>
            <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path
                    d=path
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
        </div>
    }
}

/// Results panel for the analyze tab. Hidden until a verdict arrives, then
/// scrolled into view.
#[component]
pub fn AnalysisResults() -> impl IntoView {
    let analyze = use_controller().analyze;
    let panel_ref = NodeRef::<Div>::new();

    Effect::new(move |_| {
        if analyze.result.with(Option::is_some) {
            request_animation_frame(move || {
                if let Some(panel) = panel_ref.get_untracked() {
                    scroll_into_center(&panel);
                }
            });
        }
    });

    view! {
        <div
            id="resultsSection"
            class="results-section"
            class:hidden=move || analyze.result.with(Option::is_none)
            node_ref=panel_ref
        >
            {move || analyze.result.get().map(|result| view! { <VerdictSummary result=result /> })}
            <div class="confidence-meter">
                <div class="confidence-track">
                    <div
                        id="confidenceFill"
                        class="confidence-fill"
                        style:width=move || meter_width(analyze.meter_fill.get())
                    ></div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn VerdictSummary(result: AnalysisResult) -> impl IntoView {
    let verdict = Verdict::from_is_fake(result.is_fake);

    view! {
        <div class="result-header">
            <VerdictIcon verdict=verdict />
            <div>
                <h3 id="resultLabel" class=format!("result-label {}", verdict.class())>
                    {result.label}
                </h3>
                <p class="confidence-caption">
                    "Confidence: "
                    <span id="confidenceValue">{format_percent(result.confidence)}</span>
                </p>
            </div>
        </div>
        <div class="probabilities">
            <div class="probability fake">
                <span class="probability-label">"Fake"</span>
                <span id="probFake" class="probability-value">
                    {format_percent(result.probability_fake)}
                </span>
            </div>
            <div class="probability real">
                <span class="probability-label">"Real"</span>
                <span id="probReal" class="probability-value">
                    {format_percent(result.probability_real)}
                </span>
            </div>
        </div>
    }
}
