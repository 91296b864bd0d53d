use leptos::ev;
use leptos::html::Textarea;
use leptos::prelude::*;

use crate::components::design_system::Button;
use crate::components::verdict::AnalysisResults;
use crate::services::controller::use_controller;

/// Single-text form: textarea, live character count and submit button,
/// followed by the verdict panel.
#[component]
pub fn AnalyzePanel(textarea: NodeRef<Textarea>) -> impl IntoView {
    let controller = use_controller();
    let analyze = controller.analyze;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit_analyze();
    };

    view! {
        <form id="analyzeForm" class="analyze-form" on:submit=on_submit>
            <label for="newsText" class="field-label">"Paste a news article or headline"</label>
            <textarea
                id="newsText"
                rows="8"
                placeholder="Enter the text you want to check..."
                node_ref=textarea
                prop:value=move || analyze.text.get()
                on:input=move |ev| analyze.text.set(event_target_value(&ev))
            ></textarea>
            <div class="form-footer">
                <span class="char-counter">
                    <span id="charCount">{move || analyze.char_count()}</span>
                    " characters"
                </span>
                <Button
                    button_type="submit"
                    class="analyze-btn"
                    loading=Signal::derive(move || analyze.is_busy())
                >
                    <span class="btn-text">{move || analyze.button_caption()}</span>
                </Button>
            </div>
        </form>
        <AnalysisResults />
    }
}
