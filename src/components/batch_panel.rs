use leptos::ev;
use leptos::prelude::*;

use crate::bindings::BatchResultItem;
use crate::components::design_system::Button;
use crate::components::verdict::Verdict;
use crate::services::controller::use_controller;
use crate::utils::formatting::{batch_caption, format_percent};

#[component]
pub fn BatchPanel() -> impl IntoView {
    let controller = use_controller();
    let batch = controller.batch;
    let max_texts = controller.config.with_value(|c| c.max_batch_size);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit_batch();
    };

    view! {
        <form id="batchForm" class="batch-form" on:submit=on_submit>
            <label for="batchText" class="field-label">
                {format!("One text per line, up to {max_texts}")}
            </label>
            <textarea
                id="batchText"
                rows="10"
                placeholder="Headline one\nHeadline two"
                prop:value=move || batch.input.get()
                on:input=move |ev| batch.input.set(event_target_value(&ev))
            ></textarea>
            <Button
                button_type="submit"
                class="batch-btn"
                loading=Signal::derive(move || batch.is_busy())
            >
                {move || if batch.is_busy() { "Checking..." } else { "Check All" }}
            </Button>
        </form>

        {move || {
            batch.results.get().map(|results| {
                let (flagged, total) = batch.tally().unwrap_or_default();
                view! {
                    <div id="batchResults" class="batch-results">
                        <p id="batchSummary" class="batch-summary">{batch_caption(flagged, total)}</p>
                        <ul class="batch-list">
                            {results
                                .into_iter()
                                .map(|row| view! { <BatchRow row=row /> })
                                .collect_view()}
                        </ul>
                    </div>
                }
            })
        }}
    }
}

#[component]
fn BatchRow(row: BatchResultItem) -> impl IntoView {
    let verdict = Verdict::from_is_fake(row.is_fake);

    view! {
        <li class="batch-row">
            <span class="batch-text">{row.text}</span>
            <span class=format!("verdict-badge {}", verdict.class())>{row.label}</span>
            <span class="verdict-confidence">{format_percent(row.confidence)}</span>
        </li>
    }
}
