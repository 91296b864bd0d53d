use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

use crate::bindings::SearchResultItem;
use crate::components::design_system::{Button, LoadingPanel};
use crate::components::verdict::Verdict;
use crate::services::controller::use_controller;
use crate::utils::dom::scroll_into_center;
use crate::utils::formatting::{format_percent, results_caption};

const GLOBE_PATH: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-1 17.93c-3.95-.49-7-3.85-7-7.93 0-.62.08-1.21.21-1.79L9 15v1c0 1.1.9 2 2 2v1.93zm6.9-2.54c-.26-.81-1-1.39-1.9-1.39h-1v-3c0-.55-.45-1-1-1H8v-2h2c.55 0 1-.45 1-1V7h2c1.1 0 2-.9 2-2v-.41c2.93 1.19 5 4.06 5 7.41 0 2.08-.8 3.97-2.1 5.39z";

/// Query form, loading panel and result grid for the news search tab.
#[component]
pub fn SearchPanel() -> impl IntoView {
    let controller = use_controller();
    let search = controller.search;
    let results_ref = NodeRef::<Div>::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit_search();
    };

    Effect::new(move |_| {
        if search.response.with(Option::is_some) {
            request_animation_frame(move || {
                if let Some(el) = results_ref.get_untracked() {
                    scroll_into_center(&el);
                }
            });
        }
    });

    view! {
        <form id="searchForm" class="search-form" on:submit=on_submit>
            <input
                id="searchQuery"
                type="search"
                placeholder="Search recent news, e.g. climate, markets, space"
                prop:value=move || search.query.get()
                on:input=move |ev| search.query.set(event_target_value(&ev))
            />
            <Button
                button_type="submit"
                class="search-btn"
                disabled=Signal::derive(move || search.is_busy())
            >
                "Search & Analyze"
            </Button>
        </form>

        <Show when=move || search.is_busy()>
            <div id="searchLoading">
                <LoadingPanel caption="Searching and analyzing news..." />
            </div>
        </Show>

        <div
            id="searchResults"
            class="search-results"
            class:hidden=move || search.response.with(Option::is_none)
            node_ref=results_ref
        >
            {move || {
                search.response.get().map(|response| {
                    view! {
                        <div class="results-header">
                            <h3>"Results for \"" <span id="queryDisplay">{response.query}</span> "\""</h3>
                            <span id="resultsCount">{results_caption(response.total_results)}</span>
                        </div>
                        <div id="resultsGrid" class="results-grid">
                            {response
                                .results
                                .into_iter()
                                .map(|item| view! { <ResultCard item=item /> })
                                .collect_view()}
                        </div>
                    }
                })
            }}
        </div>
    }
}

/// One search hit. Title and description are inserted as text, never as
/// markup.
#[component]
pub fn ResultCard(item: SearchResultItem) -> impl IntoView {
    let verdict = Verdict::from_is_fake(item.is_fake);

    view! {
        <div class="result-card-item">
            <div class="result-content">
                <span class="result-source">
                    <svg viewBox="0 0 24 24" fill="currentColor" width="12" height="12">
                        <path d=GLOBE_PATH />
                    </svg>
                    {item.source}
                </span>
                <h4 class="result-title">
                    <a href=item.url target="_blank" rel="noopener noreferrer">
                        {item.title}
                    </a>
                </h4>
                <p class="result-description">{item.description}</p>
            </div>
            <div class="result-verdict">
                <div class=format!("verdict-badge {}", verdict.class())>{item.label}</div>
                <div class="verdict-confidence">
                    <strong>{format_percent(item.confidence)}</strong>
                    " confidence"
                </div>
            </div>
        </div>
    }
}
