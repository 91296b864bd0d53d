use leptos::prelude::*;

use crate::services::controller::use_controller;
use crate::services::tab_state::Tab;

/// Row of tab buttons. The active one carries the `active` class.
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs = use_controller().tabs;

    view! {
        <nav class="tab-nav" role="tablist">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="tab-btn"
                            class:active=move || tabs.is_active(tab)
                            aria-selected=move || tabs.is_active(tab).to_string()
                            data-tab=tab.id()
                            on:click=move |_| tabs.activate(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Content panel for `tab`. Panels stay mounted so their state survives
/// switching away and back.
#[component]
pub fn TabPanel(tab: Tab, children: Children) -> impl IntoView {
    let tabs = use_controller().tabs;

    view! {
        <section
            id=tab.panel_id()
            role="tabpanel"
            class="tab-content"
            class:active=move || tabs.is_active(tab)
        >
            {children()}
        </section>
    }
}
