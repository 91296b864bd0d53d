use leptos::html::Textarea;
use leptos::prelude::*;

use crate::components::analyze_panel::AnalyzePanel;
use crate::components::batch_panel::BatchPanel;
use crate::components::error_modal::ErrorModal;
use crate::components::samples::SampleButtons;
use crate::components::search_panel::SearchPanel;
use crate::components::tabs::{TabBar, TabPanel};
use crate::config::ClientConfig;
use crate::services::controller::provide_controller;
use crate::services::tab_state::Tab;

#[component]
pub fn App() -> impl IntoView {
    // One controller per page load
    provide_controller(ClientConfig::load());

    // Shared so the sample buttons can focus the analyze textarea
    let textarea = NodeRef::<Textarea>::new();

    view! {
        <div class="container">
            <header class="page-header">
                <h1>"Fake News Detector"</h1>
                <p class="subtitle">"Check an article, search the news, or screen a batch of headlines."</p>
            </header>

            <TabBar />

            <main>
                <TabPanel tab=Tab::Analyze>
                    <AnalyzePanel textarea=textarea />
                </TabPanel>
                <TabPanel tab=Tab::Search>
                    <SearchPanel />
                </TabPanel>
                <TabPanel tab=Tab::Batch>
                    <BatchPanel />
                </TabPanel>
            </main>

            <aside class="samples-section">
                <SampleButtons textarea=textarea />
            </aside>
        </div>

        <ErrorModal />
    }
}
