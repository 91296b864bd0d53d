//! The page's view controller: one instance per page load, provided through
//! context, with one entry point per user flow.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::analyze_service::AnalyzeState;
use super::batch_service::BatchState;
use super::modal_service::ErrorModalState;
use super::search_service::SearchState;
use super::tab_state::{Tab, TabState};
use crate::bindings::{analyze_text, batch_analyze, search_news};
use crate::config::ClientConfig;

#[derive(Clone, Copy)]
pub struct DetectorController {
    pub config: StoredValue<ClientConfig>,
    pub tabs: TabState,
    pub modal: ErrorModalState,
    pub analyze: AnalyzeState,
    pub search: SearchState,
    pub batch: BatchState,
}

impl DetectorController {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            tabs: TabState::new(),
            modal: ErrorModalState::new(),
            analyze: AnalyzeState::new(),
            search: SearchState::new(),
            batch: BatchState::new(),
        }
    }

    pub fn submit_analyze(&self) {
        let this = *self;
        spawn_local(this.run_analyze());
    }

    pub fn submit_search(&self) {
        let this = *self;
        spawn_local(this.run_search());
    }

    pub fn submit_batch(&self) {
        let this = *self;
        spawn_local(this.run_batch());
    }

    async fn run_analyze(self) {
        let config = self.config.get_value();
        let Some((text, guard)) = self.analyze.begin(config.min_text_length, self.modal) else {
            return;
        };

        let outcome = analyze_text(&config, &text).await;
        if let Some(confidence) = self.analyze.settle(&guard, outcome, self.modal) {
            let analyze = self.analyze;
            let delay = config.meter_delay_ms;
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                analyze.fill_meter(confidence);
            });
        }
    }

    async fn run_search(self) {
        let config = self.config.get_value();
        let Some((query, guard)) = self.search.begin(self.modal) else {
            return;
        };

        let outcome = search_news(&config, &query).await;
        self.search.settle(&guard, outcome, self.modal);
    }

    async fn run_batch(self) {
        let config = self.config.get_value();
        let Some((texts, guard)) = self.batch.begin(config.max_batch_size, self.modal) else {
            return;
        };

        let outcome = batch_analyze(&config, &texts).await;
        self.batch.settle(&guard, outcome, self.modal);
    }

    /// Load a canned text into the analyze tab, switching to it and clearing
    /// any verdict already on screen.
    pub fn apply_sample(&self, text: &str) {
        self.tabs.activate(Tab::Analyze);
        self.analyze.load_sample(text);
    }
}

pub fn provide_controller(config: ClientConfig) -> DetectorController {
    let controller = DetectorController::new(config);
    provide_context(controller);
    controller
}

pub fn use_controller() -> DetectorController {
    expect_context::<DetectorController>()
}
