use leptos::prelude::*;

use crate::error::DetectorError;

/// The single error dialog. A new message replaces whatever is showing.
#[derive(Clone, Copy)]
pub struct ErrorModalState {
    pub message: RwSignal<String>,
    pub visible: RwSignal<bool>,
}

impl ErrorModalState {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(String::new()),
            visible: RwSignal::new(false),
        }
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.message.set(message.into());
        self.visible.set(true);
    }

    pub fn hide_error(&self) {
        self.visible.set(false);
    }

    pub fn report(&self, error: &DetectorError) {
        if !error.is_validation() {
            log::warn!("{error:?}");
        }
        self.show_error(error.to_string());
    }

    pub fn is_open(&self) -> bool {
        self.visible.get()
    }
}

impl Default for ErrorModalState {
    fn default() -> Self {
        Self::new()
    }
}
