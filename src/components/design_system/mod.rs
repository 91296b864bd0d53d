//! Design System Components for Leptos
//!
//! The small set of shared controls the detector page is built from.

mod button;
mod loading;


pub use button::{Button, ButtonVariant};
pub use loading::{LoadingPanel, LoadingSpinner};
