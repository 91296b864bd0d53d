use leptos::prelude::*;

/// A loading spinner component
#[component]
pub fn LoadingSpinner(
    /// Size: "sm", "md", or "lg"
    #[prop(default = "md")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("btn-loader spinner {}", spinner_size_class(size)) aria-hidden="true"></span>
    }
}

pub(crate) fn spinner_size_class(size: &str) -> &'static str {
    match size {
        "sm" => "spinner-sm",
        "lg" => "spinner-lg",
        _ => "spinner-md",
    }
}

/// Full-width busy panel with a caption underneath the spinner
#[component]
pub fn LoadingPanel(
    /// Caption shown under the spinner
    #[prop(into)]
    caption: String,
) -> impl IntoView {
    view! {
        <div class="loading-panel" role="status">
            <LoadingSpinner size="lg" />
            <p>{caption}</p>
        </div>
    }
}
