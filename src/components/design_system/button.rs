use leptos::prelude::*;
use leptos::ev;
use super::loading::LoadingSpinner;

/// Button variant styles
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Sample,
}

impl ButtonVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Sample => "btn btn-sample",
        }
    }
}

/// A styled button component with multiple variants
#[component]
pub fn Button(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Click handler
    #[prop(into, optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Whether to show a loading spinner
    #[prop(into, default = Signal::derive(|| false))]
    loading: Signal<bool>,
    /// `button` or `submit`
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Title/tooltip text
    #[prop(into, optional)]
    title: String,
    /// Button content
    children: Children,
) -> impl IntoView {
    let variant_class = variant.class();

    let is_disabled = move || disabled.get() || loading.get();

    let full_class = move || {
        let state_class = if loading.get() { "loading" } else { "" };
        format!("{variant_class} {state_class} {class}")
    };

    let handle_click = move |evt: ev::MouseEvent| {
        if !is_disabled() {
            if let Some(callback) = on_click {
                callback.run(evt);
            }
        }
    };

    view! {
        <button
            type=button_type
            class=full_class
            on:click=handle_click
            disabled=is_disabled
            title=title
        >
            {children()}
            <Show when=move || loading.get()>
                <LoadingSpinner size="sm" />
            </Show>
        </button>
    }
}
