use leptos::ev;
use leptos::prelude::*;

use crate::services::controller::use_controller;
use crate::utils::dom::set_body_scroll_locked;

/// The page-wide error dialog. Dismissed by the close button, a click on the
/// backdrop, or Escape.
#[component]
pub fn ErrorModal() -> impl IntoView {
    let modal = use_controller().modal;

    // Keep the page behind the dialog still while it is open
    Effect::new(move |_| {
        set_body_scroll_locked(modal.is_open());
    });

    let keydown = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && modal.visible.get_untracked() {
            modal.hide_error();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div
            id="errorModal"
            class="modal"
            class:hidden=move || !modal.is_open()
            role="dialog"
            aria-modal="true"
            on:click=move |_| modal.hide_error()
        >
            <div class="modal-content" on:click=|e: ev::MouseEvent| e.stop_propagation()>
                <div class="modal-header">
                    <h3>"Error"</h3>
                    <button
                        id="closeModal"
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| modal.hide_error()
                    >
                        "×"
                    </button>
                </div>
                <p id="errorMessage" class="modal-message">{move || modal.message.get()}</p>
            </div>
        </div>
    }
}
