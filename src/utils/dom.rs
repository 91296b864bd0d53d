//! Small imperative DOM helpers for the effects that signals can't express.

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smoothly scroll `el` to the vertical centre of the viewport.
pub fn scroll_into_center(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Suspend or restore scrolling of the page behind a modal.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let style = body.style();
    let outcome = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = outcome {
        log::warn!("Failed to update body overflow: {e:?}");
    }
}
