//! Shared helpers for the browser tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use fake_news_detector_web::config::ClientConfig;
use fake_news_detector_web::services::controller::{provide_controller, DetectorController};
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// A fresh `<div>` appended to the body, so tests don't see each other's DOM.
pub fn fresh_container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

/// Mount `view` under a new controller and hand the controller back.
pub fn mount_with_controller<F, V>(container: &HtmlElement, view: F) -> DetectorController
where
    F: FnOnce() -> V + 'static,
    V: IntoView + 'static,
{
    let slot: Rc<Cell<Option<DetectorController>>> = Rc::new(Cell::new(None));
    let captured = slot.clone();

    mount_to(container.clone(), move || {
        captured.set(Some(provide_controller(ClientConfig::default())));
        view()
    })
    .forget();

    slot.get().expect("mount closure runs synchronously")
}

/// Let queued reactive updates reach the DOM.
pub async fn settle() {
    gloo_timers::future::TimeoutFuture::new(0).await;
}

pub fn find(container: &HtmlElement, selector: &str) -> Element {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

pub fn text_of(container: &HtmlElement, selector: &str) -> String {
    find(container, selector).text_content().unwrap_or_default()
}

pub fn count(container: &HtmlElement, selector: &str) -> u32 {
    container.query_selector_all(selector).unwrap().length()
}

pub fn click(container: &HtmlElement, selector: &str) {
    find(container, selector)
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

pub fn body_overflow() -> String {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}
