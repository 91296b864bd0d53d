//! Browser tests for the rendered panels.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

mod common;

use common::{click, count, find, fresh_container, mount_with_controller, settle, text_of};
use fake_news_detector_web::bindings::{AnalysisResult, SearchResponse, SearchResultItem};
use fake_news_detector_web::components::analyze_panel::AnalyzePanel;
use fake_news_detector_web::components::samples::{SampleButtons, SAMPLES};
use fake_news_detector_web::components::search_panel::{ResultCard, SearchPanel};
use fake_news_detector_web::components::tabs::{TabBar, TabPanel};
use fake_news_detector_web::components::verdict::AnalysisResults;
use fake_news_detector_web::services::tab_state::Tab;
use fake_news_detector_web::utils::formatting::{code_unit_len, format_count};
use leptos::html::Textarea;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlTextAreaElement;

wasm_bindgen_test_configure!(run_in_browser);

fn item(title: &str, description: &str, is_fake: bool) -> SearchResultItem {
    SearchResultItem {
        source: "Hacker News".to_string(),
        url: "https://example.com/story".to_string(),
        title: title.to_string(),
        description: description.to_string(),
        is_fake,
        label: if is_fake { "FAKE NEWS" } else { "REAL NEWS" }.to_string(),
        confidence: 73.5,
        published_at: None,
        probability_fake: None,
        probability_real: None,
    }
}

// ============================================================================
// Search Cards
// ============================================================================

#[wasm_bindgen_test]
fn test_result_card_renders_markup_as_text() {
    let container = fresh_container();
    let hostile = item(
        "<script>alert('x')</script>",
        "<img src=x onerror=alert(1)> & more",
        true,
    );

    mount_to(container.clone(), move || view! { <ResultCard item=hostile /> }).forget();

    assert_eq!(count(&container, "script"), 0);
    assert_eq!(count(&container, "img"), 0);
    assert_eq!(text_of(&container, ".result-title a"), "<script>alert('x')</script>");
    assert_eq!(
        text_of(&container, ".result-description"),
        "<img src=x onerror=alert(1)> & more"
    );
}

#[wasm_bindgen_test]
fn test_result_card_link_and_badge() {
    let container = fresh_container();
    let story = item("Scientists Discover New Deep Sea Species", "Marine biologists", false);

    mount_to(container.clone(), move || view! { <ResultCard item=story /> }).forget();

    let link = find(&container, ".result-title a");
    assert_eq!(link.get_attribute("href").as_deref(), Some("https://example.com/story"));
    assert_eq!(link.get_attribute("target").as_deref(), Some("_blank"));
    assert_eq!(link.get_attribute("rel").as_deref(), Some("noopener noreferrer"));

    let badge = find(&container, ".verdict-badge");
    assert!(badge.class_list().contains("real"));
    assert_eq!(text_of(&container, ".verdict-badge"), "REAL NEWS");
    assert_eq!(text_of(&container, ".verdict-confidence strong"), "73.5%");
}

#[wasm_bindgen_test]
async fn test_search_renders_one_card_per_result_in_order() {
    let container = fresh_container();
    let controller = mount_with_controller(&container, || view! { <SearchPanel /> });

    controller.search.response.set(Some(SearchResponse {
        success: true,
        results: vec![
            item("first", "a", false),
            item("second", "b", true),
            item("third", "c", false),
        ],
        query: "science".to_string(),
        total_results: 3,
    }));
    settle().await;

    assert_eq!(count(&container, ".result-card-item"), 3);
    assert_eq!(text_of(&container, "#resultsCount"), "3 results found");
    assert_eq!(text_of(&container, "#queryDisplay"), "science");

    let titles = container.query_selector_all(".result-title a").unwrap();
    let rendered: Vec<String> = (0..titles.length())
        .filter_map(|i| titles.item(i))
        .filter_map(|node| node.text_content())
        .collect();
    assert_eq!(rendered, vec!["first", "second", "third"]);

    // A new search replaces the previous cards
    controller.search.response.set(Some(SearchResponse {
        success: true,
        results: vec![item("only", "d", true)],
        query: "other".to_string(),
        total_results: 1,
    }));
    settle().await;
    assert_eq!(count(&container, ".result-card-item"), 1);
    assert_eq!(text_of(&container, "#resultsCount"), "1 results found");
}

// ============================================================================
// Analyze Verdict
// ============================================================================

#[wasm_bindgen_test]
async fn test_fake_verdict_rendering() {
    let container = fresh_container();
    let controller = mount_with_controller(&container, || view! { <AnalysisResults /> });

    assert!(find(&container, "#resultsSection").class_list().contains("hidden"));

    controller.analyze.result.set(Some(AnalysisResult {
        is_fake: true,
        label: "FAKE NEWS".to_string(),
        confidence: 92.0,
        probability_fake: 92.0,
        probability_real: 8.0,
    }));
    settle().await;

    assert!(!find(&container, "#resultsSection").class_list().contains("hidden"));
    assert!(find(&container, "#resultIcon").class_list().contains("fake"));
    assert!(find(&container, "#resultLabel").class_list().contains("fake"));
    assert_eq!(text_of(&container, "#resultLabel").trim(), "FAKE NEWS");
    assert_eq!(text_of(&container, "#confidenceValue"), "92%");
    assert_eq!(text_of(&container, "#probFake").trim(), "92%");
    assert_eq!(text_of(&container, "#probReal").trim(), "8%");
}

#[wasm_bindgen_test]
async fn test_real_verdict_rendering() {
    let container = fresh_container();
    let controller = mount_with_controller(&container, || view! { <AnalysisResults /> });

    controller.analyze.result.set(Some(AnalysisResult {
        is_fake: false,
        label: "REAL NEWS".to_string(),
        confidence: 64.25,
        probability_fake: 35.75,
        probability_real: 64.25,
    }));
    settle().await;

    assert!(find(&container, "#resultIcon").class_list().contains("real"));
    assert!(find(&container, "#resultLabel").class_list().contains("real"));
    assert_eq!(text_of(&container, "#confidenceValue"), "64.25%");
    assert_eq!(text_of(&container, "#probFake").trim(), "35.75%");
}

// ============================================================================
// Tabs and Samples
// ============================================================================

#[wasm_bindgen_test]
async fn test_tab_click_activates_matching_panel() {
    let container = fresh_container();
    mount_with_controller(&container, || {
        view! {
            <TabBar />
            <TabPanel tab=Tab::Analyze><p>"analyze"</p></TabPanel>
            <TabPanel tab=Tab::Search><p>"search"</p></TabPanel>
            <TabPanel tab=Tab::Batch><p>"batch"</p></TabPanel>
        }
    });

    click(&container, "[data-tab='search']");
    settle().await;

    assert_eq!(count(&container, ".tab-btn.active"), 1);
    assert_eq!(count(&container, ".tab-content.active"), 1);
    assert!(find(&container, "[data-tab='search']").class_list().contains("active"));
    assert!(find(&container, "#searchTab").class_list().contains("active"));
}

#[wasm_bindgen_test]
async fn test_sample_button_lands_on_analyze_tab() {
    let container = fresh_container();
    let controller = mount_with_controller(&container, || {
        let textarea = NodeRef::<Textarea>::new();
        view! {
            <TabBar />
            <TabPanel tab=Tab::Analyze>
                <AnalyzePanel textarea=textarea />
            </TabPanel>
            <TabPanel tab=Tab::Search><p>"search"</p></TabPanel>
            <SampleButtons textarea=textarea />
        }
    });

    controller.tabs.activate(Tab::Search);
    controller.analyze.result.set(Some(AnalysisResult {
        is_fake: false,
        label: "REAL NEWS".to_string(),
        confidence: 80.0,
        probability_fake: 20.0,
        probability_real: 80.0,
    }));
    settle().await;

    click(&container, ".btn-sample");
    settle().await;

    let sample = SAMPLES[0].text;
    let textarea = find(&container, "#newsText")
        .dyn_into::<HtmlTextAreaElement>()
        .unwrap();
    assert_eq!(textarea.value(), sample);
    assert_eq!(text_of(&container, "#charCount"), format_count(code_unit_len(sample)));
    assert!(find(&container, "#analyzeTab").class_list().contains("active"));
    assert!(find(&container, "#resultsSection").class_list().contains("hidden"));
}
