//! Browser tests for the composition root helpers.

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use tracker_app::{config_from_page, rejection_reason, API_BASE_META};

wasm_bindgen_test_configure!(run_in_browser);

fn set_meta(content: Option<&str>) {
    let head = gloo_utils::document().head().unwrap();
    head.set_inner_html("");
    if let Some(content) = content {
        head.set_inner_html(&format!(
            r#"<meta name="{}" content="{}">"#,
            API_BASE_META, content
        ));
    }
}

#[wasm_bindgen_test]
fn config_defaults_without_meta() {
    set_meta(None);
    assert_eq!(config_from_page().api_base, "http://localhost:8000");
}

#[wasm_bindgen_test]
fn config_reads_meta_base() {
    set_meta(Some("https://tracker.example.com/"));
    assert_eq!(config_from_page().api_base, "https://tracker.example.com");
    set_meta(None);
}

#[wasm_bindgen_test]
fn blank_meta_is_ignored() {
    set_meta(Some("  "));
    assert_eq!(config_from_page().api_base, "http://localhost:8000");
    set_meta(None);
}

#[wasm_bindgen_test]
fn rejection_reason_from_error_and_string() {
    let error = js_sys::Error::new("Failed to fetch");
    assert_eq!(rejection_reason(&error.into()), "Failed to fetch");
    assert_eq!(rejection_reason(&JsValue::from_str("boom")), "boom");
}
