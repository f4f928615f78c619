//! Lookup of the page elements the console drives.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

use tracker_types::{ClientError, Result};

use crate::theme::EXAMPLE_BUTTON_SELECTOR;

pub const QUERY_INPUT_ID: &str = "queryInput";
pub const QUERY_BUTTON_ID: &str = "queryBtn";
pub const RESULTS_SECTION_ID: &str = "resultsSection";
pub const RESULTS_CONTENT_ID: &str = "resultsContent";
pub const CLEAR_RESULTS_ID: &str = "clearResults";
pub const LOADING_OVERLAY_ID: &str = "loadingOverlay";
pub const TOAST_CONTAINER_ID: &str = "toastContainer";
pub const TOTAL_QUERIES_ID: &str = "totalQueries";
pub const TOTAL_EMPLOYEES_ID: &str = "totalEmployees";
pub const VIEW_EMPLOYEES_ID: &str = "viewEmployees";
pub const RUN_BENCHMARK_ID: &str = "runBenchmark";
pub const VIEW_ACTIVITIES_ID: &str = "viewActivities";
pub const EXPORT_DATA_ID: &str = "exportData";
/// Optional container filled with the configured example questions
pub const EXAMPLE_QUERIES_ID: &str = "exampleQueries";

/// Handles to every element the console reads or writes, fetched once.
#[derive(Clone)]
pub struct PageElements {
    pub query_input: HtmlInputElement,
    pub query_button: HtmlButtonElement,
    pub results_section: HtmlElement,
    pub results_content: Element,
    pub clear_results: Element,
    pub loading_overlay: HtmlElement,
    pub toast_container: Element,
    pub total_queries: Element,
    pub total_employees: Element,
    pub view_employees: Element,
    pub run_benchmark: Element,
    pub view_activities: Element,
    pub export_data: Element,
    pub example_queries: Option<Element>,
}

impl PageElements {
    /// Fails with `ClientError::Dom` naming the first missing element.
    pub fn lookup() -> Result<Self> {
        Ok(Self {
            query_input: by_id(QUERY_INPUT_ID)?,
            query_button: by_id(QUERY_BUTTON_ID)?,
            results_section: by_id(RESULTS_SECTION_ID)?,
            results_content: by_id(RESULTS_CONTENT_ID)?,
            clear_results: by_id(CLEAR_RESULTS_ID)?,
            loading_overlay: by_id(LOADING_OVERLAY_ID)?,
            toast_container: by_id(TOAST_CONTAINER_ID)?,
            total_queries: by_id(TOTAL_QUERIES_ID)?,
            total_employees: by_id(TOTAL_EMPLOYEES_ID)?,
            view_employees: by_id(VIEW_EMPLOYEES_ID)?,
            run_benchmark: by_id(RUN_BENCHMARK_ID)?,
            view_activities: by_id(VIEW_ACTIVITIES_ID)?,
            export_data: by_id(EXPORT_DATA_ID)?,
            example_queries: gloo_utils::document().get_element_by_id(EXAMPLE_QUERIES_ID),
        })
    }

    /// Current preset question buttons (static or generated).
    pub fn example_buttons(&self) -> Vec<Element> {
        let mut buttons = Vec::new();
        if let Ok(list) = gloo_utils::document().query_selector_all(EXAMPLE_BUTTON_SELECTOR) {
            for i in 0..list.length() {
                if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    buttons.push(el);
                }
            }
        }
        buttons
    }
}

pub fn by_id<T: JsCast>(id: &str) -> Result<T> {
    gloo_utils::document()
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::Dom(format!("missing element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| ClientError::Dom(format!("element #{} has an unexpected type", id)))
}
