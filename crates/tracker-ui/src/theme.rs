//! Class names, labels and display values shared with the stylesheet.

pub const RESULT_ITEM_CLASS: &str = "result-item";
pub const TOAST_CLASS: &str = "toast";
pub const MODAL_CLASS: &str = "export-modal";
pub const CLOSE_MODAL_CLASS: &str = "close-modal";
pub const EXAMPLE_BUTTON_SELECTOR: &str = ".example-btn";

pub const QUERY_BUTTON_IDLE: &str =
    r#"<span class="btn-text">Ask</span><i class="fas fa-paper-plane"></i>"#;
pub const QUERY_BUTTON_BUSY: &str =
    r#"<span class="btn-text">Processing...</span><i class="fas fa-spinner fa-spin"></i>"#;

pub fn query_button_label(busy: bool) -> &'static str {
    if busy {
        QUERY_BUTTON_BUSY
    } else {
        QUERY_BUTTON_IDLE
    }
}

/// `display` value of the loading overlay
pub fn overlay_display(visible: bool) -> &'static str {
    if visible {
        "flex"
    } else {
        "none"
    }
}

/// `display` value of the results section
pub fn section_display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}
