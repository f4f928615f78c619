//! Submit button, loading overlay and the two header counters.

use web_sys::{Element, HtmlButtonElement, HtmlElement};

use tracker_types::Result;

use crate::panels::js_err;
use crate::theme;

pub fn set_query_busy(button: &HtmlButtonElement, busy: bool) {
    button.set_disabled(busy);
    button.set_inner_html(theme::query_button_label(busy));
}

pub fn set_loading(overlay: &HtmlElement, visible: bool) -> Result<()> {
    overlay
        .style()
        .set_property("display", theme::overlay_display(visible))
        .map_err(js_err)
}

pub fn set_counter(element: &Element, value: impl ToString) {
    element.set_text_content(Some(&value.to_string()));
}
