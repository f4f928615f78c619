//! Toast notifications.
//!
//! Each toast owns its own timer. Expiry detaches the element if it is still
//! attached; `Element::remove` on a detached node is a no-op, so clearing the
//! container in the meantime is harmless.

use gloo_timers::callback::Timeout;
use web_sys::Element;

use tracker_core::view::toast_body;
use tracker_types::{Result, notice::Toast};

use crate::panels::js_err;
use crate::theme::TOAST_CLASS;

/// Append a toast to `container` and schedule its removal.
/// Returns the element so callers can inspect it.
pub fn show_toast(container: &Element, toast: &Toast) -> Result<Element> {
    let element = gloo_utils::document()
        .create_element("div")
        .map_err(js_err)?;
    element.set_class_name(&format!("{} {}", TOAST_CLASS, toast.kind.as_str()));
    element.set_attribute("data-toast-id", &toast.id.to_string())
        .map_err(js_err)?;
    element.set_inner_html(toast_body(toast).as_str());
    container.append_child(&element).map_err(js_err)?;

    let expiring = element.clone();
    Timeout::new(toast.duration_ms, move || expiring.remove()).forget();
    Ok(element)
}
