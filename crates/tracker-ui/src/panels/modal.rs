//! Export dialog.
//!
//! Mounted while the controller reports `ModalState::Open` and removed on
//! `Closed`. Clicks inside the dialog are translated into [`ModalAction`]s
//! and handed to the callback supplied by the app.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use tracker_core::view::export_modal;
use tracker_types::{
    Result,
    export::{Dataset, ExportFormat},
};

use crate::panels::js_err;
use crate::theme::{CLOSE_MODAL_CLASS, MODAL_CLASS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Close,
    Export(Dataset, ExportFormat),
}

impl ModalAction {
    /// Interpret the attributes of a clicked export button.
    pub fn from_attributes(dataset: Option<&str>, format: Option<&str>) -> Option<Self> {
        let dataset = Dataset::parse(dataset?)?;
        let format = ExportFormat::parse(format?)?;
        Some(ModalAction::Export(dataset, format))
    }
}

/// A mounted dialog and the listener attached to it.
pub struct MountedModal {
    element: Element,
    listener: Closure<dyn FnMut(Event)>,
}

impl MountedModal {
    pub fn mount(on_action: Rc<dyn Fn(ModalAction)>) -> Result<Self> {
        let document = gloo_utils::document();
        let element = document.create_element("div").map_err(js_err)?;
        element.set_class_name(MODAL_CLASS);
        element.set_inner_html(export_modal().as_str());

        let backdrop = element.clone();
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Some(action) = action_for_click(&backdrop, &target) {
                on_action(action);
            }
        });
        element
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(js_err)?;

        gloo_utils::body().append_child(&element).map_err(js_err)?;
        Ok(Self { element, listener })
    }

    pub fn unmount(self) {
        if let Err(e) = self
            .element
            .remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref())
        {
            log::warn!("Failed to detach export dialog listener: {:?}", e);
        }
        self.element.remove();
    }
}

fn action_for_click(backdrop: &Element, target: &Element) -> Option<ModalAction> {
    if target == backdrop {
        return Some(ModalAction::Close);
    }
    if target
        .closest(&format!(".{}", CLOSE_MODAL_CLASS))
        .ok()
        .flatten()
        .is_some()
    {
        return Some(ModalAction::Close);
    }
    let button = target.closest("[data-dataset]").ok().flatten()?;
    ModalAction::from_attributes(
        button.get_attribute("data-dataset").as_deref(),
        button.get_attribute("data-format").as_deref(),
    )
}
