//! Applies controller events to the page.

use std::cell::RefCell;
use std::rc::Rc;

use tracker_core::view::example_buttons;
use tracker_types::{
    Result,
    event::{ModalState, UiEvent},
};

use crate::dom::PageElements;
use crate::panels::modal::{ModalAction, MountedModal};
use crate::panels::{controls, feed, toast};

pub struct PageView {
    page: PageElements,
    modal: RefCell<Option<MountedModal>>,
    on_modal_action: Rc<dyn Fn(ModalAction)>,
}

impl PageView {
    /// `on_modal_action` receives clicks from the export dialog. It runs
    /// inside the dialog's own listener, so it must defer any work that
    /// closes the dialog (e.g. via `spawn_local`).
    pub fn new(page: PageElements, on_modal_action: Rc<dyn Fn(ModalAction)>) -> Self {
        Self {
            page,
            modal: RefCell::new(None),
            on_modal_action,
        }
    }

    pub fn page(&self) -> &PageElements {
        &self.page
    }

    /// Fill `#exampleQueries` with the configured questions, unless the page
    /// already ships its own buttons there.
    pub fn render_examples(&self, queries: &[String]) {
        if let Some(container) = &self.page.example_queries {
            if container.child_element_count() == 0 {
                container.set_inner_html(example_buttons(queries).as_str());
            }
        }
    }

    /// Mirror one event onto the page. DOM failures are logged, not raised:
    /// a broken page element must not take the controller down with it.
    pub fn apply(&self, event: &UiEvent) {
        if let Err(e) = self.try_apply(event) {
            log::warn!("Failed to apply {:?}: {}", event, e);
        }
    }

    fn try_apply(&self, event: &UiEvent) -> Result<()> {
        match event {
            UiEvent::QueryBusy(busy) => controls::set_query_busy(&self.page.query_button, *busy),
            UiEvent::Loading(visible) => controls::set_loading(&self.page.loading_overlay, *visible)?,
            UiEvent::CardPrepended(card) => feed::prepend_card(&self.page, card)?,
            UiEvent::FeedCleared => feed::clear(&self.page)?,
            UiEvent::QueryCount(count) => controls::set_counter(&self.page.total_queries, count),
            UiEvent::EmployeeTotal(total) => {
                controls::set_counter(&self.page.total_employees, total)
            }
            UiEvent::Toast(t) => {
                toast::show_toast(&self.page.toast_container, t)?;
            }
            UiEvent::Modal(state) => self.sync_modal(*state)?,
        }
        Ok(())
    }

    fn sync_modal(&self, state: ModalState) -> Result<()> {
        let mut mounted = self.modal.borrow_mut();
        match (state.is_open(), mounted.is_some()) {
            (true, false) => {
                *mounted = Some(MountedModal::mount(self.on_modal_action.clone())?);
            }
            (false, true) => {
                if let Some(modal) = mounted.take() {
                    modal.unmount();
                }
            }
            _ => {}
        }
        Ok(())
    }
}
