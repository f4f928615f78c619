//! Result feed. Cards are inserted newest first.

use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use tracker_types::{Result, event::Card};

use crate::dom::PageElements;
use crate::panels::js_err;
use crate::theme::{self, RESULT_ITEM_CLASS};

pub fn prepend_card(page: &PageElements, card: &Card) -> Result<()> {
    let item = gloo_utils::document()
        .create_element("div")
        .map_err(js_err)?;
    item.set_class_name(RESULT_ITEM_CLASS);
    item.set_attribute("data-card-id", &card.id.to_string())
        .map_err(js_err)?;
    item.set_inner_html(card.markup.as_str());

    let first = page.results_content.first_child();
    page.results_content
        .insert_before(&item, first.as_ref())
        .map_err(js_err)?;

    show_section(&page.results_section, true)?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    page.results_section
        .scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn clear(page: &PageElements) -> Result<()> {
    page.results_content.set_inner_html("");
    show_section(&page.results_section, false)
}

fn show_section(section: &HtmlElement, visible: bool) -> Result<()> {
    section
        .style()
        .set_property("display", theme::section_display(visible))
        .map_err(js_err)
}
