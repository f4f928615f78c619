//! Wiring between the page and the controller.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlInputElement, KeyboardEvent, PromiseRejectionEvent};

use tracker_core::controller::Controller;
use tracker_core::event_bus::EventBus;
use tracker_platform::{BrowserDownload, HttpApi};
use tracker_types::{ClientError, Result, config::ClientConfig};
use tracker_ui::panels::modal::ModalAction;
use tracker_ui::{PageElements, PageView};

/// `<meta name="tracker-api-base" content="...">` overrides the backend address.
pub const API_BASE_META: &str = "tracker-api-base";

pub fn mount() -> Result<()> {
    let config = config_from_page();
    log::info!("Backend at {}", config.api_base);

    let events = EventBus::new();
    let api = Rc::new(HttpApi::new(&config));
    let controller = Controller::new(
        config,
        events.clone(),
        api,
        Rc::new(BrowserDownload::new()),
    );

    let page = PageElements::lookup()?;
    let view = Rc::new(PageView::new(page.clone(), modal_handler(&controller)));
    view.render_examples(&controller.config().example_queries);
    {
        let view = view.clone();
        events.subscribe(move |event| view.apply(event));
    }

    bind_query(&controller, &page)?;
    bind_examples(&controller, &page)?;
    bind_actions(&controller, &page)?;
    bind_unhandled_rejections(&controller)?;

    let startup = controller.clone();
    wasm_bindgen_futures::spawn_local(async move {
        startup.load_employee_count().await;
    });

    log::info!("Tracker console ready");
    Ok(())
}

/// Config defaults, with the backend address taken from the page if present.
pub fn config_from_page() -> ClientConfig {
    let selector = format!(r#"meta[name="{}"]"#, API_BASE_META);
    let base = gloo_utils::document()
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .filter(|content| !content.trim().is_empty());

    match base {
        Some(base) => ClientConfig::default().with_api_base(base.trim()),
        None => ClientConfig::default(),
    }
}

/// Best-effort text of a promise rejection reason.
pub fn rejection_reason(reason: &JsValue) -> String {
    if let Some(error) = reason.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    reason.as_string().unwrap_or_else(|| format!("{:?}", reason))
}

// ─── Bindings ────────────────────────────────────────────

fn bind_query(controller: &Controller, page: &PageElements) -> Result<()> {
    let submit = {
        let controller = controller.clone();
        let input = page.query_input.clone();
        Rc::new(move || submit_input(&controller, &input))
    };

    let on_click = submit.clone();
    listen(&page.query_button, "click", move |_| on_click())?;

    listen(&page.query_input, "keypress", move |event| {
        let enter = event
            .dyn_ref::<KeyboardEvent>()
            .map(|k| k.key() == "Enter")
            .unwrap_or(false);
        if enter {
            submit();
        }
    })
}

fn bind_examples(controller: &Controller, page: &PageElements) -> Result<()> {
    for button in page.example_buttons() {
        let controller = controller.clone();
        let input = page.query_input.clone();
        let source = button.clone();
        listen(&button, "click", move |_| {
            let Some(question) = source.get_attribute("data-query") else {
                return;
            };
            input.set_value(&question);
            submit_input(&controller, &input);
        })?;
    }
    Ok(())
}

fn bind_actions(controller: &Controller, page: &PageElements) -> Result<()> {
    let c = controller.clone();
    listen(&page.clear_results, "click", move |_| c.clear_results())?;

    let c = controller.clone();
    listen(&page.view_employees, "click", move |_| {
        let c = c.clone();
        wasm_bindgen_futures::spawn_local(async move { c.view_employees().await });
    })?;

    let c = controller.clone();
    listen(&page.run_benchmark, "click", move |_| {
        let c = c.clone();
        wasm_bindgen_futures::spawn_local(async move { c.run_benchmark().await });
    })?;

    let c = controller.clone();
    listen(&page.view_activities, "click", move |_| {
        let c = c.clone();
        wasm_bindgen_futures::spawn_local(async move { c.view_activities().await });
    })?;

    let c = controller.clone();
    listen(&page.export_data, "click", move |_| c.open_export())
}

fn bind_unhandled_rejections(controller: &Controller) -> Result<()> {
    let controller = controller.clone();
    listen(&gloo_utils::window(), "unhandledrejection", move |event| {
        let reason = event
            .dyn_ref::<PromiseRejectionEvent>()
            .map(|e| rejection_reason(&e.reason()))
            .unwrap_or_default();
        controller.report_unhandled(&reason);
    })
}

/// Dialog clicks are deferred to a task: closing the dialog drops the
/// listener that is delivering the click.
fn modal_handler(controller: &Controller) -> Rc<dyn Fn(ModalAction)> {
    let controller = controller.clone();
    Rc::new(move |action| {
        let controller = controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match action {
                ModalAction::Close => controller.close_export(),
                ModalAction::Export(dataset, format) => {
                    controller.download_export(dataset, format).await
                }
            }
        });
    })
}

fn submit_input(controller: &Controller, input: &HtmlInputElement) {
    let controller = controller.clone();
    let query = input.value();
    wasm_bindgen_futures::spawn_local(async move {
        controller.submit_query(&query).await;
    });
}

/// Attach a page-lifetime listener.
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| ClientError::JsInterop(format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}
