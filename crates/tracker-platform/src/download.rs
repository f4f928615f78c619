//! File download through a transient anchor element.
//!
//! The payload is wrapped in a Blob, exposed through an object URL, and
//! clicked via a hidden `<a download>`. Both the URL and the anchor are
//! released before returning, whatever the outcome of the click.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use tracker_core::ports::DownloadPort;
use tracker_types::{ClientError, Result, export::ExportPayload};

const FALLBACK_MIME: &str = "application/octet-stream";

pub struct BrowserDownload;

impl BrowserDownload {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserDownload {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadPort for BrowserDownload {
    fn offer(&self, filename: &str, payload: &ExportPayload) -> Result<()> {
        let blob = to_blob(payload)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(download_err)?;
        let clicked = click_anchor(&url, filename);
        Url::revoke_object_url(&url).map_err(download_err)?;
        clicked?;
        log::info!("Offered {} ({} bytes)", filename, payload.bytes.len());
        Ok(())
    }
}

fn to_blob(payload: &ExportPayload) -> Result<Blob> {
    let parts = Array::of1(&Uint8Array::from(payload.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(payload.content_type.as_deref().unwrap_or(FALLBACK_MIME));
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(download_err)
}

fn click_anchor(url: &str, filename: &str) -> Result<()> {
    let document = gloo_utils::document();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(download_err)?
        .dyn_into()
        .map_err(|_| ClientError::Dom("created <a> is not an anchor".to_string()))?;
    anchor.style().set_property("display", "none").map_err(download_err)?;
    anchor.set_href(url);
    anchor.set_download(filename);

    gloo_utils::body().append_child(&anchor).map_err(download_err)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

fn download_err(e: JsValue) -> ClientError {
    ClientError::Download(format!("{:?}", e))
}
