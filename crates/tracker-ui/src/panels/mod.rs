pub mod controls;
pub mod feed;
pub mod modal;
pub mod toast;

use tracker_types::ClientError;
use wasm_bindgen::JsValue;

pub(crate) fn js_err(e: JsValue) -> ClientError {
    ClientError::JsInterop(format!("{:?}", e))
}
