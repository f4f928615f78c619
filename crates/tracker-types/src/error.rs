use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Download error: {0}")]
    Download(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}
