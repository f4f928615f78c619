//! Browser adapters for the tracker-core ports.

pub mod http;
pub mod download;

pub use download::BrowserDownload;
pub use http::HttpApi;
