pub mod api;
pub mod export;
pub mod config;
pub mod error;
pub mod event;
pub mod markup;
pub mod notice;


pub use error::ClientError;
pub type Result<T> = std::result::Result<T, ClientError>;
