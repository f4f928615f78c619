//! DOM view layer.
//!
//! The page markup is an external collaborator; this crate looks up its
//! named elements once and applies controller events to them.

pub mod dom;
pub mod panels;
pub mod theme;
pub mod view;

#[cfg(test)]
mod tests;

pub use dom::PageElements;
pub use view::PageView;
