//! Tracker Core: the client controller and everything it needs that does
//! not touch the browser.
//!
//! Platform adapters implement the traits in [`ports`]; the DOM layer
//! subscribes to the [`event_bus::EventBus`].

pub mod ports;
pub mod event_bus;
pub mod session;
pub mod view;
pub mod controller;
