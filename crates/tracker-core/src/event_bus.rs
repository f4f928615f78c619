//! Event bus between the controller and the view.
//!
//! Single-threaded (WASM constraint), interior mutability via RefCell.
//! With no subscriber attached, events are buffered until drained; once a
//! subscriber is attached every event is delivered to it as it is emitted,
//! so busy indicators reach the page before the request is awaited.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracker_types::event::UiEvent;

type Listener = Rc<dyn Fn(&UiEvent)>;

/// Shared event bus, clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<UiEvent>>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Publish an event. Called by the controller.
    pub fn emit(&self, event: UiEvent) {
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        if listeners.is_empty() {
            self.inner.borrow_mut().push_back(event);
            return;
        }
        for listener in &listeners {
            listener(&event);
        }
    }

    /// Attach a listener. Anything buffered so far is replayed to it first.
    pub fn subscribe(&self, listener: impl Fn(&UiEvent) + 'static) {
        let listener: Listener = Rc::new(listener);
        for event in self.drain() {
            listener(&event);
        }
        self.listeners.borrow_mut().push(listener);
    }

    /// Drain all buffered events.
    pub fn drain(&self) -> Vec<UiEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
