//! The document-like collaborator the readiness gate talks to.

use crate::state::DocumentReadyState;
use std::rc::Rc;
use std::sync::Arc;

/// Event name fired once initial parsing has completed.
pub const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";

/// A one-shot listener registered on the host.
pub type EventListener = Box<dyn FnOnce() + 'static>;

/// Minimal view of a document: a readable readiness state and a way to
/// subscribe to named events.
///
/// Hosts must deliver `DOMContentLoaded` at most once, so listeners never
/// need to be removed after they run.
pub trait DocumentHost {
    /// Current readiness of the document.
    fn ready_state(&self) -> DocumentReadyState;

    /// Register `listener` to run when `event` is next dispatched.
    fn add_event_listener(&self, event: &str, listener: EventListener);
}

impl<T: DocumentHost + ?Sized> DocumentHost for &T {
    fn ready_state(&self) -> DocumentReadyState {
        (**self).ready_state()
    }

    fn add_event_listener(&self, event: &str, listener: EventListener) {
        (**self).add_event_listener(event, listener);
    }
}

impl<T: DocumentHost + ?Sized> DocumentHost for Rc<T> {
    fn ready_state(&self) -> DocumentReadyState {
        (**self).ready_state()
    }

    fn add_event_listener(&self, event: &str, listener: EventListener) {
        (**self).add_event_listener(event, listener);
    }
}

impl<T: DocumentHost + ?Sized> DocumentHost for Arc<T> {
    fn ready_state(&self) -> DocumentReadyState {
        (**self).ready_state()
    }

    fn add_event_listener(&self, event: &str, listener: EventListener) {
        (**self).add_event_listener(event, listener);
    }
}
