//! In-memory document host with the HTML loading lifecycle.
//!
//! `Document` is a single-threaded handle; clones share the same state. It
//! keeps one-shot listeners per event name and drives `readyState` through
//! `loading -> interactive -> complete`, firing `readystatechange`,
//! `DOMContentLoaded` and `load` along the way.

use crate::host::{DOM_CONTENT_LOADED, DocumentHost, EventListener};
use crate::state::DocumentReadyState;
use core::cell::{Cell, RefCell};
use core::fmt::{Debug, Formatter, Result as FmtResult};
use log::{info, trace};
use std::collections::HashMap;
use std::rc::Rc;

/// Fired whenever `readyState` changes.
pub const READY_STATE_CHANGE: &str = "readystatechange";
/// Fired once the document and its subresources have loaded.
pub const LOAD: &str = "load";

#[derive(Default)]
struct DocumentInner {
    state: RefCell<DocumentReadyState>,
    listeners: RefCell<HashMap<String, Vec<EventListener>>>,
    dom_content_loaded_fired: Cell<bool>,
}

/// A shared handle to an in-memory document.
#[derive(Clone, Default)]
pub struct Document {
    inner: Rc<DocumentInner>,
}

impl Document {
    /// A new document in the `loading` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new document reporting `state`. No events are fired.
    ///
    /// An `interactive` or `complete` document counts as having already
    /// delivered `DOMContentLoaded`.
    pub fn with_state(state: DocumentReadyState) -> Self {
        let document = Self::default();
        document
            .inner
            .dom_content_loaded_fired
            .set(state.is_content_loaded());
        *document.inner.state.borrow_mut() = state;
        document
    }

    /// Update `readyState`, dispatching `readystatechange` if it changed.
    pub fn set_ready_state(&self, state: DocumentReadyState) {
        let changed = {
            let mut current = self.inner.state.borrow_mut();
            if *current == state {
                false
            } else {
                trace!("Document: readyState {} -> {}", *current, state);
                *current = state;
                true
            }
        };
        if changed {
            self.dispatch_event(READY_STATE_CHANGE);
        }
    }

    /// Run and drop every listener registered for `event`, returning how many ran.
    ///
    /// Listeners added while the dispatch is in progress wait for the next one.
    pub fn dispatch_event(&self, event: &str) -> usize {
        let pending = self
            .inner
            .listeners
            .borrow_mut()
            .remove(event)
            .unwrap_or_default();
        let count = pending.len();
        trace!("Document: dispatching `{event}` to {count} listener(s)");
        for listener in pending {
            listener();
        }
        count
    }

    /// Mark parsing as finished: move to `interactive` and fire
    /// `DOMContentLoaded`. Returns `false` if it already fired.
    ///
    /// Never moves a `complete` document back to `interactive`.
    pub fn finish_parsing(&self) -> bool {
        if self.inner.dom_content_loaded_fired.replace(true) {
            return false;
        }
        let already_loaded = self.inner.state.borrow().is_content_loaded();
        if !already_loaded {
            self.set_ready_state(DocumentReadyState::Interactive);
        }
        info!("Document: dispatching {DOM_CONTENT_LOADED}");
        self.dispatch_event(DOM_CONTENT_LOADED);
        true
    }

    /// Mark loading as finished: finish parsing if needed, move to
    /// `complete` and fire `load`. Returns `false` if already complete.
    pub fn finish_loading(&self) -> bool {
        self.finish_parsing();
        if *self.inner.state.borrow() == DocumentReadyState::Complete {
            return false;
        }
        self.set_ready_state(DocumentReadyState::Complete);
        info!("Document: dispatching {LOAD}");
        self.dispatch_event(LOAD);
        true
    }

    /// Number of listeners waiting on `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.inner.listeners.borrow().get(event).map_or(0, Vec::len)
    }

    /// Whether [`Document::finish_parsing`] has fired `DOMContentLoaded`.
    pub fn dom_content_loaded_fired(&self) -> bool {
        self.inner.dom_content_loaded_fired.get()
    }
}

impl DocumentHost for Document {
    fn ready_state(&self) -> DocumentReadyState {
        self.inner.state.borrow().clone()
    }

    fn add_event_listener(&self, event: &str, listener: EventListener) {
        self.inner
            .listeners
            .borrow_mut()
            .entry(event.to_owned())
            .or_default()
            .push(listener);
    }
}

impl Debug for Document {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        let listeners = self.inner.listeners.borrow();
        let mut counts: Vec<(&str, usize)> = listeners
            .iter()
            .map(|(event, pending)| (event.as_str(), pending.len()))
            .collect();
        counts.sort_unstable();
        formatter
            .debug_struct("Document")
            .field("ready_state", &*self.inner.state.borrow())
            .field("listeners", &counts)
            .field(
                "dom_content_loaded_fired",
                &self.inner.dom_content_loaded_fired.get(),
            )
            .finish()
    }
}
