//! Run a callback once a document has finished parsing.
//!
//! [`on_dom_ready`] reads the host's `readyState` once. If the document is
//! `interactive` or `complete` the callback runs before the call returns;
//! otherwise it is registered as a one-shot `DOMContentLoaded` listener.
//! Hosts plug in through [`DocumentHost`]; [`Document`] is an in-memory
//! implementation of the HTML loading lifecycle.

pub mod config;
pub mod document;
pub mod error;
pub mod gate;
pub mod host;
pub mod signal;
pub mod state;

pub use config::ReadyConfig;
pub use document::{Document, LOAD, READY_STATE_CHANGE};
pub use error::ReadyError;
pub use gate::{
    CallbackValue, OnDomReadyCallback, ReadinessGate, on_dom_ready, on_dom_ready_value,
};
pub use host::{DOM_CONTENT_LOADED, DocumentHost, EventListener};
pub use signal::{DomReady, dom_ready_future};
pub use state::DocumentReadyState;

/// Crate-level alias for [`on_dom_ready`].
pub use gate::on_dom_ready as ready;
