//! Run a callback once the document has finished parsing.

use crate::config::ReadyConfig;
use crate::error::ReadyError;
use crate::host::{DOM_CONTENT_LOADED, DocumentHost};
use core::fmt::{Debug, Formatter, Result as FmtResult};
use log::{debug, trace, warn};

/// A callback run by [`on_dom_ready`].
pub type OnDomReadyCallback = Box<dyn FnOnce() + 'static>;

/// A callback argument as received from a dynamically typed caller, such as
/// a script binding. Only `Function` can be invoked.
pub enum CallbackValue {
    /// A callable value.
    Function(OnDomReadyCallback),
    /// The `undefined` value.
    Undefined,
    /// The `null` value.
    Null,
    /// A boolean primitive.
    Boolean(bool),
    /// A number primitive.
    Number(f64),
    /// A string primitive.
    String(String),
}

impl CallbackValue {
    /// Wrap a closure as a callable value.
    pub fn function<F: FnOnce() + 'static>(callback: F) -> Self {
        Self::Function(Box::new(callback))
    }

    /// Whether this value can be invoked.
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// The `typeof` name a script would observe for this value.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Function(_) => "function",
            Self::Undefined => "undefined",
            Self::Null => "object",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }

    fn invoke(self) {
        match self {
            Self::Function(callback) => callback(),
            other => warn!(
                "dom_ready: skipping callback of type `{}`, it is not a function",
                other.type_name()
            ),
        }
    }
}

impl Debug for CallbackValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Function(_) => formatter.write_str("Function(..)"),
            Self::Undefined => formatter.write_str("Undefined"),
            Self::Null => formatter.write_str("Null"),
            Self::Boolean(value) => formatter.debug_tuple("Boolean").field(value).finish(),
            Self::Number(value) => formatter.debug_tuple("Number").field(value).finish(),
            Self::String(value) => formatter.debug_tuple("String").field(value).finish(),
        }
    }
}

/// Decides, per call, whether a callback runs now or after `DOMContentLoaded`.
#[derive(Debug, Clone)]
pub struct ReadinessGate<H: DocumentHost> {
    host: H,
    config: ReadyConfig,
}

impl<H: DocumentHost> ReadinessGate<H> {
    /// Create a gate with the default configuration.
    pub fn new(host: H) -> Self {
        Self::with_config(host, ReadyConfig::default())
    }

    /// Create a gate with an explicit configuration.
    pub const fn with_config(host: H, config: ReadyConfig) -> Self {
        Self { host, config }
    }

    /// The host this gate reads from.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// The active configuration.
    pub const fn config(&self) -> ReadyConfig {
        self.config
    }

    /// Run `callback` now if the document is interactive or complete,
    /// otherwise once `DOMContentLoaded` fires.
    ///
    /// The readiness state is read exactly once. Panics raised by the
    /// callback are not caught.
    pub fn ready<F: FnOnce() + 'static>(&self, callback: F) {
        let state = self.host.ready_state();
        if state.is_content_loaded() {
            trace!("dom_ready: document is `{state}`, running callback immediately");
            callback();
        } else {
            debug!(
                "dom_ready: document is `{state}`, deferring callback to {DOM_CONTENT_LOADED}"
            );
            self.host.add_event_listener(DOM_CONTENT_LOADED, Box::new(callback));
        }
    }

    /// Like [`ReadinessGate::ready`], for a value of unknown type.
    ///
    /// # Errors
    ///
    /// Returns [`ReadyError::InvalidArgument`] when validation is enabled and
    /// `value` is not a function. Nothing is read from or registered on the
    /// host in that case.
    pub fn ready_value(&self, value: CallbackValue) -> Result<(), ReadyError> {
        if self.config.validate_arguments && !value.is_callable() {
            return Err(ReadyError::InvalidArgument("`callback` is not a function.".to_owned()));
        }
        self.ready(move || value.invoke());
        Ok(())
    }
}

/// Run `callback` after `DOMContentLoaded`, or immediately if it already fired.
pub fn on_dom_ready<H: DocumentHost, F: FnOnce() + 'static>(host: H, callback: F) {
    ReadinessGate::new(host).ready(callback);
}

/// [`on_dom_ready`] for a value of unknown type, using the default configuration.
///
/// # Errors
///
/// Returns [`ReadyError::InvalidArgument`] in validating builds when `value`
/// is not a function.
pub fn on_dom_ready_value<H: DocumentHost>(
    host: H,
    value: CallbackValue,
) -> Result<(), ReadyError> {
    ReadinessGate::new(host).ready_value(value)
}
