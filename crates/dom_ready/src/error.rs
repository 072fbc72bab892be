//! Errors reported by the readiness gate and its future.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Errors surfaced by the readiness gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadyError {
    /// The supplied callback is not callable.
    InvalidArgument(String),
    /// The host released the `DOMContentLoaded` listener without running it.
    SignalDropped,
}

impl Display for ReadyError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidArgument(message) => write!(formatter, "InvalidArgument: {message}"),
            Self::SignalDropped => formatter
                .write_str("DOMContentLoaded listener was dropped before the event fired"),
        }
    }
}

impl Error for ReadyError {}
