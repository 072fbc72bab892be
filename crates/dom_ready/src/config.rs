//! Configuration for the readiness gate.
//!
//! The only knob is whether arguments coming from dynamically typed callers
//! are checked before use. Debug builds check, release builds trust the
//! caller, and `DOM_READY_ENV=production` forces the trusted mode at runtime.

use std::env;

/// Environment variable naming the build mode.
pub const ENV_VAR: &str = "DOM_READY_ENV";

/// Runtime configuration for [`crate::ReadinessGate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadyConfig {
    /// Reject non-callable callbacks with [`crate::ReadyError::InvalidArgument`].
    pub validate_arguments: bool,
}

impl ReadyConfig {
    /// Construct a configuration with an explicit validation setting.
    #[inline]
    #[must_use]
    pub const fn new(validate_arguments: bool) -> Self {
        Self { validate_arguments }
    }

    /// Load configuration from the environment.
    ///
    /// Reads `DOM_READY_ENV`: `production` disables validation, any other
    /// value enables it. When unset, falls back to [`ReadyConfig::default`].
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        env::var(ENV_VAR)
            .ok()
            .map_or_else(Self::default, |mode| Self::from_mode(&mode))
    }

    fn from_mode(mode: &str) -> Self {
        Self::new(mode.trim() != "production")
    }
}

impl Default for ReadyConfig {
    fn default() -> Self {
        Self::new(cfg!(debug_assertions))
    }
}
