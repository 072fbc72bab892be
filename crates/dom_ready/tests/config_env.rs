//! `ReadyConfig::from_env` against the real process environment.
//!
//! Kept to a single test so nothing else in this binary touches
//! `DOM_READY_ENV` concurrently.

use dom_ready::{ReadyConfig, config::ENV_VAR};
use std::env;

fn set_mode(mode: Option<&str>) {
    match mode {
        // SAFETY: this is the only test in the binary, so no other thread
        // reads or writes the environment while it runs.
        Some(value) => unsafe { env::set_var(ENV_VAR, value) },
        // SAFETY: as above.
        None => unsafe { env::remove_var(ENV_VAR) },
    }
}

#[test]
fn from_env_follows_dom_ready_env() {
    set_mode(None);
    assert_eq!(ReadyConfig::from_env(), ReadyConfig::default());

    set_mode(Some("production"));
    assert_eq!(ReadyConfig::from_env(), ReadyConfig::new(false));

    set_mode(Some("development"));
    assert_eq!(ReadyConfig::from_env(), ReadyConfig::new(true));

    set_mode(Some(""));
    assert_eq!(ReadyConfig::from_env(), ReadyConfig::new(true));

    set_mode(None);
    assert_eq!(
        ReadyConfig::from_env().validate_arguments,
        cfg!(debug_assertions)
    );
}
