//! Subscriber setup for binaries and tests embedding this crate.
//!
//! The library crates only emit events through `tracing`; nothing is printed
//! until a subscriber is installed.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` is used (for
/// example `"info,neo_smart_contract=debug"`). Returns `false` when a global
/// subscriber was already installed.
pub fn init_tracing(default_directive: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    #[cfg(feature = "json-logs")]
    let result = fmt().json().with_env_filter(env_filter).try_init();

    #[cfg(not(feature = "json-logs"))]
    let result = fmt().with_env_filter(env_filter).try_init();

    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        init_tracing("debug");
        assert!(!init_tracing("debug"));
    }
}
