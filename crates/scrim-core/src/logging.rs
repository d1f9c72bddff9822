#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Library crates emit `tracing` events at state transitions behind the
//! `tracing` feature; they never install a subscriber themselves. Binary
//! hosts that want output call one of the initializers here, available
//! behind the `tracing-json` feature.

/// Install a human-readable subscriber honoring `RUST_LOG`.
///
/// Call once at startup. Returns quietly if a global subscriber is already
/// installed, so embedding hosts keep control.
#[cfg(feature = "tracing-json")]
pub fn init() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Install a JSON subscriber honoring `RUST_LOG`, for production logging.
#[cfg(feature = "tracing-json")]
pub fn init_json() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
