//! Logging shims.
//!
//! The crate never talks to a logging backend directly. Every call site goes
//! through one of the macros below, which forward to [`log`](https://docs.rs/log)
//! or [`tracing`](https://docs.rs/tracing) depending on the enabled feature.
//! Enable at most one of the two; with neither, the macros expand to nothing
//! and the arguments are not evaluated.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! What gets logged where:
//!
//! - `trace_log!`: per-node match decisions, cache hits and misses.
//! - `debug_log!`: resolved locations, navigation requests, filter passes,
//!   discarded stale fetches.
//! - `info_log!`: picker opened / closed.
//! - `warn_log!`: provider failures and empty datasets.
//! - `error_log!`: provider data of the wrong mode for the picker.
//!
//! ```ignore
//! use category_navigator::{debug_log, warn_log};
//!
//! debug_log!("Resolved location '{}' -> {:?}", raw, location);
//! warn_log!("Category provider failed: {}", err);
//! ```

/// Forward to `trace!` on the active backend.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Forward to `debug!` on the active backend.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Forward to `info!` on the active backend.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

/// Forward to `warn!` on the active backend.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}

/// Forward to `error!` on the active backend.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
    };
}
