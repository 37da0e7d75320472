// src/log.rs
//! Crate logging macros.
//!
//! Same macro names as always, but nothing is written here: every line goes to
//! the `log` facade under [`TARGET`], and whoever links the crate decides where
//! it ends up (or whether it goes anywhere).

pub const TARGET: &str = "ufc_scrape";

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Warn-level logging (data-quality problems that did not stop parsing)
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::log::warn!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!(target: $crate::log::TARGET, $($arg)*)
    };
}
