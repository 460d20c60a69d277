//! Shared plumbing for the numeric conversion workspace: logging macros,
//! layered configuration loading and a few filesystem helpers.

#[cfg(feature = "config")]
pub mod config;
#[cfg(feature = "logging")]
pub mod logging;
pub mod utils;
