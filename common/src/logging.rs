//! Thin re-export of `tracing` so that dependent crates log through one facade
//! and do not need to depend on `tracing` themselves.

pub use tracing;

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => ($crate::logging::tracing::error!($($arg)+))
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => ($crate::logging::tracing::warn!($($arg)+))
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => ($crate::logging::tracing::info!($($arg)+))
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => ($crate::logging::tracing::debug!($($arg)+))
}

#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)+) => ($crate::logging::tracing::trace!($($arg)+))
}

/// Enters a debug-level span for the rest of the enclosing block.
#[macro_export]
macro_rules! log_span {
    ($name:expr $(, $($field:tt)+)?) => {
        let _span_guard =
            $crate::logging::tracing::debug_span!($name $(, $($field)+)?).entered();
    };
}
