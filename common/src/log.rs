//! Logging macros routed through `tracing` with the workspace targets.
//!
//! The CLI formatter keys its prefixes off these targets and writes them to
//! stdout as program output. Library diagnostics use `tracing` directly and end
//! up on stderr.

pub const TARGET: &str = "anastomo";
pub const SUCCESS_TARGET: &str = "anastomo::success";
pub const PRINT_TARGET: &str = "anastomo::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: $crate::log::TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: $crate::log::TARGET, $($arg)*)
    };
}
