//! # Shared Types
//!
//! Everything the evaluator, the command line, and the tests agree on:
//!
//! * [`vessel`]: vessel segments and their raw readings.
//! * [`bounds`]: the accepted input ranges for each reading.
//! * [`units`]: conversions between clinical units and SI.
//! * [`locale`]: language selection for user-facing text.
//! * [`config`]: runtime options collected from the command line.
//! * [`error`]: input validation errors.
//! * [`log`]: logging macros with the workspace targets.

pub mod bounds;
pub mod config;
pub mod error;
pub mod locale;
pub mod log;
pub mod units;
pub mod vessel;

pub use tracing;
