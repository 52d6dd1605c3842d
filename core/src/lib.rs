//! # Hemodynamic Evaluator
//!
//! Closed-form blood-flow models for the three segments of an anastomosis and
//! the heuristic scoring built on top of them.
//!
//! * [`hemodynamics`]: Reynolds number, flow regime, wall shear stress, volumetric flow.
//! * [`balance`]: cross-segment flow and pressure checks.
//! * [`stability`]: the 0-6 stability score, its verdict and feedback.
//! * [`recommendations`]: advisory items derived from the same metrics.
//! * [`evaluator`]: runs all of the above for one set of readings.
//! * [`gauge`]: full-scale fractions for visual gauges.
//! * [`report`]: flattened, localized, serializable view of an evaluation.
//!
//! Every function here is pure. Nothing is cached between evaluations.

pub mod balance;
pub mod evaluator;
pub mod gauge;
pub mod hemodynamics;
pub mod recommendations;
pub mod report;
pub mod stability;

pub use evaluator::{Evaluation, SegmentAnalysis, evaluate};
pub use report::Report;
