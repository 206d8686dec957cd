//! Input-conditioning core for the Rust stylus pipeline.
//!
//! The modules mirror the host driver's report pipeline while providing safe
//! abstractions and a well-defined smoothing stage: device reports flow in,
//! position jitter is blended out against the previously seen raw sample, and
//! every non-positional field passes through untouched.

pub mod filter;
pub mod math;
pub mod prelude;
pub mod report;
pub mod telemetry;

pub use prelude::{FilterError, FilterResult, PipelineStage, SmoothingConfig};
