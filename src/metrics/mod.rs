//! Result aggregation for stress stages.
mod aggregate;
mod stress;
mod table;


pub use aggregate::{AggregateResult, ResultWithValidity, UrlOutcome};
pub use stress::StressResult;
