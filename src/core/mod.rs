//! Canonical invoice model, builders, error types and totals.
//!
//! The canonical model is the flat business-document representation that
//! CII documents are converted into (and generated from).

mod builder;
mod error;
mod totals;
mod types;

pub use builder::*;
pub use error::*;
pub use totals::{DEFAULT_TAX_CATEGORY, calculate_totals, line_sum};
pub use types::*;
