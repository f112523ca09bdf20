//! Format rules and per-representation rule registries.

pub mod general;
mod registry;
mod rule;

pub use registry::FormatRegistry;
pub use rule::{Converter, FormatRule, FormatSpec, Pattern};
