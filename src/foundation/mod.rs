//! Shared value types, color parsing and the error taxonomy.

/// Color values and name resolution.
pub mod color;
/// Canvas description, alignment and blur enums, geometry checks.
pub mod core;
/// Error and result types.
pub mod error;
pub(crate) mod math;
