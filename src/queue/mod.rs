//! Deferred editing: record operations now, replay them on a worker pool later.

/// Recorded operations.
pub mod instruction;
/// Worker pool configuration.
pub mod opts;
/// [`InstructionQueue`](replay::InstructionQueue) and its replay.
pub mod replay;
