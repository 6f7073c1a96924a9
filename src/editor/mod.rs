//! The imperative editor and its operation vocabulary.

/// [`Editor`](image_editor::Editor) and its operations.
pub mod image_editor;
/// Typed operations, operation names and named parameters.
pub mod ops;
/// Inputs an editor can be started from.
pub mod source;
