//! Layered, retained-mode composition on top of [`crate::Editor`].
//!
//! A [`Workspace`](model::Workspace) holds ordered named layers of ordered named components.
//! Nothing is drawn until [`generate`](model::Workspace::generate) replays every layer.

mod generate;
/// Workspace, layer and component types.
pub mod model;
