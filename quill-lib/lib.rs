//! Text editing for single-buffer UI widgets.
//!
//! [`editor::Editor`] owns a string, a selection and a snapshot history, and
//! turns [`editor::Command`]s into buffer and selection changes. Geometry
//! dependent movement (up, down, line edges) is resolved from
//! [`quill_core::navigation::NavigationIndices`] computed by the renderer.

pub mod clipboard;
pub mod config;
pub mod editor;
pub mod history;
pub mod movement;

pub use editor::{
  Command,
  Editor,
  Selection,
};
