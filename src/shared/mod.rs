//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Laufzeit-Optionen und den Zeichen-Vertrag, die zwischen `core`,
//! `app` und `render` geteilt werden.

pub mod options;
mod painter;

pub use options::EditorOptions;
pub use painter::Painter;
