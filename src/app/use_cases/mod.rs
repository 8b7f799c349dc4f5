//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drc;
pub mod editing;
pub mod routing;
pub mod selection;
pub mod view;
