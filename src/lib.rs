//! PCB Layout Editor Library.
//! Netz-Modell, Routing, Selektion und Design-Rule-Check als Library
//! exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CursorMode, EditorState, RouteHead,
    SelectionState, ViewState,
};
pub use core::{
    Board, DrcEntity, DrcReport, Grid, GridSnap, Net, NetComponent, NetId, Pad, PadAnchor, PadId,
    Part, PartId, Segment, SegmentId, Violation, ViolationKind, ViolationReporter,
};
pub use shared::{EditorOptions, Painter};
