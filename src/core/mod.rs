//! Core-Domänentypen: Graph, Netze, Pads, Leiterbahnen, Bauteile und DRC.

pub mod board;
pub mod catalog;
pub mod drc;
/// Geometrische Umrisse und Überlappungstests
pub mod geometry;
pub mod graph;
pub mod grid;
mod ids;
pub mod net;
pub mod pad;
pub mod part;
pub mod segment;
pub mod traversal;

pub use board::Board;
pub use catalog::{builtin_templates, find_template, PadTemplate, PartCategory, PartTemplate};
pub use drc::{
    find_violations, run_design_rule_check, DrcEntity, DrcReport, LogReporter, Violation,
    ViolationKind, ViolationReporter,
};
pub use geometry::Outline;
pub use graph::Graph;
pub use grid::{Grid, GridSnap};
pub use ids::{NetId, PadId, PartId, SegmentId};
pub use net::{Net, NetComponent};
pub use pad::{Pad, PadAnchor, PadArena};
pub use part::{Footprint, Part};
pub use segment::Segment;
