use crate::core::{PadId, PartId, SegmentId};
use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand.
///
/// Die Reihenfolge entspricht der Auswahlreihenfolge. Die `selected`-Flags
/// der Board-Elemente spiegeln diese Mengen.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selektierte schwebende Pads
    pub pads: IndexSet<PadId>,
    /// Selektierte Leiterbahnen
    pub segments: IndexSet<SegmentId>,
    /// Selektierte Bauteile
    pub parts: IndexSet<PartId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, wenn nichts selektiert ist
    pub fn is_empty(&self) -> bool {
        self.pads.is_empty() && self.segments.is_empty() && self.parts.is_empty()
    }
}
