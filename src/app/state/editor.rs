use crate::core::{NetId, PadId, PartId};

/// Zeigermodus des Editors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    /// Standard: Elemente selektieren
    #[default]
    Normal,
    /// Selektierte Elemente ziehen
    Move,
    /// Leiterbahnen routen
    Route,
}

/// Zustand des Routing-Kopfes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteHead {
    /// Keine Route in Arbeit
    #[default]
    Detached,
    /// Route in Arbeit: `current` folgt dem Zeiger, `previous` ist der letzte feste Punkt
    Attached {
        /// Unsichtbares virtuelles Pad unter dem Zeiger
        current: PadId,
        /// Letztes festes Pad der Route
        previous: PadId,
        /// Netz, in dem geroutet wird
        net: NetId,
    },
}

/// Zustand des Editors zwischen zwei Zeigerereignissen
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Zeigermodus
    pub mode: CursorMode,
    /// Routing-Kopf (nur in `CursorMode::Route` angehängt)
    pub head: RouteHead,
    /// Ursprung des laufenden Zieh-Vorgangs (Move-Modus)
    pub move_origin: Option<glam::Vec2>,
    /// Bauteil, das gerade dem Zeiger folgt
    pub placing_part: Option<PartId>,
}

impl EditorState {
    /// Erstellt den Standardzustand (Normal-Modus, kein Routing)
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, wenn eine Route in Arbeit ist
    pub fn is_routing(&self) -> bool {
        matches!(self.head, RouteHead::Attached { .. })
    }
}
