use crate::app::state::CursorMode;
use crate::core::{NetId, PadId, PartId};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Modus & Routing ===
    /// Zeigermodus setzen (bricht eine laufende Route ab)
    SetCursorMode { mode: CursorMode },
    /// Routing-Klick: Route beginnen, Ecke setzen oder abschließen
    RoutePress { world_pos: glam::Vec2 },
    /// Routing-Kopf auf eingerastete Position ziehen
    MoveRouteHead { world_pos: glam::Vec2 },
    /// Laufende Route verwerfen
    CancelRoute,

    // === Selektion ===
    /// Element unter dem Punkt selektieren
    SelectAt {
        world_pos: glam::Vec2,
        additive: bool,
    },
    /// Selektion aufheben
    ClearSelection,
    /// Zieh-Vorgang im Move-Modus beginnen
    BeginMove { world_pos: glam::Vec2 },
    /// Selektion bis zur neuen Zeigerposition ziehen
    MoveSelectionTo { world_pos: glam::Vec2 },
    /// Zieh-Vorgang beenden
    EndMove,

    // === Editing ===
    /// Selektierte Pads, Leiterbahnen und Bauteile löschen
    DeleteSelected,
    /// Freies Pad anlegen
    AddFreePad { world_pos: glam::Vec2 },
    /// Bauteil-Platzierung beginnen
    BeginPartPlacement { template: String },
    /// Platziertes Bauteil dem Zeiger nachführen
    MovePlacedPart { world_pos: glam::Vec2 },
    /// Platziertes Bauteil ablegen
    DropPlacedPart,
    /// Platzierung abbrechen (Bauteil wird entfernt)
    CancelPartPlacement,
    /// Bauteil um 90° drehen
    RotatePart { part: PartId, clockwise: bool },
    /// Standardwerte setzen
    SetDefaultSettings {
        trace_width: f32,
        ring_diameter: f32,
        hole_diameter: f32,
        component_spacing: f32,
    },
    /// Werte auf Selektion anwenden
    ApplySettingsToSelection {
        ring_diameter: f32,
        hole_diameter: f32,
        trace_width: f32,
    },

    // === Netze ===
    /// Netz anlegen
    CreateNet { name: String },
    /// Pad einem Netz zuordnen
    AssignPadToNet { pad: PadId, net: NetId },
    /// Pad aus seinem Netz lösen
    RemovePadFromNet { pad: PadId },
    /// Netzfarbe setzen
    SetNetColor { net: NetId, color: [f32; 4] },

    // === View ===
    /// Zeigerposition für die Koordinatenanzeige merken
    UpdateCursorPosition { world_pos: glam::Vec2 },

    // === DRC & Optionen ===
    /// Design-Rule-Check ausführen
    RunDesignRuleCheck,
    /// Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
}
