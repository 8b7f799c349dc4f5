use crate::app::state::CursorMode;
use crate::core::{NetId, PadId, PartId};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärtaste gedrückt (Weltkoordinaten, ungerastert)
    PointerPressed {
        world_pos: glam::Vec2,
        additive: bool,
    },
    /// Zeiger bewegt (mit oder ohne gedrückte Taste)
    PointerMoved { world_pos: glam::Vec2 },
    /// Primärtaste losgelassen
    PointerReleased { world_pos: glam::Vec2 },
    /// Escape gedrückt
    EscapePressed,
    /// Selektierte Elemente löschen
    DeleteRequested,
    /// Zeigermodus wechseln
    CursorModeChanged { mode: CursorMode },
    /// Freies Pad an Position anlegen
    AddPadRequested { world_pos: glam::Vec2 },
    /// Bauteil aus dem Katalog platzieren (folgt dem Zeiger bis zum nächsten Klick)
    PlacePartRequested { template: String },
    /// Bauteil um 90° drehen
    RotatePartRequested { part: PartId, clockwise: bool },
    /// Standardwerte für neue Bahnen und Pads setzen
    DefaultSettingsChanged {
        trace_width: f32,
        ring_diameter: f32,
        hole_diameter: f32,
        component_spacing: f32,
    },
    /// Werte auf die aktuelle Selektion anwenden
    SelectionSettingsApplied {
        ring_diameter: f32,
        hole_diameter: f32,
        trace_width: f32,
    },
    /// Neues Netz anlegen
    CreateNetRequested { name: String },
    /// Pad einem Netz zuordnen
    AssignPadToNetRequested { pad: PadId, net: NetId },
    /// Pad aus seinem Netz lösen
    RemovePadFromNetRequested { pad: PadId },
    /// Netzfarbe ändern
    NetColorChanged { net: NetId, color: [f32; 4] },
    /// Design-Rule-Check starten
    DesignRuleCheckRequested,
    /// Optionen wurden geändert
    OptionsChanged { options: Box<EditorOptions> },
}
