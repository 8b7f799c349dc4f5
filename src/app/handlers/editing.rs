//! Handler für Pads, Bauteile, Einstellungen und Netze.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{NetId, PadId, PartId};

/// Löscht alle aktuell selektierten Elemente.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}

/// Legt ein freies Pad an.
pub fn add_free_pad(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::editing::add_free_pad(state, world_pos);
}

/// Beginnt die Platzierung eines Katalog-Bauteils.
pub fn begin_part_placement(state: &mut AppState, template: &str) {
    use_cases::editing::begin_part_placement(state, template);
}

/// Führt das zu platzierende Bauteil nach.
pub fn move_placed_part(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::editing::move_placed_part(state, world_pos);
}

/// Legt das zu platzierende Bauteil ab.
pub fn drop_placed_part(state: &mut AppState) {
    use_cases::editing::drop_placed_part(state);
}

/// Bricht die Platzierung ab.
pub fn cancel_part_placement(state: &mut AppState) {
    use_cases::editing::cancel_part_placement(state);
}

/// Dreht ein Bauteil um 90°.
pub fn rotate_part(state: &mut AppState, part: PartId, clockwise: bool) {
    use_cases::editing::rotate_part(state, part, clockwise);
}

/// Setzt Standardwerte für neue Elemente.
pub fn set_default_settings(
    state: &mut AppState,
    trace_width: f32,
    ring_diameter: f32,
    hole_diameter: f32,
    component_spacing: f32,
) {
    use_cases::editing::set_default_settings(
        state,
        trace_width,
        ring_diameter,
        hole_diameter,
        component_spacing,
    );
}

/// Wendet Werte auf die Selektion an.
pub fn apply_settings_to_selection(
    state: &mut AppState,
    ring_diameter: f32,
    hole_diameter: f32,
    trace_width: f32,
) {
    use_cases::editing::apply_settings_to_selection(
        state,
        ring_diameter,
        hole_diameter,
        trace_width,
    );
}

/// Legt ein Netz an.
pub fn create_net(state: &mut AppState, name: &str) {
    use_cases::editing::create_net(state, name);
}

/// Ordnet ein Pad einem Netz zu.
pub fn assign_pad_to_net(state: &mut AppState, pad: PadId, net: NetId) {
    use_cases::editing::assign_pad_to_net(state, pad, net);
}

/// Löst ein Pad aus seinem Netz.
pub fn remove_pad_from_net(state: &mut AppState, pad: PadId) {
    use_cases::editing::remove_pad_from_net(state, pad);
}

/// Setzt die Netzfarbe.
pub fn set_net_color(state: &mut AppState, net: NetId, color: [f32; 4]) {
    use_cases::editing::set_net_color(state, net, color);
}
