//! Use-Case: Standardwerte und Werte der aktuellen Selektion.

use crate::core::Grid;
use crate::shared::EditorOptions;
use crate::AppState;

/// Setzt Standardwerte für neue Bahnen und Pads sowie den DRC-Abstand.
/// Nicht-positive Werte werden ignoriert, der Abstand darf 0 sein.
pub fn set_default_settings(
    state: &mut AppState,
    trace_width: f32,
    ring_diameter: f32,
    hole_diameter: f32,
    component_spacing: f32,
) {
    let options = &mut state.options;
    if trace_width > 0.0 {
        options.trace_width = trace_width;
    }
    if ring_diameter > 0.0 {
        options.ring_diameter = ring_diameter;
    }
    if hole_diameter > 0.0 {
        options.hole_diameter = hole_diameter;
    }
    if component_spacing >= 0.0 {
        options.component_spacing = component_spacing;
    }
    log::info!(
        "Standardwerte: Bahn {} mm, Ring {} mm, Bohrung {} mm, Abstand {} mm",
        options.trace_width,
        options.ring_diameter,
        options.hole_diameter,
        options.component_spacing
    );
}

/// Überträgt Ring/Bohrung auf selektierte Pads (nur wenn beide > 0) und die
/// Bahnbreite auf selektierte Leiterbahnen (wenn > 0).
pub fn apply_settings_to_selection(
    state: &mut AppState,
    ring_diameter: f32,
    hole_diameter: f32,
    trace_width: f32,
) {
    let mut changed = 0;
    if ring_diameter > 0.0 && hole_diameter > 0.0 {
        for &pad in &state.selection.pads {
            if state.board.set_pad_geometry(pad, ring_diameter, hole_diameter) {
                changed += 1;
            }
        }
    }
    if trace_width > 0.0 {
        for &segment in &state.selection.segments {
            if state.board.set_segment_width(segment, trace_width) {
                changed += 1;
            }
        }
    }
    log::info!("Werte auf {} selektierte Elemente angewendet", changed);
}

/// Übernimmt neue Optionen und baut das Raster neu.
/// Ein negativer DRC-Abstand wird auf 0 begrenzt.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let options = options.sanitized();
    state.grid = Grid::new(options.grid_spacing);
    state.options = options;
}
