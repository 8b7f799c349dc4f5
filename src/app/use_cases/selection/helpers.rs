//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::AppState;

/// Löscht die aktuelle Selektion explizit (Mengen und Flags).
pub fn clear_selection(state: &mut AppState) {
    clear_pads(state);
    clear_segments(state);
    clear_parts(state);
}

pub(super) fn clear_pads(state: &mut AppState) {
    for id in state.selection.pads.drain(..) {
        state.board.set_pad_selected(id, false);
    }
}

pub(super) fn clear_segments(state: &mut AppState) {
    for id in state.selection.segments.drain(..) {
        state.board.set_segment_selected(id, false);
    }
}

pub(super) fn clear_parts(state: &mut AppState) {
    for id in state.selection.parts.drain(..) {
        state.board.set_part_selected(id, false);
    }
}
