//! Use-Case: Bauteil aus dem Katalog platzieren.
//!
//! Das neue Bauteil folgt dem eingerasteten Zeiger, bis der nächste Klick
//! es ablegt. Escape entfernt es wieder.

use crate::app::state::CursorMode;
use crate::core::{find_template, GridSnap};
use crate::AppState;

/// Legt das Bauteil an der letzten Zeigerposition an und hängt es an den Zeiger
pub fn begin_part_placement(state: &mut AppState, template: &str) {
    if state.editor.mode != CursorMode::Normal {
        log::debug!("Platzierung nur im Normal-Modus");
        return;
    }
    if state.editor.placing_part.is_some() {
        log::debug!("Es wird bereits ein Bauteil platziert");
        return;
    }
    let Some(template) = find_template(template) else {
        log::warn!("Unbekannte Bauteil-Vorlage: {}", template);
        return;
    };

    let center = state.view.cursor_world_pos.unwrap_or(glam::Vec2::ZERO);
    let part = state
        .board
        .place_part(&template, center, state.options.pad_color);
    state.editor.placing_part = Some(part);
    log::info!("{} ({}) wird platziert", part, template.identity);
}

/// Führt das zu platzierende Bauteil dem Zeiger nach
pub fn move_placed_part(state: &mut AppState, world_pos: glam::Vec2) {
    let Some(part) = state.editor.placing_part else {
        return;
    };
    let snapped = state.grid.snap_to_grid(world_pos);
    state.board.set_part_position(part, snapped);
}

/// Legt das Bauteil an seiner aktuellen Position ab
pub fn drop_placed_part(state: &mut AppState) {
    if let Some(part) = state.editor.placing_part.take() {
        log::info!("{} abgelegt", part);
    }
}

/// Bricht die Platzierung ab und entfernt das Bauteil
pub fn cancel_part_placement(state: &mut AppState) {
    if let Some(part) = state.editor.placing_part.take() {
        state.board.remove_part(part);
        log::info!("Platzierung von {} abgebrochen", part);
    }
}
