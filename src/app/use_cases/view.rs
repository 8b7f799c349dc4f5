//! Use-Case: Koordinatenanzeige.

use crate::core::GridSnap;
use crate::AppState;

/// Merkt die eingerastete Zeigerposition für die Statusanzeige
pub fn update_cursor_position(state: &mut AppState, world_pos: glam::Vec2) {
    let snapped = state.grid.snap_to_grid(world_pos);
    state.view.cursor_world_pos = Some(snapped);
    state.view.cursor_grid_pos = Some(state.grid.to_grid_coords(snapped));
}
