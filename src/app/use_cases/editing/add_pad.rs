//! Use-Case: Freies Pad anlegen.

use crate::core::{GridSnap, PadId};
use crate::AppState;

/// Legt ein sichtbares, schwebendes Pad am eingerasteten Punkt an.
/// Ring, Bohrung und Farbe kommen aus den Optionen.
pub fn add_free_pad(state: &mut AppState, world_pos: glam::Vec2) -> PadId {
    let position = state.grid.snap_to_grid(world_pos);
    let id = state.board.add_free_pad(
        position,
        state.options.ring_diameter,
        state.options.hole_diameter,
        state.options.pad_color,
    );
    log::info!("{} bei {:?} angelegt", id, position);
    id
}
