//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert das Element unter dem Klickpunkt.
pub fn select_at(state: &mut AppState, world_pos: glam::Vec2, additive: bool) {
    use_cases::selection::select_at(state, world_pos, additive);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Beginnt einen Zieh-Vorgang.
pub fn begin_move(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::selection::begin_move(state, world_pos);
}

/// Zieht die Selektion zur neuen Zeigerposition.
pub fn move_to(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::selection::move_selection_to(state, world_pos);
}

/// Beendet den Zieh-Vorgang.
pub fn end_move(state: &mut AppState) {
    use_cases::selection::end_move(state);
}
