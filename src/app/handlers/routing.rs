//! Handler für Zeigermodus und Routing.

use crate::app::state::CursorMode;
use crate::app::use_cases;
use crate::app::AppState;

/// Wechselt den Zeigermodus (bricht eine laufende Route ab).
pub fn set_cursor_mode(state: &mut AppState, mode: CursorMode) {
    use_cases::routing::set_cursor_mode(state, mode);
}

/// Routing-Klick.
pub fn press(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::routing::route_press(state, world_pos);
}

/// Routing-Kopf nachführen.
pub fn move_head(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::routing::move_route_head(state, world_pos);
}

/// Laufende Route verwerfen.
pub fn cancel(state: &mut AppState) {
    use_cases::routing::cancel_route(state);
}
