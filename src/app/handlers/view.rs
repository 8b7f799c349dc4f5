//! Handler für Zeigerposition und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Merkt die eingerastete Zeigerposition.
pub fn update_cursor_position(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::view::update_cursor_position(state, world_pos);
}

/// Übernimmt geänderte Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    use_cases::editing::apply_options(state, options);
    log::info!("Optionen übernommen");
}
