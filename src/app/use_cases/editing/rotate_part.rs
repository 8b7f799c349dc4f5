//! Use-Case: Bauteil um 90° drehen.

use crate::core::PartId;
use crate::AppState;

/// Dreht ein Bauteil um seinen Mittelpunkt (angeschlossene Bahnen folgen)
pub fn rotate_part(state: &mut AppState, part: PartId, clockwise: bool) {
    if !state.board.rotate_part(part, clockwise) {
        log::warn!("{} nicht gefunden, keine Drehung", part);
        return;
    }
    log::info!(
        "{} um 90° {} gedreht",
        part,
        if clockwise { "im Uhrzeigersinn" } else { "gegen den Uhrzeigersinn" }
    );
}
