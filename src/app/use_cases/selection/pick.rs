//! Use-Case: Selektion per Klick.

use super::helpers::{clear_pads, clear_parts, clear_segments};
use crate::app::state::CursorMode;
use crate::core::{Board, NetComponent, PadId, PartId, SegmentId};
use crate::AppState;

/// Element, das ein Klick getroffen hat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickHit {
    /// Schwebendes Pad (frei oder Routing-Ecke)
    Pad(PadId),
    /// Leiterbahn
    Segment(SegmentId),
    /// Bauteil
    Part(PartId),
}

/// Trefferprüfung ohne Seiteneffekte.
///
/// Netze zuerst: ein schwebendes Pad oder eine Leiterbahn gewinnt, ein
/// Bauteil-Pad reicht an die Bauteile weiter. Danach freie Pads ohne Netz,
/// zuletzt die Bauteil-Umrisse.
pub fn pick_at(board: &Board, world_pos: glam::Vec2) -> Option<PickHit> {
    for net in board.nets() {
        match net.component_at(board.pads(), world_pos) {
            Some(NetComponent::Pad(id)) => {
                if board.pad(id).is_some_and(|pad| pad.is_floating()) {
                    return Some(PickHit::Pad(id));
                }
                break;
            }
            Some(NetComponent::Segment(id)) => return Some(PickHit::Segment(id)),
            None => {}
        }
    }

    let loose = board
        .pads()
        .values()
        .filter(|pad| pad.net.is_none() && pad.is_floating() && pad.visible)
        .filter(|pad| pad.contains(world_pos))
        .map(|pad| pad.id)
        .min();
    if let Some(id) = loose {
        return Some(PickHit::Pad(id));
    }

    board.part_at(world_pos).map(PickHit::Part)
}

/// Selektiert das Element unter `world_pos`.
///
/// Ohne `additive` wird nur die Menge derselben Art geleert. Im Move-Modus
/// bleibt sie erhalten, wenn das Element bereits selektiert ist. Ein Klick
/// ins Leere hebt die gesamte Selektion auf.
pub fn select_at(state: &mut AppState, world_pos: glam::Vec2, additive: bool) {
    let Some(hit) = pick_at(&state.board, world_pos) else {
        log::debug!("Kein Element bei {:?}, Selektion aufgehoben", world_pos);
        super::clear_selection(state);
        return;
    };

    let keep_for_drag = state.editor.mode == CursorMode::Move;

    match hit {
        PickHit::Pad(id) => {
            let already = state.selection.pads.contains(&id);
            if !additive && !(keep_for_drag && already) {
                clear_pads(state);
            }
            state.selection.pads.shift_remove(&id);
            state.selection.pads.insert(id);
            state.board.set_pad_selected(id, true);
        }
        PickHit::Segment(id) => {
            let already = state.selection.segments.contains(&id);
            if !additive && !(keep_for_drag && already) {
                clear_segments(state);
            }
            state.selection.segments.shift_remove(&id);
            state.selection.segments.insert(id);
            state.board.set_segment_selected(id, true);
        }
        PickHit::Part(id) => {
            let already = state.selection.parts.contains(&id);
            if !additive && !(keep_for_drag && already) {
                clear_parts(state);
            }
            state.selection.parts.shift_remove(&id);
            state.selection.parts.insert(id);
            state.board.set_part_selected(id, true);
        }
    }
}
