//! Use-Case: Ziehen der Selektion im Move-Modus.

use crate::core::{GridSnap, PadId};
use crate::AppState;
use std::collections::HashSet;

/// Merkt den Ursprung eines Zieh-Vorgangs
pub fn begin_move(state: &mut AppState, world_pos: glam::Vec2) {
    state.editor.move_origin = Some(world_pos);
}

/// Beendet den Zieh-Vorgang
pub fn end_move(state: &mut AppState) {
    state.editor.move_origin = None;
}

/// Zieht die Selektion um das eingerastete Delta seit dem letzten Schritt.
///
/// Reihenfolge: Pads, dann Leiterbahnen (nur noch nicht verschobene
/// Endpunkte), zuletzt Bauteile. Hängt eine selektierte Leiterbahn an einem
/// Bauteil-Pad, wird der gesamte Schritt verworfen.
pub fn move_selection_to(state: &mut AppState, world_pos: glam::Vec2) {
    let Some(origin) = state.editor.move_origin else {
        return;
    };

    let delta = state.grid.snap_to_grid(world_pos) - state.grid.snap_to_grid(origin);
    if delta == glam::Vec2::ZERO {
        return;
    }
    state.editor.move_origin = Some(origin + delta);

    let board = &state.board;
    let anchored_endpoint = state.selection.segments.iter().find(|id| {
        board.segment(**id).is_some_and(|segment| {
            [segment.start, segment.end]
                .iter()
                .any(|pad| board.pad(*pad).is_some_and(|pad| !pad.is_floating()))
        })
    });
    if let Some(segment) = anchored_endpoint {
        log::warn!(
            "{} hängt an einem Bauteil-Pad, Verschieben abgebrochen",
            segment
        );
        return;
    }

    let mut translated: HashSet<PadId> = HashSet::new();
    for &pad in &state.selection.pads {
        if state.board.translate_pad(pad, delta) {
            translated.insert(pad);
        }
    }

    for &segment in &state.selection.segments {
        let Some((start, end)) = state
            .board
            .segment(segment)
            .map(|segment| (segment.start, segment.end))
        else {
            continue;
        };
        for pad in [start, end] {
            if translated.insert(pad) {
                state.board.translate_pad(pad, delta);
            }
        }
    }

    for &part in &state.selection.parts {
        state.board.translate_part(part, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::selection::select_at;
    use crate::core::Grid;
    use crate::shared::options::{PAD_COLOR, TRACE_COLOR};
    use glam::Vec2;

    fn state_with_trace() -> (AppState, PadId, PadId) {
        let mut state = AppState::new();
        state.grid = Grid::new(1.0);
        let a = state.board.add_free_pad(Vec2::new(0.0, 0.0), 1.0, 0.5, PAD_COLOR);
        let b = state.board.add_free_pad(Vec2::new(10.0, 0.0), 1.0, 0.5, PAD_COLOR);
        let net = state.board.add_net("N1");
        state.board.add_segment(net, a, b, 0.4, TRACE_COLOR);
        (state, a, b)
    }

    #[test]
    fn test_shared_endpoint_moves_once() {
        let (mut state, a, b) = state_with_trace();
        select_at(&mut state, Vec2::new(0.0, 0.0), true);
        select_at(&mut state, Vec2::new(5.0, 0.0), true);

        begin_move(&mut state, Vec2::new(5.0, 0.0));
        move_selection_to(&mut state, Vec2::new(7.2, 1.0));

        assert_eq!(state.board.pad(a).expect("Pad").position, Vec2::new(2.0, 1.0));
        assert_eq!(state.board.pad(b).expect("Pad").position, Vec2::new(12.0, 1.0));
        assert_eq!(state.editor.move_origin, Some(Vec2::new(7.0, 1.0)));
    }

    #[test]
    fn test_segment_alone_moves_both_endpoints() {
        let (mut state, a, b) = state_with_trace();
        select_at(&mut state, Vec2::new(5.0, 0.0), false);

        begin_move(&mut state, Vec2::new(5.0, 0.0));
        move_selection_to(&mut state, Vec2::new(5.0, 3.0));

        assert_eq!(state.board.pad(a).expect("Pad").position, Vec2::new(0.0, 3.0));
        assert_eq!(state.board.pad(b).expect("Pad").position, Vec2::new(10.0, 3.0));
        let segment = &state.board.nets().next().expect("Netz").segments()[0];
        assert_eq!(segment.line(), (Vec2::new(0.0, 3.0), Vec2::new(10.0, 3.0)));
    }

    #[test]
    fn test_sub_grid_motion_does_nothing() {
        let (mut state, a, _) = state_with_trace();
        select_at(&mut state, Vec2::new(0.0, 0.0), false);

        begin_move(&mut state, Vec2::new(0.0, 0.0));
        move_selection_to(&mut state, Vec2::new(0.3, 0.2));

        assert_eq!(state.board.pad(a).expect("Pad").position, Vec2::ZERO);
        assert_eq!(state.editor.move_origin, Some(Vec2::ZERO));
    }
}
