//! Use-Case: Selektierte Pads, Leiterbahnen und Bauteile löschen.

use crate::AppState;

/// Löscht die komplette Selektion.
///
/// Reihenfolge: Pads (über ihr Netz, samt Leiterbahnen), dann Leiterbahnen,
/// dann Bauteile. Danach sind alle Mengen und Flags leer.
pub fn delete_selected(state: &mut AppState) {
    if state.selection.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    let pads: Vec<_> = state.selection.pads.drain(..).collect();
    let segments: Vec<_> = state.selection.segments.drain(..).collect();
    let parts: Vec<_> = state.selection.parts.drain(..).collect();

    let mut deleted = 0;
    for pad in pads {
        if state.board.delete_pad(pad) {
            deleted += 1;
        }
    }
    // Leiterbahnen können bereits mit ihrem Pad verschwunden sein
    for segment in segments {
        if state.board.remove_segment(segment) {
            deleted += 1;
        }
    }
    for part in parts {
        if state.board.remove_part(part) {
            deleted += 1;
        }
    }

    state.board.clear_selection_flags();
    log::info!("{} Elemente gelöscht", deleted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::selection::select_at;
    use crate::shared::options::{PAD_COLOR, TRACE_COLOR};
    use glam::Vec2;

    #[test]
    fn test_deleting_pad_takes_its_segments_along() {
        let mut state = AppState::new();
        let a = state.board.add_free_pad(Vec2::new(0.0, 0.0), 1.0, 0.5, PAD_COLOR);
        let b = state.board.add_free_pad(Vec2::new(10.0, 0.0), 1.0, 0.5, PAD_COLOR);
        let net = state.board.add_net("N1");
        let segment = state
            .board
            .add_segment(net, a, b, 0.4, TRACE_COLOR)
            .expect("Leiterbahn angelegt");
        select_at(&mut state, Vec2::new(0.0, 0.0), true);
        select_at(&mut state, Vec2::new(5.0, 0.0), true);

        delete_selected(&mut state);

        assert!(state.board.pad(a).is_none());
        assert!(state.board.segment(segment).is_none());
        assert!(state.board.pad(b).is_some());
        assert!(state.selection.is_empty());
        state.board.validate_links().expect("Verweise konsistent");
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let mut state = AppState::new();
        state.board.add_free_pad(Vec2::ZERO, 1.0, 0.5, PAD_COLOR);

        delete_selected(&mut state);

        assert_eq!(state.board.pad_count(), 1);
    }
}
