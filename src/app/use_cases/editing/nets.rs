//! Use-Case: Netz-Verwaltung.

use crate::core::{NetId, PadId};
use crate::AppState;

/// Legt ein neues, leeres Netz an. Leere oder doppelte Namen werden abgelehnt.
pub fn create_net(state: &mut AppState, name: &str) -> Option<NetId> {
    let name = name.trim();
    if name.is_empty() {
        log::warn!("Netzname darf nicht leer sein");
        return None;
    }
    if state.board.net_by_name(name).is_some() {
        log::warn!("Netz {} existiert bereits", name);
        return None;
    }
    let id = state.board.add_net(name);
    log::info!("Netz {} angelegt", name);
    Some(id)
}

/// Ordnet ein Pad einem Netz zu
pub fn assign_pad_to_net(state: &mut AppState, pad: PadId, net: NetId) {
    if !state.board.add_pad_to_net(net, pad) {
        log::warn!("{} konnte nicht in {} aufgenommen werden", pad, net);
        return;
    }
    log::info!("{} in {} aufgenommen", pad, net);
}

/// Löst ein Pad samt Leiterbahnen aus seinem Netz
pub fn remove_pad_from_net(state: &mut AppState, pad: PadId) {
    let selected_segments = state.selection.segments.clone();
    if !state.board.remove_pad_from_net(pad) {
        log::warn!("{} gehört zu keinem Netz", pad);
        return;
    }
    // entfernte Leiterbahnen aus der Selektion nehmen
    state.selection.segments = selected_segments
        .into_iter()
        .filter(|id| state.board.segment(*id).is_some())
        .collect();
    state.selection.pads.retain(|id| state.board.pad(*id).is_some());
    log::info!("{} aus seinem Netz gelöst", pad);
}

/// Färbt alle Leiterbahnen eines Netzes ein
pub fn set_net_color(state: &mut AppState, net: NetId, color: [f32; 4]) {
    if !state.board.set_net_color(net, color) {
        log::warn!("{} nicht gefunden", net);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::PAD_COLOR;
    use glam::Vec2;

    #[test]
    fn test_duplicate_net_name_is_rejected() {
        let mut state = AppState::new();

        assert!(create_net(&mut state, "GND").is_some());
        assert!(create_net(&mut state, " GND ").is_none());
        assert!(create_net(&mut state, "  ").is_none());
        assert_eq!(state.board.net_count(), 1);
    }

    #[test]
    fn test_pad_joins_only_one_net() {
        let mut state = AppState::new();
        let pad = state.board.add_free_pad(Vec2::ZERO, 1.0, 0.5, PAD_COLOR);
        let gnd = create_net(&mut state, "GND").expect("Netz angelegt");
        let vcc = create_net(&mut state, "VCC").expect("Netz angelegt");

        assign_pad_to_net(&mut state, pad, gnd);
        assign_pad_to_net(&mut state, pad, vcc);

        assert_eq!(state.board.pad(pad).expect("Pad").net, Some(gnd));
        assert!(!state.board.net(vcc).expect("Netz").contains_pad(pad));

        remove_pad_from_net(&mut state, pad);
        let detached = state.board.pad(pad).expect("Pad bleibt auf dem Board");
        assert_eq!(detached.net, None);
        assert!(!state.board.net(gnd).expect("Netz").contains_pad(pad));
    }
}
