//! Use-Case: Interaktives Routen von Leiterbahnen.
//!
//! Der Routing-Kopf ist ein unsichtbares virtuelles Pad `current`, das über
//! eine provisorische Leiterbahn mit dem letzten festen Pad `previous`
//! verbunden ist und dem Zeiger folgt.

use crate::app::state::{CursorMode, RouteHead};
use crate::core::{GridSnap, NetComponent, NetId, PadId};
use crate::AppState;

/// Setzt den Zeigermodus. Eine laufende Route wird verworfen, eine laufende
/// Platzierung an der aktuellen Stelle abgelegt.
pub fn set_cursor_mode(state: &mut AppState, mode: CursorMode) {
    if state.editor.is_routing() {
        cancel_route(state);
    }
    if let Some(part) = state.editor.placing_part.take() {
        log::debug!("{} beim Moduswechsel abgelegt", part);
    }
    state.editor.move_origin = None;
    state.editor.mode = mode;
    log::debug!("Zeigermodus: {:?}", mode);
}

/// Klick im Route-Modus.
///
/// Ohne laufende Route wird am getroffenen Netz-Pad begonnen. Mit laufender
/// Route wird an einem anderen Pad des Netzes abgeschlossen, sonst eine Ecke
/// am eingerasteten Punkt gesetzt.
pub fn route_press(state: &mut AppState, world_pos: glam::Vec2) {
    match state.editor.head {
        RouteHead::Detached => start_route(state, world_pos),
        RouteHead::Attached {
            current,
            previous,
            net,
        } => continue_route(state, world_pos, current, previous, net),
    }
}

/// Zieht den Routing-Kopf auf die eingerastete Zeigerposition
pub fn move_route_head(state: &mut AppState, world_pos: glam::Vec2) {
    let RouteHead::Attached { current, .. } = state.editor.head else {
        return;
    };
    let snapped = state.grid.snap_to_grid(world_pos);
    state.board.set_pad_position(current, snapped);
}

/// Verwirft die provisorische Leiterbahn und löst den Routing-Kopf
pub fn cancel_route(state: &mut AppState) {
    let RouteHead::Attached {
        current,
        previous,
        net,
    } = state.editor.head
    else {
        log::debug!("Keine Route zum Abbrechen");
        return;
    };

    state.board.remove_segment_between(net, previous, current);
    state.board.set_net_selected(net, false);
    state.editor.head = RouteHead::Detached;
    log::info!("Route abgebrochen");
}

fn start_route(state: &mut AppState, world_pos: glam::Vec2) {
    let Some((net, previous)) = state.board.net_pad_at(world_pos) else {
        log::debug!("Kein Netz-Pad bei {:?}, keine Route begonnen", world_pos);
        return;
    };

    super::selection::clear_selection(state);

    let Some(current) = state.board.clone_as_virtual(previous) else {
        return;
    };
    state
        .board
        .set_pad_geometry(current, state.options.trace_width, 0.0);

    if !attach_provisional(state, net, previous, current) {
        state.board.delete_pad(current);
        log::warn!("Route an {} konnte nicht begonnen werden", previous);
        return;
    }

    state.board.set_net_selected(net, true);
    let name = state.board.net(net).map(|n| n.name.clone()).unwrap_or_default();
    log::info!("Route in Netz {} begonnen", name);
}

fn continue_route(
    state: &mut AppState,
    world_pos: glam::Vec2,
    current: PadId,
    previous: PadId,
    net: NetId,
) {
    let snapped = state.grid.snap_to_grid(world_pos);

    // provisorische Bahn weg, `current` verlässt damit die Arena
    state.board.remove_segment_between(net, previous, current);

    // Treffer am echten Klickpunkt, eingerastet wird nur die neue Ecke
    let hit = state
        .board
        .net(net)
        .and_then(|n| n.component_at(state.board.pads(), world_pos));

    match hit {
        Some(NetComponent::Pad(target)) if target != previous => {
            let width = state.options.trace_width;
            let color = state.options.trace_color;
            if state
                .board
                .add_segment(net, previous, target, width, color)
                .is_none()
            {
                log::warn!("{} und {} sind bereits verbunden", previous, target);
            }
            state.board.set_net_selected(net, false);
            state.editor.head = RouteHead::Detached;
            log::info!("Route an {} abgeschlossen", target);
        }
        Some(NetComponent::Pad(_)) => {
            let head = spawn_head(state, snapped);
            if !attach_provisional(state, net, previous, head) {
                state.board.delete_pad(head);
                state.board.set_net_selected(net, false);
                state.editor.head = RouteHead::Detached;
            }
        }
        _ => commit_corner(state, snapped, previous, net),
    }
}

fn commit_corner(state: &mut AppState, snapped: glam::Vec2, previous: PadId, net: NetId) {
    let width = state.options.trace_width;
    let color = state.options.trace_color;

    let corner = state.board.spawn_virtual_pad(snapped, width, color);
    if state
        .board
        .add_segment(net, previous, corner, width, color)
        .is_none()
    {
        state.board.delete_pad(corner);
        state.board.set_net_selected(net, false);
        state.editor.head = RouteHead::Detached;
        log::warn!("Ecke bei {:?} konnte nicht gesetzt werden", snapped);
        return;
    }

    let head = spawn_head(state, snapped);
    if !attach_provisional(state, net, corner, head) {
        state.board.delete_pad(head);
        state.board.set_net_selected(net, false);
        state.editor.head = RouteHead::Detached;
        return;
    }
    log::debug!("Ecke {} bei {:?} gesetzt", corner, snapped);
}

fn spawn_head(state: &mut AppState, position: glam::Vec2) -> PadId {
    let width = state.options.trace_width;
    let color = state.options.trace_color;
    state.board.spawn_virtual_pad(position, width, color)
}

/// Verbindet `previous` provisorisch mit dem Kopf und hängt ihn an
fn attach_provisional(state: &mut AppState, net: NetId, previous: PadId, current: PadId) -> bool {
    let width = state.options.trace_width;
    let color = state.options.trace_color;
    if state
        .board
        .add_segment(net, previous, current, width, color)
        .is_none()
    {
        return false;
    }
    state.editor.head = RouteHead::Attached {
        current,
        previous,
        net,
    };
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;
    use crate::shared::options::PAD_COLOR;
    use glam::Vec2;

    fn gnd_state() -> (AppState, NetId, PadId, PadId) {
        let mut state = AppState::new();
        state.grid = Grid::new(1.0);
        state.editor.mode = CursorMode::Route;
        let a = state.board.add_free_pad(Vec2::new(10.0, 10.0), 1.5, 0.8, PAD_COLOR);
        let b = state.board.add_free_pad(Vec2::new(50.0, 10.0), 1.5, 0.8, PAD_COLOR);
        let gnd = state.board.add_net("GND");
        state.board.add_pad_to_net(gnd, a);
        state.board.add_pad_to_net(gnd, b);
        (state, gnd, a, b)
    }

    #[test]
    fn test_first_press_attaches_invisible_head() {
        let (mut state, gnd, a, _) = gnd_state();

        route_press(&mut state, Vec2::new(10.2, 9.9));

        let RouteHead::Attached {
            current,
            previous,
            net,
        } = state.editor.head
        else {
            panic!("Route sollte begonnen sein");
        };
        assert_eq!((previous, net), (a, gnd));
        let head = state.board.pad(current).expect("Kopf in der Arena");
        assert!(!head.visible);
        assert!(head.is_floating());
        assert_eq!(head.hole_diameter, 0.0);
        assert_eq!(head.ring_diameter, state.options.trace_width);
        assert!(state.board.net(gnd).expect("Netz").is_selected());
    }

    #[test]
    fn test_press_on_empty_space_does_not_start() {
        let (mut state, _, _, _) = gnd_state();

        route_press(&mut state, Vec2::new(30.0, 30.0));

        assert_eq!(state.editor.head, RouteHead::Detached);
        assert_eq!(state.board.segment_count(), 0);
    }

    #[test]
    fn test_head_follows_snapped_pointer() {
        let (mut state, gnd, _, _) = gnd_state();
        route_press(&mut state, Vec2::new(10.0, 10.0));

        move_route_head(&mut state, Vec2::new(20.4, 12.6));

        let segment = &state.board.net(gnd).expect("Netz").segments()[0];
        assert_eq!(segment.line().1, Vec2::new(20.0, 13.0));
    }

    #[test]
    fn test_press_on_previous_keeps_route_open() {
        let (mut state, gnd, a, _) = gnd_state();
        route_press(&mut state, Vec2::new(10.0, 10.0));

        route_press(&mut state, Vec2::new(10.0, 10.0));

        assert!(state.editor.is_routing());
        assert_eq!(state.board.net(gnd).expect("Netz").segment_count(), 1);
        let RouteHead::Attached { previous, .. } = state.editor.head else {
            panic!("Route sollte offen bleiben");
        };
        assert_eq!(previous, a);
    }

    #[test]
    fn test_cancel_removes_head_and_provisional_segment() {
        let (mut state, gnd, _, _) = gnd_state();
        route_press(&mut state, Vec2::new(10.0, 10.0));

        cancel_route(&mut state);

        assert_eq!(state.editor.head, RouteHead::Detached);
        assert_eq!(state.board.pad_count(), 2);
        assert_eq!(state.board.net(gnd).expect("Netz").segment_count(), 0);
        assert!(!state.board.net(gnd).expect("Netz").is_selected());
    }

    #[test]
    fn test_mode_change_aborts_route() {
        let (mut state, _, _, _) = gnd_state();
        route_press(&mut state, Vec2::new(10.0, 10.0));

        set_cursor_mode(&mut state, CursorMode::Normal);

        assert_eq!(state.editor.mode, CursorMode::Normal);
        assert_eq!(state.editor.head, RouteHead::Detached);
        assert_eq!(state.board.pad_count(), 2);
    }
}
