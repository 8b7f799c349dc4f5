use glam::Vec2;
use pcb_layout_editor::core::{find_template, find_violations, run_design_rule_check};
use pcb_layout_editor::{AppController, AppIntent, AppState, Board, DrcEntity};
use pcb_layout_editor::{Violation, ViolationKind, ViolationReporter};

const GRAY: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
const GREEN: [f32; 4] = [0.0, 0.8, 0.0, 1.0];

/// Merkt pro Meldung, ob beide Elemente gerade markiert sind
#[derive(Default)]
struct MarkRecorder {
    marked: Vec<(bool, bool)>,
}

fn is_marked(board: &Board, entity: DrcEntity) -> bool {
    match entity {
        DrcEntity::Part(id) => board.part(id).is_some_and(|part| part.selected),
        DrcEntity::Pad(id) => board.pad(id).is_some_and(|pad| pad.selected),
        DrcEntity::Segment(id) => board.segment(id).is_some_and(|segment| segment.selected),
    }
}

impl ViolationReporter for MarkRecorder {
    fn on_violation(&mut self, board: &Board, violation: &Violation) {
        self.marked.push((
            is_marked(board, violation.first),
            is_marked(board, violation.second),
        ));
    }
}

/// Zwei R-12.7 (2.5 mm breit) mit 2.5 mm Luft zwischen den Umrissen
fn two_resistors() -> AppState {
    let mut state = AppState::new();
    let template = find_template("R-12.7").expect("Vorlage vorhanden");
    state.board.place_part(&template, Vec2::new(0.0, 0.0), GRAY);
    state.board.place_part(&template, Vec2::new(5.0, 0.0), GRAY);
    state
}

fn run_with_spacing(state: &mut AppState, component_spacing: f32) {
    let mut controller = AppController::new();
    controller
        .handle_intent(
            state,
            AppIntent::DefaultSettingsChanged {
                trace_width: 0.0,
                ring_diameter: 0.0,
                hole_diameter: 0.0,
                component_spacing,
            },
        )
        .expect("Einstellungen sollten übernommen werden");
    controller
        .handle_intent(state, AppIntent::DesignRuleCheckRequested)
        .expect("DRC sollte ohne Fehler durchlaufen");
}

#[test]
fn test_padded_parts_report_exactly_one_violation() {
    let mut state = two_resistors();

    run_with_spacing(&mut state, 5.0);

    let report = state.last_drc.as_ref().expect("DRC-Ergebnis vorhanden");
    assert_eq!(report.clearance, 5.0);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.count_of(ViolationKind::PartPart), 1);
    // Markierung ist nach dem Lauf zurückgesetzt
    assert!(state.board.parts().all(|part| !part.selected));
}

#[test]
fn test_same_geometry_without_clearance_is_clean() {
    let mut state = two_resistors();

    run_with_spacing(&mut state, 0.0);

    let report = state.last_drc.as_ref().expect("DRC-Ergebnis vorhanden");
    assert_eq!(report.clearance, 0.0);
    assert!(report.is_clean());
}

#[test]
fn test_members_of_one_net_never_collide() {
    let mut board = Board::new();
    let a = board.add_free_pad(Vec2::new(0.0, 0.0), 1.5, 0.8, GRAY);
    let b = board.add_free_pad(Vec2::new(0.5, 0.0), 1.5, 0.8, GRAY);
    let c = board.add_free_pad(Vec2::new(0.5, 0.5), 1.5, 0.8, GRAY);
    let gnd = board.add_net("GND");
    board.add_segment(gnd, a, b, 0.4, GREEN);
    board.add_segment(gnd, b, c, 0.4, GREEN);
    board.add_segment(gnd, c, a, 0.4, GREEN);

    assert!(find_violations(&board, 1.0).is_empty());
}

#[test]
fn test_only_earlier_net_is_padded_against_later_ones() {
    let mut board = Board::new();
    let a = board.add_free_pad(Vec2::new(0.0, 0.0), 1.0, 0.5, GRAY);
    let b = board.add_free_pad(Vec2::new(10.0, 0.0), 1.0, 0.5, GRAY);
    let c = board.add_free_pad(Vec2::new(3.0, 0.65), 1.0, 0.5, GRAY);
    let d = board.add_free_pad(Vec2::new(7.0, 0.65), 1.0, 0.5, GRAY);
    let gnd = board.add_net("GND");
    let vcc = board.add_net("VCC");
    board.add_segment(gnd, a, b, 0.2, GREEN);
    board.add_segment(vcc, c, d, 0.2, GREEN);

    let violations = find_violations(&board, 1.0);

    // die GND-Bahn trifft die VCC-Bahn und beide VCC-Pads, die GND-Pads sind zu weit weg
    let count = |kind: ViolationKind| violations.iter().filter(|v| v.kind == kind).count();
    assert_eq!(violations.len(), 3);
    assert_eq!(count(ViolationKind::SegmentSegment), 1);
    assert_eq!(count(ViolationKind::SegmentPad), 2);
    assert_eq!(count(ViolationKind::PadPad), 0);
    assert_eq!(count(ViolationKind::PadSegment), 0);

    assert!(find_violations(&board, 0.0).is_empty());
}

#[test]
fn test_pads_of_foreign_nets_too_close() {
    let mut board = Board::new();
    let p = board.add_free_pad(Vec2::new(0.0, 0.0), 1.0, 0.5, GRAY);
    let q = board.add_free_pad(Vec2::new(1.5, 0.0), 1.0, 0.5, GRAY);
    let gnd = board.add_net("GND");
    let vcc = board.add_net("VCC");
    board.add_pad_to_net(gnd, p);
    board.add_pad_to_net(vcc, q);
    board.set_pad_selected(q, true);
    let mut recorder = MarkRecorder::default();

    let report = run_design_rule_check(&mut board, 1.0, &mut recorder);

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.count_of(ViolationKind::PadPad), 1);
    assert_eq!(report.violations[0].first, DrcEntity::Pad(p));
    assert_eq!(report.violations[0].second, DrcEntity::Pad(q));
    assert_eq!(recorder.marked, vec![(true, true)]);
    // vorheriger Markierungszustand ist wiederhergestellt
    assert!(!board.pad(p).expect("p").selected);
    assert!(board.pad(q).expect("q").selected);

    assert!(find_violations(&board, 0.0).is_empty());
}

#[test]
fn test_pad_too_close_to_foreign_segment() {
    let mut board = Board::new();
    let p = board.add_free_pad(Vec2::new(0.0, 0.0), 1.0, 0.5, GRAY);
    let c = board.add_free_pad(Vec2::new(-5.0, 1.0), 1.0, 0.5, GRAY);
    let d = board.add_free_pad(Vec2::new(5.0, 1.0), 1.0, 0.5, GRAY);
    let gnd = board.add_net("GND");
    let vcc = board.add_net("VCC");
    board.add_pad_to_net(gnd, p);
    let segment = board
        .add_segment(vcc, c, d, 0.2, GREEN)
        .expect("Leiterbahn angelegt");
    let mut recorder = MarkRecorder::default();

    let report = run_design_rule_check(&mut board, 1.0, &mut recorder);

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.count_of(ViolationKind::PadSegment), 1);
    assert_eq!(report.violations[0].first, DrcEntity::Pad(p));
    assert_eq!(report.violations[0].second, DrcEntity::Segment(segment));
    assert_eq!(recorder.marked, vec![(true, true)]);
    assert!(!board.pad(p).expect("p").selected);
    assert!(!board.segment(segment).expect("Leiterbahn").selected);

    assert!(find_violations(&board, 0.0).is_empty());
}
