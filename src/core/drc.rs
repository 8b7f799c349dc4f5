//! Design-Rule-Check: paarweiser Abstandstest über Bauteile, Pads und Leiterbahnen.
//!
//! Jedes Paar wird genau einmal geprüft. Das erste Element wird um den
//! Mindestabstand erweitert, das zweite bleibt unerweitert. Pads und
//! Leiterbahnen desselben Netzes werden nie gegeneinander geprüft,
//! unsichtbare Pads gar nicht. Laufzeit O(n²).

use super::{Board, Net, Pad, PadId, PartId, SegmentId};

/// Am Verstoß beteiligtes Element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrcEntity {
    /// Bauteil
    Part(PartId),
    /// Sichtbares Pad
    Pad(PadId),
    /// Leiterbahn
    Segment(SegmentId),
}

/// Art der Paarung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Bauteil × Bauteil
    PartPart,
    /// Leiterbahn × Pad eines anderen Netzes
    SegmentPad,
    /// Leiterbahn × Leiterbahn eines anderen Netzes
    SegmentSegment,
    /// Pad × Pad eines anderen Netzes
    PadPad,
    /// Pad × Leiterbahn eines anderen Netzes
    PadSegment,
}

/// Einzelner Abstandsverstoß
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Art der Paarung
    pub kind: ViolationKind,
    /// Erweitert geprüftes Element
    pub first: DrcEntity,
    /// Unerweitert geprüftes Element
    pub second: DrcEntity,
}

impl Violation {
    /// Lesbare Meldung mit beiden Elementnamen
    pub fn describe(&self, board: &Board) -> String {
        format!(
            "Design rule violation: {} and {} are too close together",
            entity_label(board, self.first),
            entity_label(board, self.second)
        )
    }
}

/// Ergebnis eines DRC-Laufs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrcReport {
    /// Verwendeter Mindestabstand
    pub clearance: f32,
    /// Gefundene Verstöße in Prüfreihenfolge
    pub violations: Vec<Violation>,
}

impl DrcReport {
    /// `true`, wenn kein Verstoß gefunden wurde
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Anzahl der Verstöße einer Art
    pub fn count_of(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }
}

/// Empfänger der DRC-Meldungen (blockierend, einer nach dem anderen)
pub trait ViolationReporter {
    /// Wird pro Verstoß aufgerufen, während beide Elemente markiert sind
    fn on_violation(&mut self, board: &Board, violation: &Violation);

    /// Wird einmal aufgerufen, wenn der gesamte Lauf keinen Verstoß fand
    fn on_clean(&mut self) {}
}

/// Reporter, der Meldungen ins Log schreibt
#[derive(Debug, Default)]
pub struct LogReporter;

impl ViolationReporter for LogReporter {
    fn on_violation(&mut self, board: &Board, violation: &Violation) {
        log::warn!("{}", violation.describe(board));
    }

    fn on_clean(&mut self) {
        log::info!("DRC: keine Verstöße gefunden");
    }
}

/// Führt den DRC aus und meldet jeden Verstoß an `reporter`.
///
/// Während der Meldung sind beide Elemente markiert, danach wird der
/// vorherige Markierungszustand wiederhergestellt.
pub fn run_design_rule_check(
    board: &mut Board,
    clearance: f32,
    reporter: &mut dyn ViolationReporter,
) -> DrcReport {
    let violations = find_violations(board, clearance);

    for violation in &violations {
        let previous = [
            is_marked(board, violation.first),
            is_marked(board, violation.second),
        ];
        mark(board, violation.first, true);
        mark(board, violation.second, true);

        reporter.on_violation(board, violation);

        mark(board, violation.first, previous[0]);
        mark(board, violation.second, previous[1]);
    }

    if violations.is_empty() {
        reporter.on_clean();
    }
    log::info!(
        "DRC mit Abstand {} abgeschlossen: {} Verstoß/Verstöße",
        clearance,
        violations.len()
    );

    DrcReport {
        clearance,
        violations,
    }
}

/// Sammelt alle Verstöße ohne Seiteneffekte
pub fn find_violations(board: &Board, clearance: f32) -> Vec<Violation> {
    let mut violations = Vec::new();

    let parts: Vec<_> = board.parts().collect();
    for (index, part) in parts.iter().enumerate() {
        let padded = part.padded_outline(clearance);
        for other in &parts[index + 1..] {
            if padded.overlaps(&other.outline()) {
                violations.push(Violation {
                    kind: ViolationKind::PartPart,
                    first: DrcEntity::Part(part.id),
                    second: DrcEntity::Part(other.id),
                });
            }
        }
    }

    let nets: Vec<&Net> = board.nets().collect();
    for (index, net) in nets.iter().enumerate() {
        let remaining = &nets[index + 1..];
        check_segments(board, net, remaining, clearance, &mut violations);
        check_pads(board, net, remaining, clearance, &mut violations);
    }

    violations
}

fn check_segments(
    board: &Board,
    net: &Net,
    remaining: &[&Net],
    clearance: f32,
    violations: &mut Vec<Violation>,
) {
    for segment in net.segments() {
        let padded = segment.padded_outline(clearance);
        for other in remaining {
            for pad in other.visible_pads(board.pads()) {
                if padded.overlaps(&pad.outline()) {
                    violations.push(Violation {
                        kind: ViolationKind::SegmentPad,
                        first: DrcEntity::Segment(segment.id),
                        second: DrcEntity::Pad(pad.id),
                    });
                }
            }
            for other_segment in other.segments() {
                if padded.overlaps(&other_segment.outline()) {
                    violations.push(Violation {
                        kind: ViolationKind::SegmentSegment,
                        first: DrcEntity::Segment(segment.id),
                        second: DrcEntity::Segment(other_segment.id),
                    });
                }
            }
        }
    }
}

fn check_pads(
    board: &Board,
    net: &Net,
    remaining: &[&Net],
    clearance: f32,
    violations: &mut Vec<Violation>,
) {
    let own_pads: Vec<&Pad> = net.visible_pads(board.pads()).collect();
    for pad in own_pads {
        let padded = pad.padded_outline(clearance);
        for other in remaining {
            for other_pad in other.visible_pads(board.pads()) {
                if padded.overlaps(&other_pad.outline()) {
                    violations.push(Violation {
                        kind: ViolationKind::PadPad,
                        first: DrcEntity::Pad(pad.id),
                        second: DrcEntity::Pad(other_pad.id),
                    });
                }
            }
            for segment in other.segments() {
                if padded.overlaps(&segment.outline()) {
                    violations.push(Violation {
                        kind: ViolationKind::PadSegment,
                        first: DrcEntity::Pad(pad.id),
                        second: DrcEntity::Segment(segment.id),
                    });
                }
            }
        }
    }
}

fn is_marked(board: &Board, entity: DrcEntity) -> bool {
    match entity {
        DrcEntity::Part(id) => board.part(id).is_some_and(|part| part.selected),
        DrcEntity::Pad(id) => board.pad(id).is_some_and(|pad| pad.selected),
        DrcEntity::Segment(id) => board.segment(id).is_some_and(|segment| segment.selected),
    }
}

fn mark(board: &mut Board, entity: DrcEntity, selected: bool) {
    match entity {
        DrcEntity::Part(id) => board.set_part_selected(id, selected),
        DrcEntity::Pad(id) => board.set_pad_selected(id, selected),
        DrcEntity::Segment(id) => board.set_segment_selected(id, selected),
    };
}

fn entity_label(board: &Board, entity: DrcEntity) -> String {
    match entity {
        DrcEntity::Part(id) => board
            .part(id)
            .map_or_else(|| id.to_string(), |part| format!("Part \"{}\"", part.name)),
        DrcEntity::Pad(id) => match board.pad(id) {
            Some(pad) => match pad.part().and_then(|part| board.part(part)) {
                Some(part) => format!("Pad {} of \"{}\"", pad.name, part.name),
                None => format!("Pad {}", id),
            },
            None => id.to_string(),
        },
        DrcEntity::Segment(id) => match board.segment(id).and_then(|s| board.net(s.net)) {
            Some(net) => format!("Segment {} of net \"{}\"", id.0, net.name),
            None => id.to_string(),
        },
    }
}
