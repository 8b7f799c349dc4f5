//! Leiterbahn-Segment zwischen zwei Pads.

use super::{NetId, Outline, PadId, SegmentId};
use crate::shared::options::SELECTED_COLOR;
use crate::shared::Painter;
use glam::Vec2;

/// Gerade Kupferbahn zwischen zwei Pads eines Netzes.
///
/// Die Liniengeometrie wird zwischengespeichert und bei jeder Positions-
/// änderung eines Endpunkts über [`Segment::update_geometry`] nachgeführt.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Handle der Leiterbahn
    pub id: SegmentId,
    /// Besitzendes Netz
    pub net: NetId,
    /// Erster Endpunkt
    pub start: PadId,
    /// Zweiter Endpunkt
    pub end: PadId,
    /// Bahnbreite in mm
    pub width: f32,
    /// Bahnfarbe (RGBA)
    pub color: [f32; 4],
    /// Markiert (Selektion oder DRC-Hervorhebung)
    pub selected: bool,
    line: (Vec2, Vec2),
}

impl Segment {
    /// Erstellt eine neue Leiterbahn mit berechneter Liniengeometrie
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: SegmentId,
        net: NetId,
        start: PadId,
        end: PadId,
        width: f32,
        color: [f32; 4],
        start_pos: Vec2,
        end_pos: Vec2,
    ) -> Self {
        Self {
            id,
            net,
            start,
            end,
            width,
            color,
            selected: false,
            line: (start_pos, end_pos),
        }
    }

    /// Aktualisiert die Liniengeometrie auf Basis der Pad-Positionen
    pub fn update_geometry(&mut self, start_pos: Vec2, end_pos: Vec2) {
        self.line = (start_pos, end_pos);
    }

    /// Zwischengespeicherte Linie (start, end)
    pub fn line(&self) -> (Vec2, Vec2) {
        self.line
    }

    /// `true`, wenn `pad` Endpunkt dieser Bahn ist
    pub fn touches(&self, pad: PadId) -> bool {
        self.start == pad || self.end == pad
    }

    /// `true`, wenn die Bahn genau `a` und `b` verbindet (beliebige Reihenfolge)
    pub fn joins(&self, a: PadId, b: PadId) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }

    /// Punkt-Test auf die Bahn mit runden Enden
    pub fn contains(&self, point: Vec2) -> bool {
        self.outline().contains(point)
    }

    /// Unerweiterter Umriss
    pub fn outline(&self) -> Outline {
        self.padded_outline(0.0)
    }

    /// Um `padding` erweiterter Umriss
    pub fn padded_outline(&self, padding: f32) -> Outline {
        Outline::Capsule {
            start: self.line.0,
            end: self.line.1,
            radius: self.width * 0.5 + padding,
        }
    }

    /// Zeichnet die Bahn
    pub fn draw(&self, painter: &mut dyn Painter) {
        painter.stroke_line(self.line.0, self.line.1, self.width, self.color);
    }

    /// Zeichnet die Bahn in Selektionsfarbe
    pub fn draw_selected(&self, painter: &mut dyn Painter) {
        painter.stroke_line(self.line.0, self.line.1, self.width, SELECTED_COLOR);
    }
}
