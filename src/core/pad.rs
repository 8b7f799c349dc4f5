//! Durchkontaktierte Pads: Vertices der Netz-Graphen.

use super::{NetId, Outline, PadId, PartId, SegmentId};
use crate::shared::options::{HOLE_COLOR, SELECTED_COLOR};
use crate::shared::Painter;
use glam::Vec2;
use std::collections::HashMap;

/// Arena aller Pads eines Boards, indexiert nach Handle
pub type PadArena = HashMap<PadId, Pad>;

/// Zugehörigkeit eines Pads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadAnchor {
    /// Fester Bestandteil des Footprints eines Bauteils
    Anchored(PartId),
    /// Ohne Bauteil (virtuelles Pad, z.B. Routing-Kopf oder Leiterbahn-Knick)
    Floating,
}

/// Ein Pad mit Kupferring und Bohrung.
///
/// Identität ist das Handle: zwei Pads an derselben Position bleiben verschieden.
#[derive(Debug, Clone)]
pub struct Pad {
    /// Handle in der Pad-Arena
    pub id: PadId,
    /// Anzeigename
    pub name: String,
    /// Mittelpunkt in Welteinheiten (mm)
    pub position: Vec2,
    /// Außendurchmesser des Kupferrings
    pub ring_diameter: f32,
    /// Bohrungsdurchmesser
    pub hole_diameter: f32,
    /// Ringfarbe (RGBA)
    pub color: [f32; 4],
    /// Unsichtbare Pads werden weder gezeichnet noch im DRC geprüft
    pub visible: bool,
    /// Markiert (Selektion oder DRC-Hervorhebung)
    pub selected: bool,
    /// Bauteil-Zugehörigkeit
    pub anchor: PadAnchor,
    /// Netz, dem das Pad angehört
    pub net: Option<NetId>,
    observers: Vec<SegmentId>,
}

impl Pad {
    /// Erstellt ein sichtbares, netzloses Pad
    pub fn new(
        id: PadId,
        position: Vec2,
        ring_diameter: f32,
        hole_diameter: f32,
        color: [f32; 4],
        anchor: PadAnchor,
    ) -> Self {
        Self {
            id,
            name: String::new(),
            position,
            ring_diameter,
            hole_diameter,
            color,
            visible: true,
            selected: false,
            anchor,
            net: None,
            observers: Vec::new(),
        }
    }

    /// Erstellt ein unsichtbares virtuelles Pad (Routing-Kopf/Knickpunkt)
    pub fn virtual_at(id: PadId, position: Vec2, diameter: f32, color: [f32; 4]) -> Self {
        let mut pad = Self::new(id, position, diameter, 0.0, color, PadAnchor::Floating);
        pad.visible = false;
        pad
    }

    /// Kopie unter neuem Handle: Position, Geometrie, Farbe und Sichtbarkeit,
    /// aber ohne Netz, Bauteil und Beobachter.
    pub fn clone_as(&self, id: PadId) -> Self {
        Self {
            id,
            name: self.name.clone(),
            position: self.position,
            ring_diameter: self.ring_diameter,
            hole_diameter: self.hole_diameter,
            color: self.color,
            visible: self.visible,
            selected: false,
            anchor: PadAnchor::Floating,
            net: None,
            observers: Vec::new(),
        }
    }

    /// Bauteil, dem das Pad gehört
    pub fn part(&self) -> Option<PartId> {
        match self.anchor {
            PadAnchor::Anchored(part) => Some(part),
            PadAnchor::Floating => None,
        }
    }

    /// `true` für Pads ohne Bauteil
    pub fn is_floating(&self) -> bool {
        self.anchor == PadAnchor::Floating
    }

    /// Punkt-Test auf den Kupferring
    pub fn contains(&self, point: Vec2) -> bool {
        self.outline().contains(point)
    }

    /// Unerweiterter Umriss (Kupferring)
    pub fn outline(&self) -> Outline {
        self.padded_outline(0.0)
    }

    /// Um `padding` erweiterter Ringumriss
    pub fn padded_outline(&self, padding: f32) -> Outline {
        Outline::Circle {
            center: self.position,
            radius: self.ring_diameter * 0.5 + padding,
        }
    }

    /// Bei diesem Pad registrierte Leiterbahnen
    pub fn observers(&self) -> &[SegmentId] {
        &self.observers
    }

    pub(crate) fn subscribe(&mut self, segment: SegmentId) {
        if !self.observers.contains(&segment) {
            self.observers.push(segment);
        }
    }

    pub(crate) fn unsubscribe(&mut self, segment: SegmentId) {
        self.observers.retain(|s| *s != segment);
    }

    /// Zeichnet das Pad (nur sichtbare)
    pub fn draw(&self, painter: &mut dyn Painter) {
        self.paint(painter, self.color);
    }

    /// Zeichnet das Pad in Selektionsfarbe
    pub fn draw_selected(&self, painter: &mut dyn Painter) {
        self.paint(painter, SELECTED_COLOR);
    }

    fn paint(&self, painter: &mut dyn Painter, color: [f32; 4]) {
        if !self.visible {
            return;
        }
        painter.ring(
            self.position,
            self.ring_diameter * 0.5,
            self.hole_diameter * 0.5,
            color,
            HOLE_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_as_drops_links() {
        let mut pad = Pad::new(
            PadId(1),
            Vec2::new(1.0, 2.0),
            1.5,
            0.8,
            [0.5; 4],
            PadAnchor::Anchored(PartId(9)),
        );
        pad.net = Some(NetId(3));
        pad.subscribe(SegmentId(4));

        let copy = pad.clone_as(PadId(2));

        assert_eq!(copy.position, pad.position);
        assert!(copy.is_floating());
        assert!(copy.net.is_none());
        assert!(copy.observers().is_empty());
    }

    #[test]
    fn test_padded_outline_grows_radius() {
        let pad = Pad::new(PadId(1), Vec2::ZERO, 2.0, 1.0, [0.5; 4], PadAnchor::Floating);

        assert!(pad.contains(Vec2::new(0.9, 0.0)));
        assert!(!pad.contains(Vec2::new(1.2, 0.0)));
        assert!(pad.padded_outline(0.5).contains(Vec2::new(1.4, 0.0)));
    }

    #[test]
    fn test_virtual_pad_is_invisible_and_floating() {
        let pad = Pad::virtual_at(PadId(5), Vec2::ONE, 0.254, [0.0, 1.0, 0.0, 1.0]);

        assert!(!pad.visible);
        assert!(pad.is_floating());
        assert_eq!(pad.hole_diameter, 0.0);
    }
}
