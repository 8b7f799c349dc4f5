//! Platzierte Bauteile und ihre Footprints.

use super::geometry::rotate_90;
use super::{Outline, PadArena, PadId, PartId};
use crate::shared::options::PART_OUTLINE_COLOR;
use crate::shared::Painter;
use glam::Vec2;

/// Feste Pad-Anordnung um einen Mittelpunkt
#[derive(Debug, Clone)]
pub struct Footprint {
    center: Vec2,
    pads: Vec<PadId>,
}

impl Footprint {
    /// Erstellt einen Footprint aus bereits in der Arena angelegten Pads
    pub fn new(center: Vec2, pads: Vec<PadId>) -> Self {
        Self { center, pads }
    }

    /// Mittelpunkt des Footprints
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Pads in Footprint-Reihenfolge
    pub fn pads(&self) -> &[PadId] {
        &self.pads
    }
}

/// Ein auf dem Board platziertes Bauteil
#[derive(Debug, Clone)]
pub struct Part {
    /// Handle des Bauteils
    pub id: PartId,
    /// Katalog-Kennung
    pub identity: String,
    /// Anzeigename
    pub name: String,
    /// Footprint (exklusiv besessen)
    pub footprint: Footprint,
    /// Breite des Umrisses
    pub width: f32,
    /// Höhe des Umrisses
    pub height: f32,
    /// Markiert (Selektion oder DRC-Hervorhebung)
    pub selected: bool,
}

impl Part {
    /// Mittelpunkt des Umrisses
    pub fn center(&self) -> Vec2 {
        self.footprint.center
    }

    /// Rechteckiger Umriss ohne Abstand
    pub fn outline(&self) -> Outline {
        self.padded_outline(0.0)
    }

    /// Umriss, nach außen um `padding` erweitert
    pub fn padded_outline(&self, padding: f32) -> Outline {
        Outline::RoundedRect {
            center: self.footprint.center,
            half_size: Vec2::new(self.width, self.height) * 0.5,
            radius: padding,
        }
    }

    /// Punkt-Test auf den Umriss
    pub fn contains(&self, point: Vec2) -> bool {
        self.outline().contains(point)
    }

    /// Verschiebt Umriss und alle Pads
    pub fn translate(&mut self, pads: &mut PadArena, delta: Vec2) {
        self.footprint.center += delta;
        for id in &self.footprint.pads {
            if let Some(pad) = pads.get_mut(id) {
                pad.position += delta;
            }
        }
    }

    /// Dreht die Pads um 90° um den Mittelpunkt und tauscht Breite und Höhe
    pub fn rotate_90(&mut self, pads: &mut PadArena, clockwise: bool) {
        let center = self.footprint.center;
        for id in &self.footprint.pads {
            if let Some(pad) = pads.get_mut(id) {
                pad.position = rotate_90(pad.position, center, clockwise);
            }
        }
        std::mem::swap(&mut self.width, &mut self.height);
    }

    /// Markiert das Bauteil und seine Pads
    pub fn set_selected(&mut self, pads: &mut PadArena, selected: bool) {
        self.selected = selected;
        for id in &self.footprint.pads {
            if let Some(pad) = pads.get_mut(id) {
                pad.selected = selected;
            }
        }
    }

    /// Zeichnet Umriss und Pads
    pub fn draw(&self, pads: &PadArena, painter: &mut dyn Painter) {
        painter.stroke_rect(
            self.footprint.center,
            Vec2::new(self.width, self.height),
            PART_OUTLINE_COLOR,
        );
        for id in &self.footprint.pads {
            if let Some(pad) = pads.get(id) {
                pad.draw(painter);
            }
        }
    }

    /// Zeichnet das Bauteil in Selektionsfarbe
    pub fn draw_selected(&self, pads: &PadArena, painter: &mut dyn Painter) {
        painter.stroke_rect(
            self.footprint.center,
            Vec2::new(self.width, self.height),
            crate::shared::options::SELECTED_COLOR,
        );
        for id in &self.footprint.pads {
            if let Some(pad) = pads.get(id) {
                pad.draw_selected(painter);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pad, PadAnchor};

    fn resistor() -> (Part, PadArena) {
        let mut pads = PadArena::new();
        let anchor = PadAnchor::Anchored(PartId(1));
        pads.insert(
            PadId(1),
            Pad::new(PadId(1), Vec2::new(0.0, -6.35), 1.5, 0.8, [0.5; 4], anchor),
        );
        pads.insert(
            PadId(2),
            Pad::new(PadId(2), Vec2::new(0.0, 6.35), 1.5, 0.8, [0.5; 4], anchor),
        );
        let part = Part {
            id: PartId(1),
            identity: "R".into(),
            name: "R1".into(),
            footprint: Footprint::new(Vec2::ZERO, vec![PadId(1), PadId(2)]),
            width: 2.5,
            height: 14.4,
            selected: false,
        };
        (part, pads)
    }

    #[test]
    fn test_translate_moves_outline_and_pads() {
        let (mut part, mut pads) = resistor();

        part.translate(&mut pads, Vec2::new(10.0, 5.0));

        assert_eq!(part.center(), Vec2::new(10.0, 5.0));
        assert_eq!(pads[&PadId(1)].position, Vec2::new(10.0, -1.35));
        assert!(part.contains(Vec2::new(10.5, 5.0)));
    }

    #[test]
    fn test_rotate_swaps_outline_and_turns_pads() {
        let (mut part, mut pads) = resistor();

        part.rotate_90(&mut pads, true);

        assert_eq!(part.width, 14.4);
        assert_eq!(part.height, 2.5);
        let p1 = pads[&PadId(1)].position;
        assert!((p1 - Vec2::new(-6.35, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_set_selected_propagates_to_pads() {
        let (mut part, mut pads) = resistor();

        part.set_selected(&mut pads, true);

        assert!(pads.values().all(|pad| pad.selected));
    }
}
