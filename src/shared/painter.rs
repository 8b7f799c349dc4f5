//! Zeichen-Schnittstelle für Board-Elemente.

use glam::Vec2;

/// Zeichenziel in Weltkoordinaten (mm).
///
/// Die Implementierung entscheidet über Transformation und Backend.
pub trait Painter {
    /// Gefüllter Kreis
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);

    /// Linie mit runden Enden in der angegebenen Breite
    fn stroke_line(&mut self, start: Vec2, end: Vec2, width: f32, color: [f32; 4]);

    /// Achsenparalleler Rechteckrahmen um `center`
    fn stroke_rect(&mut self, center: Vec2, size: Vec2, color: [f32; 4]);

    /// Kupferring mit Bohrung. Bei `inner_radius <= 0` nur die Scheibe.
    fn ring(
        &mut self,
        center: Vec2,
        outer_radius: f32,
        inner_radius: f32,
        color: [f32; 4],
        hole_color: [f32; 4],
    ) {
        self.fill_circle(center, outer_radius, color);
        if inner_radius > 0.0 {
            self.fill_circle(center, inner_radius, hole_color);
        }
    }
}
