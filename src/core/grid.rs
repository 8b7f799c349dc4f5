//! Raster zum Einrasten von Zeigerpositionen.

use glam::Vec2;

/// Rastet einen Punkt auf den nächsten Rasterpunkt ein
pub trait GridSnap {
    /// Nächster Rasterpunkt zu `point` (reine Funktion)
    fn snap_to_grid(&self, point: Vec2) -> Vec2;
}

/// Gleichmäßiges Raster mit Ursprung und Abstand in mm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Abstand zwischen Rasterpunkten
    pub spacing: f32,
    /// Ursprung des Rasters in Weltkoordinaten
    pub origin: Vec2,
}

impl Grid {
    /// Raster mit Ursprung (0, 0)
    pub fn new(spacing: f32) -> Self {
        Self {
            spacing,
            origin: Vec2::ZERO,
        }
    }

    /// Weltposition relativ zum Rasterursprung (Statusanzeige)
    pub fn to_grid_coords(&self, point: Vec2) -> Vec2 {
        point - self.origin
    }
}

impl GridSnap for Grid {
    fn snap_to_grid(&self, point: Vec2) -> Vec2 {
        if self.spacing <= 0.0 {
            return point;
        }
        let rel = (point - self.origin) / self.spacing;
        rel.round() * self.spacing + self.origin
    }
}
