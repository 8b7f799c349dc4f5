//! Eingebaute Bauteil-Vorlagen (Maße in mm).

use glam::Vec2;

/// Pad einer Vorlage, relativ zum Footprint-Mittelpunkt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadTemplate {
    /// Versatz zum Mittelpunkt
    pub offset: Vec2,
    /// Ringdurchmesser
    pub ring_diameter: f32,
    /// Bohrungsdurchmesser
    pub hole_diameter: f32,
}

/// Vorlage für ein platzierbares Bauteil
#[derive(Debug, Clone, PartialEq)]
pub struct PartTemplate {
    /// Katalog-Kennung
    pub identity: String,
    /// Anzeigename
    pub name: String,
    /// Kategorie im Bauteilbaum
    pub category: PartCategory,
    /// Pads des Footprints
    pub pads: Vec<PadTemplate>,
    /// Umrissbreite
    pub width: f32,
    /// Umrisshöhe
    pub height: f32,
}

/// Kategorie einer Vorlage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartCategory {
    /// Widerstände, Kondensatoren
    Passive,
    /// ICs
    Active,
}

fn pad(x: f32, y: f32, ring_diameter: f32, hole_diameter: f32) -> PadTemplate {
    PadTemplate {
        offset: Vec2::new(x, y),
        ring_diameter,
        hole_diameter,
    }
}

fn axial(
    identity: &str,
    name: &str,
    pitch: f32,
    ring: f32,
    hole: f32,
    size: (f32, f32),
) -> PartTemplate {
    PartTemplate {
        identity: identity.into(),
        name: name.into(),
        category: PartCategory::Passive,
        pads: vec![pad(0.0, -pitch * 0.5, ring, hole), pad(0.0, pitch * 0.5, ring, hole)],
        width: size.0,
        height: size.1,
    }
}

/// Alle eingebauten Vorlagen
pub fn builtin_templates() -> Vec<PartTemplate> {
    let dip8_pads = [3.81, 1.27, -1.27, -3.81]
        .iter()
        .map(|&y| pad(-3.81, y, 1.5, 0.8))
        .chain([-3.81, -1.27, 1.27, 3.81].iter().map(|&y| pad(3.81, y, 1.5, 0.8)))
        .collect();

    vec![
        axial(
            "R-12.7",
            "resistor length 12.7mm, hole 0.8mm",
            12.7,
            1.5,
            0.8,
            (2.5, 14.4),
        ),
        axial(
            "R-7.62",
            "resistor length 7.62mm, hole 0.6mm",
            7.62,
            1.3,
            0.6,
            (2.0, 9.12),
        ),
        axial(
            "C-12.7",
            "capacitor leg spacing 12.7mm, hole 0.8mm",
            12.7,
            1.5,
            0.8,
            (14.4, 14.4),
        ),
        axial(
            "C-7.62",
            "capacitor leg spacing 7.62mm, hole 0.6mm",
            7.62,
            1.3,
            0.6,
            (9.12, 9.12),
        ),
        PartTemplate {
            identity: "DIP-8".into(),
            name: "8 legged op-amp, 0.8mm holes".into(),
            category: PartCategory::Active,
            pads: dip8_pads,
            width: 9.32,
            height: 10.36,
        },
    ]
}

/// Sucht eine Vorlage per Kennung
pub fn find_template(identity: &str) -> Option<PartTemplate> {
    builtin_templates()
        .into_iter()
        .find(|template| template.identity == identity)
}
