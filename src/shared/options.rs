//! Zentrale Konfiguration für den PCB-Layout-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//! Alle Längen in Millimetern.

use serde::{Deserialize, Serialize};

// ── Leiterbahnen ────────────────────────────────────────────────────

/// Standard-Leiterbahnbreite (10 mil).
pub const TRACE_WIDTH: f32 = 0.254;
/// Standard-Farbe neuer Leiterbahnen (RGBA: Grün).
pub const TRACE_COLOR: [f32; 4] = [0.0, 0.8, 0.0, 1.0];

// ── Pads ────────────────────────────────────────────────────────────

/// Standard-Ringdurchmesser freier Pads.
pub const RING_DIAMETER: f32 = 1.5;
/// Standard-Bohrungsdurchmesser freier Pads.
pub const HOLE_DIAMETER: f32 = 0.8;
/// Standard-Farbe für Pads (RGBA: Grau).
pub const PAD_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
/// Farbe der Bohrung (RGBA: Schwarz).
pub const HOLE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Bauteile ────────────────────────────────────────────────────────

/// Rahmenfarbe der Bauteil-Umrisse (RGBA: Weiß).
pub const PART_OUTLINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Selektion ───────────────────────────────────────────────────────

/// Farbe für selektierte oder vom DRC markierte Elemente (RGBA: Rot).
pub const SELECTED_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Design Rules ────────────────────────────────────────────────────

/// Mindestabstand zwischen Elementen verschiedener Netze.
pub const COMPONENT_SPACING: f32 = 0.254;

// ── Raster ──────────────────────────────────────────────────────────

/// Rasterabstand (0.01 Zoll).
pub const GRID_SPACING: f32 = 0.254;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `pcb_layout_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Leiterbahnen ────────────────────────────────────────────
    /// Breite neu gerouteter Leiterbahnen
    pub trace_width: f32,
    /// Farbe neu gerouteter Leiterbahnen
    pub trace_color: [f32; 4],

    // ── Pads ────────────────────────────────────────────────────
    /// Ringdurchmesser neuer Pads
    pub ring_diameter: f32,
    /// Bohrungsdurchmesser neuer Pads
    pub hole_diameter: f32,
    /// Farbe neuer Pads
    pub pad_color: [f32; 4],

    // ── Design Rules ────────────────────────────────────────────
    /// DRC-Mindestabstand
    pub component_spacing: f32,

    // ── Raster ──────────────────────────────────────────────────
    /// Abstand der Rasterpunkte
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            trace_width: TRACE_WIDTH,
            trace_color: TRACE_COLOR,

            ring_diameter: RING_DIAMETER,
            hole_diameter: HOLE_DIAMETER,
            pad_color: PAD_COLOR,

            component_spacing: COMPONENT_SPACING,

            grid_spacing: GRID_SPACING,
        }
    }
}

/// Serde-Default für `grid_spacing` (ältere TOML-Dateien ohne Raster-Eintrag).
fn default_grid_spacing() -> f32 {
    GRID_SPACING
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Begrenzt den DRC-Abstand auf Werte >= 0.
    pub fn sanitized(mut self) -> Self {
        if self.component_spacing.is_nan() || self.component_spacing < 0.0 {
            log::warn!(
                "Ungültiger Bauteilabstand {}, verwende 0",
                self.component_spacing
            );
            self.component_spacing = 0.0;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pcb_layout_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pcb_layout_editor.toml")
    }
}
