use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Letzte eingerastete Zeigerposition in Weltkoordinaten
    pub cursor_world_pos: Option<Vec2>,
    /// Dieselbe Position relativ zum Rasterursprung (Statusanzeige)
    pub cursor_grid_pos: Option<Vec2>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
