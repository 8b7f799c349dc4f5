use crate::app::CommandLog;
use crate::core::{Board, DrcReport, Grid};
use crate::shared::EditorOptions;

use super::{EditorState, SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Layout
    pub board: Board,
    /// Raster zum Einrasten der Zeigerpositionen
    pub grid: Grid,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-State (Modus, Routing-Kopf, Zieh-Vorgang)
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Breiten, Durchmesser, Abstände)
    pub options: EditorOptions,
    /// Ergebnis des letzten Design-Rule-Checks
    pub last_drc: Option<DrcReport>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            board: Board::new(),
            grid: Grid::new(options.grid_spacing),
            view: ViewState::new(),
            selection: SelectionState::new(),
            editor: EditorState::new(),
            command_log: CommandLog::new(),
            options,
            last_drc: None,
        }
    }

    /// Gibt die Anzahl der Pads zurück (für UI-Anzeige)
    pub fn pad_count(&self) -> usize {
        self.board.pad_count()
    }

    /// Gibt die Anzahl der Leiterbahnen zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.board.segment_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
