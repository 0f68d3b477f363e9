use super::{EditorState, ViewState};
use crate::core::{Graph, RoadStyle};
use crate::shared::{EditorOptions, ROAD_WIDTH};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Der bearbeitete Graph (Strassen-Variante)
    pub graph: Graph,
    /// Interaktionszustand (Selektion, Hover, Drag)
    pub editor: EditorState,
    /// View-State
    pub view: ViewState,
    /// Laufzeit-Optionen (Farben, Größen, Zoom)
    pub options: EditorOptions,
    /// Temporäre Statusnachricht für die Statusleiste
    pub status_message: Option<String>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            graph: Graph::with_road_style(RoadStyle::new(ROAD_WIDTH)),
            editor: EditorState::new(),
            view: ViewState::new(),
            options,
            status_message: None,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.graph.point_count()
    }

    /// Gibt die Anzahl der Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.graph.segment_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
