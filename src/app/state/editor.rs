use crate::core::PointId;
use glam::Vec2;

/// Phase der Editor-Zustandsmaschine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// Nichts selektiert
    Idle,
    /// Ein Punkt ist selektiert, Taste nicht gedrückt
    PointSelected,
    /// Ein Punkt ist selektiert und wird gezogen
    Dragging,
}

/// Transienter Interaktionszustand des Editors.
///
/// Referenzen auf Punkte sind IDs und werden bei jeder Entfernung explizit
/// über [`EditorState::forget_point`] invalidiert.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Selektierter Punkt (Quelle für neue Segmente)
    pub selected: Option<PointId>,
    /// Nächster Punkt zum Zeiger
    pub hovered: Option<PointId>,
    /// Primärtaste gehalten seit dem letzten Press
    pub dragging: bool,
    /// Letzte bekannte Zeigerposition in Welt-Koordinaten
    pub pointer_world: Vec2,
}

impl EditorState {
    /// Erstellt einen leeren Editor-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Phase, abgeleitet aus Selektion und Drag-Flag.
    pub fn phase(&self) -> EditorPhase {
        match (self.selected, self.dragging) {
            (None, _) => EditorPhase::Idle,
            (Some(_), false) => EditorPhase::PointSelected,
            (Some(_), true) => EditorPhase::Dragging,
        }
    }

    /// Entfernt alle Referenzen auf einen gelöschten Punkt.
    pub fn forget_point(&mut self, id: PointId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    /// Setzt Selektion, Hover und Drag zurück; die Zeigerposition bleibt.
    pub fn reset(&mut self) {
        self.selected = None;
        self.hovered = None;
        self.dragging = false;
    }
}
