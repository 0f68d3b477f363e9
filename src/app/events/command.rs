use crate::core::PointId;
use glam::Vec2;

/// Mutierende App-Commands, ausgeführt vom Controller.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Editing ===
    /// Selektierten Punkt (im Drag) an Position verschieben
    DragSelectedTo { world_pos: Vec2 },
    /// Punkt einrasten oder neu setzen, mit Selektion verbinden und selektieren
    PlaceOrSelectAt { world_pos: Vec2 },
    /// Punkt selektieren, vorher ggf. mit der alten Selektion verbinden
    SelectPoint { point_id: PointId },
    /// Nächstes Segment innerhalb `max_distance` entfernen
    RemoveSegmentNear { world_pos: Vec2, max_distance: f32 },
    /// Punkt samt angeschlossener Segmente entfernen
    RemovePoint { point_id: PointId },
    /// Graph und Editor-Zustand leeren
    ResetGraph,

    // === Selektion & Zeiger ===
    /// Zeigerposition und Hover-Punkt aktualisieren
    UpdateHover { world_pos: Vec2 },
    /// Selektion aufheben
    ClearSelection,
    /// Drag beenden (Selektion bleibt)
    EndDrag,

    // === Kamera & Viewport ===
    PanCamera { delta: Vec2 },
    ZoomCamera {
        factor: f32,
        focus_world: Option<Vec2>,
    },
    SetViewportSize { size: [f32; 2] },
    ResetCamera,

    // === Datei & Anwendung ===
    /// Graph speichern (nicht unterstützt)
    SaveGraph,
    RequestExit,
}
