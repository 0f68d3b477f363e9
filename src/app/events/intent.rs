use crate::core::PointId;
use glam::Vec2;

/// Zum Zeitpunkt eines Sekundär-Klicks gehaltene Modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteModifiers {
    /// Präzises Löschen: nächstes Segment im Snap-Radius entfernen (Shift)
    pub precise_delete: bool,
    /// Punkt unter dem Zeiger entfernen (Ctrl/Cmd)
    pub remove_point: bool,
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Alle Positionen sind bereits Welt-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Zeiger wurde bewegt
    PointerMoved { world_pos: Vec2 },
    /// Primärtaste gedrückt: Punkt setzen/einrasten, verbinden, selektieren
    PrimaryPressed { world_pos: Vec2 },
    /// Sekundärtaste gedrückt: Selektion aufheben, optional löschen
    SecondaryPressed {
        world_pos: Vec2,
        modifiers: DeleteModifiers,
    },
    /// Beliebige Zeiger-Taste losgelassen
    ButtonReleased,
    /// Punkt programmatisch selektieren (verbindet mit vorheriger Selektion)
    SelectPointRequested { point_id: PointId },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<Vec2>,
    },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Reset-Button: Graph und Editor-Zustand leeren
    ResetGraphRequested,
    /// Save-Button
    SaveRequested,
    /// Anwendung beenden
    ExitRequested,
}
