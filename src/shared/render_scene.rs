//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Alle Koordinaten und Größen sind Welt-Koordinaten; der Renderer
//! transformiert mit der mitgelieferten Kamera.

use crate::core::{Camera2D, OrientedRect};
use glam::Vec2;

/// Kachelung einer Textur auf einem Rechteck.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturedFill {
    /// Name der registrierten Textur
    pub texture_name: String,
    /// Wiederholungen entlang der Rechteck-Länge
    pub repeat_count: u32,
}

/// Ein einzelner Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Gefüllter Kreis
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Gedrehtes Rechteck, optional texturiert
    Rect {
        shape: OrientedRect,
        /// Füllfarbe (bei Textur: Tönung)
        color: [f32; 4],
        texture: Option<TexturedFill>,
    },
    /// Linie mit fester Breite
    Line {
        start: Vec2,
        end: Vec2,
        width: f32,
        color: [f32; 4],
    },
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Löschfarbe
    pub clear_color: [f32; 4],
    /// Zeichenbefehle in Zeichenreihenfolge
    pub commands: Vec<DrawCommand>,
}
