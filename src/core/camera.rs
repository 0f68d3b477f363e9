//! 2D-Kamera für Pan und Zoom.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// `position` ist der Welt-Punkt in der Viewport-Mitte, `zoom` die Anzahl
/// Bildschirm-Pixel pro Welteinheit.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = ein Pixel pro Welteinheit)
    pub zoom: f32,
}

impl Camera2D {
    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Verschiebt die Kamera (Pan) um ein Delta in Welteinheiten
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb `[min, max]`.
    ///
    /// Der Zoom bleibt immer positiv, auch bei `min <= 0` oder `max < min`.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        let min = min.max(f32::EPSILON);
        let max = max.max(min);
        let zoom = self.zoom * factor;
        self.zoom = if zoom.is_finite() {
            zoom.clamp(min, max)
        } else {
            max
        };
    }

    /// Konvertiert Viewport-lokale Screen-Koordinaten zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        self.position + (screen_pos - screen_size * 0.5) / self.zoom
    }

    /// Konvertiert Welt-Koordinaten zu Viewport-lokalen Screen-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom + screen_size * 0.5
    }

    /// Welteinheiten pro Screen-Pixel.
    pub fn world_per_pixel(&self) -> f32 {
        1.0 / self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
