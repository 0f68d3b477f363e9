//! Achsenparallele Bounding Box des Graphen.

use glam::Vec2;

/// Monoton wachsende Bounding Box aller eingefügten Punkte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphBounds {
    /// Minimale X-Koordinate
    pub min_x: f32,
    /// Maximale X-Koordinate
    pub max_x: f32,
    /// Minimale Y-Koordinate
    pub min_y: f32,
    /// Maximale Y-Koordinate
    pub max_y: f32,
}

impl GraphBounds {
    /// Box, die genau eine Position umschließt.
    pub fn from_point(position: Vec2) -> Self {
        Self {
            min_x: position.x,
            max_x: position.x,
            min_y: position.y,
            max_y: position.y,
        }
    }

    /// Erweitert die Box um eine Position. Schrumpft nie.
    pub fn include(&mut self, position: Vec2) {
        self.min_x = self.min_x.min(position.x);
        self.max_x = self.max_x.max(position.x);
        self.min_y = self.min_y.min(position.y);
        self.max_y = self.max_y.max(position.y);
    }
}
