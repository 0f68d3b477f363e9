//! Punkt im Graphen.

use glam::Vec2;
use std::fmt;

/// Stabile ID eines Punktes, vergeben vom besitzenden Graphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Ein Punkt mit Position in Welt-Koordinaten.
///
/// Gleichheit vergleicht ausschließlich die Koordinaten (exakt, ohne Epsilon).
/// Die ID dient nur der Zuordnung zu Segment-Endpunkten nach einer Verschiebung.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    /// Vom Graphen vergebene ID
    pub id: PointId,
    /// Position in Welt-Koordinaten
    pub position: Vec2,
}

impl Point {
    /// Erstellt einen neuen Punkt.
    pub fn new(id: PointId, position: Vec2) -> Self {
        Self { id, position }
    }

    /// Prüft exakte Positionsgleichheit.
    pub fn is_at(&self, position: Vec2) -> bool {
        self.position == position
    }

    /// Euklidischer Abstand zu einer Position.
    pub fn distance_to(&self, position: Vec2) -> f32 {
        self.position.distance(position)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}
