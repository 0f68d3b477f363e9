//! Segment (Straße) zwischen zwei Punkten.

use super::geometry;
use super::point::{Point, PointId};
use glam::Vec2;
use std::fmt;

/// Stabile ID eines Segments, vergeben vom besitzenden Graphen.
///
/// Verknüpft ein Segment mit seinem Envelope, wird aber nie zur
/// Duplikat-Erkennung herangezogen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub u64);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// Ungerichtete Verbindung zwischen zwei Punkten.
///
/// Gleichheit ist Gleichheit der Endpunkt-Menge: `(p1, p2) == (p2, p1)`.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    /// Erster Endpunkt
    pub p1: Point,
    /// Zweiter Endpunkt
    pub p2: Point,
    /// Vom Graphen vergebene ID
    pub id: SegmentId,
}

impl Segment {
    /// Erstellt ein neues Segment.
    pub fn new(p1: Point, p2: Point, id: SegmentId) -> Self {
        Self { p1, p2, id }
    }

    /// Prüft, ob das Segment genau die Endpunkte `a` und `b` verbindet (Reihenfolge egal).
    pub fn connects(&self, a: &Point, b: &Point) -> bool {
        (self.p1 == *a && self.p2 == *b) || (self.p1 == *b && self.p2 == *a)
    }

    /// Prüft, ob ein Endpunkt die ID `id` trägt.
    pub fn has_endpoint(&self, id: PointId) -> bool {
        self.p1.id == id || self.p2.id == id
    }

    /// Prüft, ob ein Endpunkt (über die ID) mit `other` geteilt wird.
    pub fn shares_endpoint(&self, other: &Segment) -> bool {
        other.has_endpoint(self.p1.id) || other.has_endpoint(self.p2.id)
    }

    /// Länge des Segments
    pub fn length(&self) -> f32 {
        self.p1.position.distance(self.p2.position)
    }

    /// Mittelpunkt des Segments
    pub fn midpoint(&self) -> Vec2 {
        geometry::average(self.p1.position, self.p2.position)
    }

    /// Richtungswinkel `p1 → p2` in Radiant.
    pub fn angle(&self) -> f32 {
        geometry::angle(self.p2.position - self.p1.position)
    }

    /// Abstand einer Position zum nächsten Punkt auf der endlichen Strecke.
    pub fn distance_to(&self, position: Vec2) -> f32 {
        geometry::point_segment_distance(position, self.p1.position, self.p2.position)
    }

    /// Übernimmt die Position von `point` in den Endpunkt mit gleicher ID.
    ///
    /// Gibt `true` zurück, wenn ein Endpunkt aktualisiert wurde.
    pub fn reanchor(&mut self, point: &Point) -> bool {
        let mut changed = false;
        if self.p1.id == point.id {
            self.p1.position = point.position;
            changed = true;
        }
        if self.p2.id == point.id {
            self.p2.position = point.position;
            changed = true;
        }
        changed
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.p1, &other.p2)
    }
}
