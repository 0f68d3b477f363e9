//! Der Graph: Punkte, Segmente, Bounding Box und Strassen-Envelopes.
//!
//! Punkte und Segmente werden in Einfüge-Reihenfolge gehalten; alle
//! Nächster-Nachbar-Abfragen sind lineare Scans, bei Gleichstand gewinnt
//! das zuerst eingefügte Element.

use super::envelope::{Envelope, RoadTexture};
use super::geometry;
use super::{GraphBounds, Point, PointId, Segment, SegmentId};
use glam::Vec2;
use indexmap::IndexMap;
use std::sync::Arc;

/// Treffer einer Punkt-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMatch {
    /// ID des gefundenen Punktes
    pub point_id: PointId,
    /// Euklidischer Abstand zur Abfrage-Position
    pub distance: f32,
}

/// Treffer einer Segment-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentMatch {
    /// ID des gefundenen Segments
    pub segment_id: SegmentId,
    /// Abstand zum nächsten Punkt auf dem Segment
    pub distance: f32,
}

/// Darstellungsparameter für Strassen-Envelopes.
#[derive(Debug, Clone)]
pub struct RoadStyle {
    /// Straßenbreite in Welteinheiten
    pub width: f32,
    /// Geteilte Straßentextur (None bis zum Laden)
    pub texture: Option<Arc<RoadTexture>>,
}

impl RoadStyle {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            texture: None,
        }
    }
}

/// Ein Segment mit seinem (optionalen) Envelope.
///
/// Beide leben im selben Map-Eintrag und werden nur gemeinsam entfernt.
#[derive(Debug, Clone)]
pub struct Road {
    pub segment: Segment,
    pub envelope: Option<Envelope>,
}

/// Ungerichteter Graph aus eindeutigen Punkten und Segmenten.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    points: IndexMap<PointId, Point>,
    roads: IndexMap<SegmentId, Road>,
    last_point: Option<PointId>,
    bounds: Option<GraphBounds>,
    /// `Some` = Strassen-Variante mit Envelope pro Segment
    road_style: Option<RoadStyle>,
    next_point_id: u64,
    next_segment_id: u64,
}

impl Graph {
    /// Erstellt einen leeren Graphen ohne Envelopes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen leeren Graphen, der für jedes Segment ein Envelope anlegt.
    pub fn with_road_style(style: RoadStyle) -> Self {
        Self {
            road_style: Some(style),
            ..Self::default()
        }
    }

    pub fn road_style(&self) -> Option<&RoadStyle> {
        self.road_style.as_ref()
    }

    /// Setzt die Straßentextur und aktualisiert die Kachelung aller Envelopes.
    ///
    /// Ohne Strassen-Variante keine Operation.
    pub fn set_road_texture(&mut self, texture: Arc<RoadTexture>) {
        let Some(style) = self.road_style.as_mut() else {
            log::warn!("Straßentextur ignoriert: Graph ohne Strassen-Stil");
            return;
        };
        style.texture = Some(Arc::clone(&texture));
        for road in self.roads.values_mut() {
            if let Some(envelope) = road.envelope.as_mut() {
                envelope.set_texture(Some(Arc::clone(&texture)));
            }
        }
    }

    // ── Punkte ──────────────────────────────────────────────────────

    /// Fügt einen Punkt ohne Duplikat-Prüfung an.
    fn add_point(&mut self, position: Vec2) -> PointId {
        self.next_point_id += 1;
        let id = PointId(self.next_point_id);
        self.points.insert(id, Point::new(id, position));
        self.last_point = Some(id);
        self.update_boundary(position);
        id
    }

    /// Fügt einen Punkt hinzu, sofern an `position` noch keiner liegt.
    pub fn try_add_point(&mut self, position: Vec2) -> Option<PointId> {
        if self.contains_point(position) {
            log::debug!(
                "Punkt bei ({:.1}, {:.1}) existiert bereits",
                position.x,
                position.y
            );
            return None;
        }
        Some(self.add_point(position))
    }

    /// Prüft, ob ein Punkt exakt an `position` liegt.
    pub fn contains_point(&self, position: Vec2) -> bool {
        self.points.values().any(|p| p.is_at(position))
    }

    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(&id)
    }

    /// Punkt exakt an `position`.
    pub fn point_at(&self, position: Vec2) -> Option<&Point> {
        self.points.values().find(|p| p.is_at(position))
    }

    /// Alle Punkte in Einfüge-Reihenfolge.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Zuletzt eingefügter Punkt (None nach dessen Entfernung).
    pub fn last_point(&self) -> Option<PointId> {
        self.last_point
    }

    /// Nächster Punkt zu `position` mit Abstand > 0.
    ///
    /// Deckungsgleiche Punkte werden übersprungen; bei Gleichstand
    /// gewinnt der zuerst eingefügte Punkt.
    pub fn find_nearest_point(&self, position: Vec2) -> Option<PointMatch> {
        let mut best: Option<PointMatch> = None;
        for point in self.points.values() {
            let distance = point.distance_to(position);
            if distance <= 0.0 {
                continue;
            }
            match best {
                Some(current) if distance >= current.distance => {}
                _ => {
                    best = Some(PointMatch {
                        point_id: point.id,
                        distance,
                    })
                }
            }
        }
        best
    }

    /// Verschiebt einen Punkt und zieht alle angeschlossenen Segmente samt Envelope nach.
    ///
    /// Gibt `false` zurück, wenn der Punkt unbekannt ist oder ein anderer
    /// Punkt bereits an `position` liegt.
    pub fn move_point(&mut self, id: PointId, position: Vec2) -> bool {
        if self
            .points
            .values()
            .any(|p| p.id != id && p.is_at(position))
        {
            log::debug!("Verschieben von {} blockiert: Position belegt", id);
            return false;
        }
        let Some(point) = self.points.get_mut(&id) else {
            return false;
        };
        point.position = position;
        let moved = *point;

        for segment_id in self.connected_segment_ids(id) {
            let Some(road) = self.roads.get_mut(&segment_id) else {
                continue;
            };
            if road.segment.reanchor(&moved) {
                if let Some(envelope) = road.envelope.as_mut() {
                    envelope.retarget(road.segment);
                }
            }
        }
        true
    }

    /// Entfernt einen Punkt samt aller angeschlossenen Segmente und Envelopes.
    pub fn remove_point(&mut self, id: PointId) -> Option<Point> {
        let removed = self.points.shift_remove(&id)?;
        let before = self.roads.len();
        self.roads.retain(|_, road| !road.segment.has_endpoint(id));
        if self.last_point == Some(id) {
            self.last_point = None;
        }
        log::info!(
            "Punkt {} entfernt ({} Segmente mitentfernt)",
            id,
            before - self.roads.len()
        );
        Some(removed)
    }

    // ── Segmente ────────────────────────────────────────────────────

    /// Fügt ein Segment ohne Prüfung an und legt in der Strassen-Variante das Envelope an.
    fn add_segment(&mut self, p1: Point, p2: Point) -> SegmentId {
        self.next_segment_id += 1;
        let id = SegmentId(self.next_segment_id);
        let segment = Segment::new(p1, p2, id);
        let envelope = self
            .road_style
            .as_ref()
            .map(|style| Envelope::new(segment, style.width, style.texture.clone()));
        self.roads.insert(id, Road { segment, envelope });
        id
    }

    /// Verbindet zwei bestehende Punkte.
    ///
    /// `None` bei unbekannten IDs, identischen Endpunkten oder wenn das
    /// Segment (in beliebiger Richtung) schon existiert.
    pub fn try_add_segment(&mut self, a: PointId, b: PointId) -> Option<SegmentId> {
        let (Some(p1), Some(p2)) = (self.points.get(&a).copied(), self.points.get(&b).copied())
        else {
            log::warn!("Segment {} - {} abgelehnt: Punkt unbekannt", a, b);
            return None;
        };
        if p1 == p2 {
            log::debug!("Segment {} - {} abgelehnt: identische Endpunkte", a, b);
            return None;
        }
        if self.roads.values().any(|road| road.segment.connects(&p1, &p2)) {
            log::debug!("Segment {} - {} existiert bereits", a, b);
            return None;
        }
        let id = self.add_segment(p1, p2);
        log::info!("Segment {} erstellt: {} - {}", id, a, b);
        Some(id)
    }

    /// Prüft, ob ein gleiches Segment (Endpunkt-Menge) existiert.
    pub fn contains_segment(&self, segment: &Segment) -> bool {
        self.roads.values().any(|road| road.segment == *segment)
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.roads.get(&id).map(|road| &road.segment)
    }

    /// Alle Segmente in Einfüge-Reihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.roads.values().map(|road| &road.segment)
    }

    /// Alle Segmente mit ihren Envelopes.
    pub fn roads(&self) -> impl Iterator<Item = &Road> {
        self.roads.values()
    }

    pub fn segment_count(&self) -> usize {
        self.roads.len()
    }

    /// Entfernt das gleiche Segment (Endpunkt-Menge) samt Envelope.
    pub fn remove_segment(&mut self, segment: &Segment) -> bool {
        let Some(id) = self
            .roads
            .values()
            .find(|road| road.segment == *segment)
            .map(|road| road.segment.id)
        else {
            return false;
        };
        self.remove_segment_by_id(id).is_some()
    }

    /// Entfernt ein Segment anhand seiner ID samt Envelope.
    pub fn remove_segment_by_id(&mut self, id: SegmentId) -> Option<Segment> {
        let road = self.roads.shift_remove(&id)?;
        log::info!("Segment {} entfernt", id);
        Some(road.segment)
    }

    /// Nächstes Segment zu `position` (Abstand zur endlichen Strecke).
    pub fn find_nearest_segment(&self, position: Vec2) -> Option<SegmentMatch> {
        let mut best: Option<SegmentMatch> = None;
        for road in self.roads.values() {
            let distance = road.segment.distance_to(position);
            match best {
                Some(current) if distance >= current.distance => {}
                _ => {
                    best = Some(SegmentMatch {
                        segment_id: road.segment.id,
                        distance,
                    })
                }
            }
        }
        best
    }

    /// IDs aller Segmente mit Endpunkt `point_id`.
    pub fn connected_segment_ids(&self, point_id: PointId) -> Vec<SegmentId> {
        self.connected_segments(point_id).map(|s| s.id).collect()
    }

    /// Alle Segmente mit Endpunkt `point_id`.
    pub fn connected_segments(&self, point_id: PointId) -> impl Iterator<Item = &Segment> {
        self.segments()
            .filter(move |segment| segment.has_endpoint(point_id))
    }

    /// Alle paarweisen Schnittpunkte der Segmente, O(n²).
    ///
    /// Segmente mit gemeinsamem Endpunkt und parallele Paare liefern keinen Schnitt.
    pub fn find_intersections(&self) -> Vec<Vec2> {
        let segments: Vec<&Segment> = self.segments().collect();
        let mut hits = Vec::new();
        for (i, a) in segments.iter().enumerate() {
            for b in &segments[i + 1..] {
                if a.shares_endpoint(b) {
                    continue;
                }
                if let Some(hit) = geometry::segment_intersection(
                    a.p1.position,
                    a.p2.position,
                    b.p1.position,
                    b.p2.position,
                ) {
                    hits.push(hit);
                }
            }
        }
        hits
    }

    // ── Envelopes ───────────────────────────────────────────────────

    /// Envelope des Segments `segment_id`.
    pub fn envelope(&self, segment_id: SegmentId) -> Option<&Envelope> {
        self.roads
            .get(&segment_id)
            .and_then(|road| road.envelope.as_ref())
    }

    /// Alle Envelopes in Segment-Reihenfolge.
    pub fn envelopes(&self) -> impl Iterator<Item = &Envelope> {
        self.roads.values().filter_map(|road| road.envelope.as_ref())
    }

    // ── Bounding Box ────────────────────────────────────────────────

    /// Erweitert die Bounding Box um `position`; schrumpft nie.
    pub fn update_boundary(&mut self, position: Vec2) {
        match self.bounds.as_mut() {
            Some(bounds) => bounds.include(position),
            None => self.bounds = Some(GraphBounds::from_point(position)),
        }
    }

    /// Bounding Box; None solange noch nichts eingefügt wurde.
    pub fn bounds(&self) -> Option<GraphBounds> {
        self.bounds
    }

    /// Entfernt alle Punkte und Segmente. ID-Zähler laufen weiter.
    pub fn clear(&mut self) {
        self.points.clear();
        self.roads.clear();
        self.last_point = None;
        self.bounds = None;
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
