//! Reine 2D-Geometrie-Funktionen auf `glam::Vec2`.
//!
//! Alle Funktionen sind seiteneffektfrei und liefern bei fehlendem Ergebnis
//! (parallele Geraden, kein Schnitt) `None` statt Sentinel-Koordinaten.

use glam::Vec2;

/// Toleranz für parallele Geraden im Kreuzprodukt-Nenner.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Euklidischer Abstand zweier Positionen.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Mittelpunkt zweier Positionen.
#[inline]
pub fn average(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Komponentenweise Summe.
#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

/// Komponentenweise Differenz `a - b`.
#[inline]
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

/// Skaliert einen Vektor mit einem Faktor.
#[inline]
pub fn scale(v: Vec2, factor: f32) -> Vec2 {
    v * factor
}

/// Bewegt `origin` um `radius` in Richtung `angle` (Radiant).
pub fn translate(origin: Vec2, angle: f32, radius: f32) -> Vec2 {
    origin + Vec2::from_angle(angle) * radius
}

/// Richtungswinkel eines Vektors (`atan2(y, x)`).
#[inline]
pub fn angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Lineare Interpolation zwischen `a` (t = 0) und `b` (t = 1).
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Parameter `(t, u)` des Schnitts der Geraden `a→b` und `c→d`.
///
/// `None` bei parallelen oder degenerierten Geraden.
fn intersection_params(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Option<(f32, f32)> {
    let r = b - a;
    let s = d - c;
    let denom = r.perp_dot(s);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let ac = c - a;
    let t = ac.perp_dot(s) / denom;
    let u = ac.perp_dot(r) / denom;
    Some((t, u))
}

/// Schnittpunkt der unbegrenzten Geraden durch `a→b` und `c→d`.
pub fn line_intersection(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Option<Vec2> {
    intersection_params(a, b, c, d).map(|(t, _)| lerp(a, b, t))
}

/// Schnittpunkt der Strecken `a→b` und `c→d` (beide Parameter in `[0, 1]`).
pub fn segment_intersection(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Option<Vec2> {
    let (t, u) = intersection_params(a, b, c, d)?;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(lerp(a, b, t))
    } else {
        None
    }
}

/// Nächster Punkt auf der Strecke `a→b` zu `p` (Projektion auf `[0, 1]` geklemmt).
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Abstand von `p` zur endlichen Strecke `a→b`.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    p.distance(closest_point_on_segment(p, a, b))
}

/// Zerlegt die Strecke `start→end` in Strich-Abschnitte für eine gestrichelte Linie.
///
/// Jeder Abschnitt ist `dash` lang, dazwischen liegt eine Lücke von `gap`.
/// Der letzte Strich wird am Streckenende abgeschnitten.
pub fn dash_segments(start: Vec2, end: Vec2, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
    let total = start.distance(end);
    if total <= f32::EPSILON || dash <= 0.0 {
        return Vec::new();
    }
    let dir = (end - start) / total;
    let step = dash + gap.max(0.0);
    let mut dashes = Vec::with_capacity((total / step).ceil() as usize);
    let mut offset = 0.0;
    while offset < total {
        let dash_end = (offset + dash).min(total);
        dashes.push((start + dir * offset, start + dir * dash_end));
        offset += step;
    }
    dashes
}
