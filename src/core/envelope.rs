//! Strassen-Envelope: texturiertes, gedrehtes Rechteck um ein Segment.
//!
//! Geometrie und Textur-Kachelung werden vollständig aus dem Skelett-Segment
//! und der Straßenbreite abgeleitet und bei jeder Änderung gemeinsam neu berechnet.

use super::segment::Segment;
use glam::Vec2;
use std::sync::Arc;

/// Metadaten der geteilten Straßentextur (Pixel-Abmessungen + Ressourcen-Name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadTexture {
    /// Name, unter dem der Renderer die Textur registriert hat
    pub name: String,
    /// Breite in Pixeln
    pub width: u32,
    /// Höhe in Pixeln
    pub height: u32,
}

impl RoadTexture {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// Gedrehtes Rechteck in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    /// Mittelpunkt
    pub center: Vec2,
    /// Ausdehnung entlang der Rotationsrichtung
    pub length: f32,
    /// Ausdehnung quer zur Rotationsrichtung
    pub thickness: f32,
    /// Rotation in Radiant
    pub rotation: f32,
    /// Eckenradius (halbe Dicke)
    pub corner_radius: f32,
}

impl OrientedRect {
    /// Eckpunkte gegen den Uhrzeigersinn, beginnend hinten-rechts.
    pub fn corners(&self) -> [Vec2; 4] {
        let dir = Vec2::from_angle(self.rotation);
        let half_len = dir * (self.length * 0.5);
        let half_thick = dir.perp() * (self.thickness * 0.5);
        [
            self.center - half_len - half_thick,
            self.center + half_len - half_thick,
            self.center + half_len + half_thick,
            self.center - half_len + half_thick,
        ]
    }
}

/// Wiederholung der Textur entlang der Segmentlänge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureTiling {
    /// `ceil(Länge / Texturbreite)`
    pub repeat_count: u32,
    /// Ausgeschnittener Texturbereich `[Breite * repeat_count, Höhe]` in Pixeln
    pub texture_rect: [u32; 2],
}

impl TextureTiling {
    /// Berechnet die Kachelung; `None` bei Textur ohne Breite.
    pub fn compute(length: f32, texture: &RoadTexture) -> Option<Self> {
        if texture.width == 0 {
            return None;
        }
        let repeat_count = (length / texture.width as f32).ceil().max(0.0) as u32;
        Some(Self {
            repeat_count,
            texture_rect: [texture.width * repeat_count, texture.height],
        })
    }
}

/// Envelope eines Segments.
#[derive(Debug, Clone)]
pub struct Envelope {
    skeleton: Segment,
    width: f32,
    shape: OrientedRect,
    texture: Option<Arc<RoadTexture>>,
    tiling: Option<TextureTiling>,
}

impl Envelope {
    /// Erstellt ein Envelope für `skeleton` mit der Straßenbreite `width`.
    pub fn new(skeleton: Segment, width: f32, texture: Option<Arc<RoadTexture>>) -> Self {
        let shape = Self::shape_for(&skeleton, width);
        let tiling = texture
            .as_deref()
            .and_then(|tex| TextureTiling::compute(shape.length, tex));
        Self {
            skeleton,
            width,
            shape,
            texture,
            tiling,
        }
    }

    fn shape_for(skeleton: &Segment, width: f32) -> OrientedRect {
        OrientedRect {
            center: skeleton.midpoint(),
            length: skeleton.length(),
            thickness: width,
            rotation: skeleton.angle(),
            corner_radius: width * 0.5,
        }
    }

    fn refresh_tiling(&mut self) {
        self.tiling = self
            .texture
            .as_deref()
            .and_then(|tex| TextureTiling::compute(self.shape.length, tex));
    }

    /// Setzt ein neues Skelett und berechnet Geometrie und Kachelung in einem Schritt neu.
    pub fn retarget(&mut self, skeleton: Segment) {
        self.skeleton = skeleton;
        self.shape = Self::shape_for(&self.skeleton, self.width);
        self.refresh_tiling();
    }

    /// Tauscht die Textur und aktualisiert die Kachelung.
    pub fn set_texture(&mut self, texture: Option<Arc<RoadTexture>>) {
        self.texture = texture;
        self.refresh_tiling();
    }

    pub fn skeleton(&self) -> &Segment {
        &self.skeleton
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn shape(&self) -> &OrientedRect {
        &self.shape
    }

    pub fn texture(&self) -> Option<&RoadTexture> {
        self.texture.as_deref()
    }

    pub fn tiling(&self) -> Option<TextureTiling> {
        self.tiling
    }
}
