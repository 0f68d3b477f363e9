//! Zentrale Konfiguration für den Spatial Graph Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Editor ──────────────────────────────────────────────────────────

/// Snap-Radius (Welteinheiten): Klick innerhalb dieses Radius rastet auf einen
/// existierenden Punkt ein; gilt auch für Hover-Hervorhebung und Segment-Pick.
pub const SNAP_RADIUS: f32 = 25.0;
/// Straßenbreite der Envelopes in Welteinheiten.
pub const ROAD_WIDTH: f32 = 25.0;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 10.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Farben (RGBA) ───────────────────────────────────────────────────

/// Hintergrund (Jade-Grün).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 163.0 / 255.0, 108.0 / 255.0, 1.0];
/// Punkte (Schwarz).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Segment-Linien (Schwarz).
pub const SEGMENT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Hover-Hervorhebung (Rot).
pub const HOVER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Selektions-Hervorhebung (Blau).
pub const SELECTED_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Zeiger-Markierung (Weiß).
pub const POINTER_MARKER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Gestrichelte Vorschau-Linie (Rot).
pub const PREVIEW_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Envelope-Füllung ohne Textur (halbtransparentes Kobaltblau).
pub const ENVELOPE_FALLBACK_COLOR: [f32; 4] = [0.0, 71.0 / 255.0, 171.0 / 255.0, 128.0 / 255.0];

// ── Größen (Welteinheiten) ─────────────────────────────────────────

pub const POINT_RADIUS: f32 = 12.0;
pub const HIGHLIGHT_RADIUS: f32 = 13.0;
pub const POINTER_MARKER_RADIUS: f32 = 5.0;
pub const SEGMENT_WIDTH: f32 = 2.0;
pub const PREVIEW_THICKNESS: f32 = 2.5;
pub const PREVIEW_DASH_LENGTH: f32 = 10.0;
pub const PREVIEW_GAP_LENGTH: f32 = 5.0;

// ── Ressourcen & Fenster ───────────────────────────────────────────

/// Name, unter dem die Straßentextur registriert wird.
pub const ROAD_TEXTURE_NAME: &str = "road";
/// Pfad der Straßentextur (relativ zum Arbeitsverzeichnis).
pub const ROAD_TEXTURE_PATH: &str = "assets/road.png";
/// Initiale Fenstergröße in Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 1000.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spatial_graph_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Farben ──────────────────────────────────────────────────
    /// Löschfarbe des Viewports
    pub background_color: [f32; 4],
    /// Farbe der Punkte
    pub point_color: [f32; 4],
    /// Farbe der Segment-Linien
    pub segment_color: [f32; 4],
    /// Farbe des Hover-Rings
    pub hover_color: [f32; 4],
    /// Farbe des Selektions-Rings
    pub selected_color: [f32; 4],
    /// Farbe der Zeiger-Markierung
    pub pointer_marker_color: [f32; 4],
    /// Farbe der gestrichelten Vorschau
    pub preview_color: [f32; 4],
    /// Envelope-Füllung, solange keine Textur geladen ist
    pub envelope_fallback_color: [f32; 4],

    // ── Größen ──────────────────────────────────────────────────
    pub point_radius: f32,
    pub highlight_radius: f32,
    pub pointer_marker_radius: f32,
    pub segment_width: f32,
    pub preview_thickness: f32,
    pub preview_dash_length: f32,
    pub preview_gap_length: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Ressourcen ──────────────────────────────────────────────
    pub road_texture_name: String,
    pub road_texture_path: String,
    /// Initiale Fenstergröße [Breite, Höhe]
    pub window_size: [f32; 2],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            background_color: BACKGROUND_COLOR,
            point_color: POINT_COLOR,
            segment_color: SEGMENT_COLOR,
            hover_color: HOVER_COLOR,
            selected_color: SELECTED_COLOR,
            pointer_marker_color: POINTER_MARKER_COLOR,
            preview_color: PREVIEW_COLOR,
            envelope_fallback_color: ENVELOPE_FALLBACK_COLOR,

            point_radius: POINT_RADIUS,
            highlight_radius: HIGHLIGHT_RADIUS,
            pointer_marker_radius: POINTER_MARKER_RADIUS,
            segment_width: SEGMENT_WIDTH,
            preview_thickness: PREVIEW_THICKNESS,
            preview_dash_length: PREVIEW_DASH_LENGTH,
            preview_gap_length: PREVIEW_GAP_LENGTH,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            road_texture_name: ROAD_TEXTURE_NAME.to_string(),
            road_texture_path: ROAD_TEXTURE_PATH.to_string(),
            window_size: WINDOW_SIZE,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt Kamera-Werte, die keinen positiven Zoom ergeben, durch Standardwerte.
    fn sanitized(mut self) -> Self {
        if !is_positive(self.camera_zoom_min) {
            log::warn!(
                "camera_zoom_min = {} ungültig, verwende {}",
                self.camera_zoom_min,
                CAMERA_ZOOM_MIN
            );
            self.camera_zoom_min = CAMERA_ZOOM_MIN;
        }
        if self.camera_zoom_max.is_nan() || self.camera_zoom_max < self.camera_zoom_min {
            log::warn!(
                "camera_zoom_max = {} kleiner als camera_zoom_min, verwende {}",
                self.camera_zoom_max,
                CAMERA_ZOOM_MAX.max(self.camera_zoom_min)
            );
            self.camera_zoom_max = CAMERA_ZOOM_MAX.max(self.camera_zoom_min);
        }
        if !is_positive(self.camera_scroll_zoom_step) {
            log::warn!(
                "camera_scroll_zoom_step = {} ungültig, verwende {}",
                self.camera_scroll_zoom_step,
                CAMERA_SCROLL_ZOOM_STEP
            );
            self.camera_scroll_zoom_step = CAMERA_SCROLL_ZOOM_STEP;
        }
        self
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spatial_graph_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spatial_graph_editor.toml")
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
