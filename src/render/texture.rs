//! Textur-Ressourcen: Laden von Bilddateien und Registrierung bei egui.

use crate::core::RoadTexture;
use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Fehler beim Bereitstellen einer Textur.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// Datei fehlt oder ist kein lesbares Bild
    #[error("Textur '{name}' konnte nicht aus {} geladen werden: {source}", .path.display())]
    Load {
        name: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Liest eine Bilddatei als RGBA8.
pub fn decode_rgba(name: &str, path: &Path) -> Result<RgbaImage, TextureError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| TextureError::Load {
            name: name.to_string(),
            path: path.to_path_buf(),
            source,
        })
}

/// Namensbasierter Speicher geladener Texturen (Wiederholung aktiviert).
#[derive(Default)]
pub struct TextureStore {
    /// egui-Handles; halten die GPU-Texturen am Leben
    textures: HashMap<String, egui::TextureHandle>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt `path`, registriert die Textur unter `name` und liefert ihre Metadaten.
    pub fn load(
        &mut self,
        ctx: &egui::Context,
        name: &str,
        path: &Path,
    ) -> Result<Arc<RoadTexture>, TextureError> {
        let rgba = decode_rgba(name, path)?;
        let (width, height) = rgba.dimensions();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            rgba.as_raw(),
        );
        let handle = ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR_REPEAT);
        let info = Arc::new(RoadTexture::new(name, width, height));

        log::info!(
            "Textur '{}' geladen: {}x{} Pixel aus {}",
            name,
            width,
            height,
            path.display()
        );
        self.textures.insert(name.to_string(), handle);
        Ok(info)
    }

    /// egui-TextureId für den Renderer (None wenn nicht geladen).
    pub fn texture_id(&self, name: &str) -> Option<egui::TextureId> {
        self.textures.get(name).map(|handle| handle.id())
    }
}
