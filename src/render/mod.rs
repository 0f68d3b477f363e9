//! Rendering mit dem egui-Painter.
//!
//! Der Renderer kennt nur die `RenderScene` und den `TextureStore`;
//! Graph und Editor-Zustand bleiben im App-Layer.

mod painter;
mod texture;

pub use crate::shared::RenderScene;
pub use painter::{color32, paint_scene, textured_quad};
pub use texture::{decode_rgba, TextureError, TextureStore};
