//! Führt eine RenderScene auf einem `egui::Painter` aus.

use super::TextureStore;
use crate::shared::{DrawCommand, RenderScene};
use egui::epaint::Vertex;
use egui::{Color32, Mesh, Pos2, Rect, Shape, Stroke, TextureId};
use glam::Vec2;

/// Konvertiert eine RGBA-Farbe (0..1, nicht vormultipliziert) nach `Color32`.
pub fn color32(c: [f32; 4]) -> Color32 {
    let [r, g, b, a] = c.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Welt → Bildschirm innerhalb des Viewport-Rechtecks.
struct ScreenTransform<'a> {
    scene: &'a RenderScene,
    origin: Vec2,
    size: Vec2,
}

impl ScreenTransform<'_> {
    fn pos(&self, world: Vec2) -> Pos2 {
        let p = self.origin + self.scene.camera.world_to_screen(world, self.size);
        Pos2::new(p.x, p.y)
    }

    fn len(&self, world_len: f32) -> f32 {
        world_len * self.scene.camera.zoom
    }
}

/// Baut ein texturiertes Viereck; die Textur wird `repeat_count`-mal entlang
/// der Kante `corners[0] → corners[1]` wiederholt.
pub fn textured_quad(corners: [Pos2; 4], repeat_count: u32, texture: TextureId, tint: Color32) -> Mesh {
    let u = repeat_count as f32;
    let uvs = [
        Pos2::new(0.0, 0.0),
        Pos2::new(u, 0.0),
        Pos2::new(u, 1.0),
        Pos2::new(0.0, 1.0),
    ];
    let mut mesh = Mesh::with_texture(texture);
    for (pos, uv) in corners.into_iter().zip(uvs) {
        mesh.vertices.push(Vertex {
            pos,
            uv,
            color: tint,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}

/// Zeichnet Hintergrund und alle Befehle der Szene in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: Rect, scene: &RenderScene, textures: &TextureStore) {
    painter.rect_filled(rect, 0.0, color32(scene.clear_color));

    let transform = ScreenTransform {
        scene,
        origin: Vec2::new(rect.min.x, rect.min.y),
        size: Vec2::new(rect.width(), rect.height()),
    };

    for command in &scene.commands {
        match command {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(
                    transform.pos(*center),
                    transform.len(*radius),
                    color32(*color),
                );
            }
            DrawCommand::Line {
                start,
                end,
                width,
                color,
            } => {
                painter.line_segment(
                    [transform.pos(*start), transform.pos(*end)],
                    Stroke::new(transform.len(*width), color32(*color)),
                );
            }
            DrawCommand::Rect {
                shape,
                color,
                texture,
            } => {
                let corners = shape.corners().map(|c| transform.pos(c));
                let texture_id = texture
                    .as_ref()
                    .and_then(|fill| textures.texture_id(&fill.texture_name).map(|id| (id, fill)));
                match texture_id {
                    Some((id, fill)) => {
                        painter.add(Shape::mesh(textured_quad(
                            corners,
                            fill.repeat_count,
                            id,
                            color32(*color),
                        )));
                    }
                    None => {
                        painter.add(Shape::convex_polygon(
                            corners.to_vec(),
                            color32(*color),
                            Stroke::NONE,
                        ));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color32_converts_opaque_colors() {
        assert_eq!(color32([1.0, 0.0, 0.0, 1.0]), Color32::RED);
        assert_eq!(color32([0.0, 0.0, 0.0, 1.0]), Color32::BLACK);
        assert_eq!(
            color32([0.0, 163.0 / 255.0, 108.0 / 255.0, 1.0]),
            Color32::from_rgb(0, 163, 108)
        );
    }

    #[test]
    fn textured_quad_repeats_along_length() {
        let corners = [
            Pos2::new(0.0, 0.0),
            Pos2::new(30.0, 0.0),
            Pos2::new(30.0, 10.0),
            Pos2::new(0.0, 10.0),
        ];
        let mesh = textured_quad(corners, 3, TextureId::Managed(7), Color32::WHITE);

        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.vertices[1].uv, Pos2::new(3.0, 0.0));
        assert_eq!(mesh.vertices[2].pos, Pos2::new(30.0, 10.0));
        assert_eq!(mesh.texture_id, TextureId::Managed(7));
    }
}
