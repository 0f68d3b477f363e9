//! Builder für RenderScene aus dem AppState.

use super::use_cases::selection::snap_target;
use super::AppState;
use crate::core::{geometry, Envelope};
use crate::shared::{DrawCommand, EditorOptions, RenderScene, TexturedFill};

/// Weiß: Textur ungetönt zeichnen.
const TEXTURE_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Zeichenreihenfolge: Zeiger-Markierung, gestrichelte Vorschau, Segmente,
/// Punkte, Envelopes, Hover-Ring, Selektions-Ring.
pub fn build(state: &AppState) -> RenderScene {
    let opts = &state.options;
    let graph = &state.graph;
    let pointer = state.editor.pointer_world;
    let snapped = snap_target(graph, pointer);
    let mut commands = Vec::with_capacity(graph.point_count() * 2 + graph.segment_count() * 2 + 8);

    commands.push(DrawCommand::Circle {
        center: pointer,
        radius: opts.pointer_marker_radius,
        color: opts.pointer_marker_color,
    });

    let selected = state.editor.selected.and_then(|id| graph.point(id));
    if let Some(start) = selected {
        let end = snapped.map_or(pointer, |p| p.position);
        for (dash_start, dash_end) in geometry::dash_segments(
            start.position,
            end,
            opts.preview_dash_length,
            opts.preview_gap_length,
        ) {
            commands.push(DrawCommand::Line {
                start: dash_start,
                end: dash_end,
                width: opts.preview_thickness,
                color: opts.preview_color,
            });
        }
    }

    commands.extend(graph.segments().map(|segment| DrawCommand::Line {
        start: segment.p1.position,
        end: segment.p2.position,
        width: opts.segment_width,
        color: opts.segment_color,
    }));

    commands.extend(graph.points().map(|point| DrawCommand::Circle {
        center: point.position,
        radius: opts.point_radius,
        color: opts.point_color,
    }));

    commands.extend(graph.envelopes().map(|envelope| envelope_command(envelope, opts)));

    if snapped.is_some() {
        if let Some(hovered) = state.editor.hovered.and_then(|id| graph.point(id)) {
            commands.push(DrawCommand::Circle {
                center: hovered.position,
                radius: opts.highlight_radius,
                color: opts.hover_color,
            });
        }
    }

    if let Some(selected) = selected {
        commands.push(DrawCommand::Circle {
            center: selected.position,
            radius: opts.highlight_radius,
            color: opts.selected_color,
        });
    }

    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size: state.view.viewport_size,
        clear_color: opts.background_color,
        commands,
    }
}

fn envelope_command(envelope: &Envelope, opts: &EditorOptions) -> DrawCommand {
    let texture = envelope
        .texture()
        .zip(envelope.tiling())
        .map(|(texture, tiling)| TexturedFill {
            texture_name: texture.name.clone(),
            repeat_count: tiling.repeat_count,
        });
    let color = if texture.is_some() {
        TEXTURE_TINT
    } else {
        opts.envelope_fallback_color
    };
    DrawCommand::Rect {
        shape: *envelope.shape(),
        color,
        texture,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::editing::place_or_select_at;
    use crate::app::use_cases::selection::update_hover;
    use crate::core::RoadTexture;
    use glam::Vec2;
    use std::sync::Arc;

    fn circle_colors(scene: &RenderScene) -> Vec<[f32; 4]> {
        scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_state_draws_only_pointer_marker() {
        let state = AppState::new();

        let scene = build(&state);

        assert_eq!(scene.commands.len(), 1);
        assert!(matches!(
            scene.commands[0],
            DrawCommand::Circle { radius, .. } if radius == state.options.pointer_marker_radius
        ));
        assert_eq!(scene.clear_color, state.options.background_color);
    }

    #[test]
    fn draw_order_follows_layering() {
        let mut state = AppState::new();
        place_or_select_at(&mut state, Vec2::new(0.0, 0.0));
        place_or_select_at(&mut state, Vec2::new(100.0, 0.0));
        update_hover(&mut state, Vec2::new(105.0, 0.0));

        let scene = build(&state);
        let kinds: Vec<&str> = scene
            .commands
            .iter()
            .map(|c| match c {
                DrawCommand::Circle { .. } => "circle",
                DrawCommand::Line { .. } => "line",
                DrawCommand::Rect { .. } => "rect",
            })
            .collect();

        assert_eq!(kinds.first(), Some(&"circle"));
        let first_rect = kinds.iter().position(|k| *k == "rect").expect("Envelope");
        assert_eq!(kinds[first_rect - 1], "circle");
        assert_eq!(kinds[first_rect - 2], "circle");
        assert_eq!(&kinds[first_rect + 1..], &["circle", "circle"]);

        let colors = circle_colors(&scene);
        assert_eq!(colors[colors.len() - 2], state.options.hover_color);
        assert_eq!(colors[colors.len() - 1], state.options.selected_color);
    }

    #[test]
    fn preview_is_dashed_towards_pointer() {
        let mut state = AppState::new();
        place_or_select_at(&mut state, Vec2::new(0.0, 0.0));
        update_hover(&mut state, Vec2::new(100.0, 0.0));

        let scene = build(&state);
        let dashes: Vec<_> = scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { start, end, width, .. } => Some((*start, *end, *width)),
                _ => None,
            })
            .collect();

        // 100 / (10 + 5) → 7 Striche
        assert_eq!(dashes.len(), 7);
        assert!(dashes
            .iter()
            .all(|(_, _, width)| *width == state.options.preview_thickness));
        assert_eq!(dashes[0].0, Vec2::ZERO);
    }

    #[test]
    fn preview_snaps_to_nearby_point() {
        let mut state = AppState::new();
        place_or_select_at(&mut state, Vec2::new(0.0, 0.0));
        place_or_select_at(&mut state, Vec2::new(200.0, 0.0));
        state.editor.selected = state.graph.points().next().map(|p| p.id);
        update_hover(&mut state, Vec2::new(190.0, 10.0));

        let scene = build(&state);
        let last_dash_end = scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { end, width, .. }
                    if *width == state.options.preview_thickness =>
                {
                    Some(*end)
                }
                _ => None,
            })
            .last()
            .expect("Vorschau vorhanden");

        assert_eq!(last_dash_end, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn hover_ring_only_within_snap_radius() {
        let mut state = AppState::new();
        place_or_select_at(&mut state, Vec2::new(0.0, 0.0));
        state.editor.selected = None;
        update_hover(&mut state, Vec2::new(300.0, 0.0));

        let scene = build(&state);

        assert!(state.editor.hovered.is_some());
        assert!(!circle_colors(&scene).contains(&state.options.hover_color));
    }

    #[test]
    fn envelope_uses_texture_when_loaded() {
        let mut state = AppState::new();
        state
            .graph
            .set_road_texture(Arc::new(RoadTexture::new("road", 50, 25)));
        place_or_select_at(&mut state, Vec2::new(0.0, 0.0));
        place_or_select_at(&mut state, Vec2::new(120.0, 0.0));

        let scene = build(&state);
        let rect = scene
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Rect { texture, color, .. } => Some((texture.clone(), *color)),
                _ => None,
            })
            .expect("Envelope vorhanden");

        assert_eq!(
            rect.0,
            Some(TexturedFill {
                texture_name: "road".to_string(),
                repeat_count: 3
            })
        );
        assert_eq!(rect.1, TEXTURE_TINT);
    }
}
