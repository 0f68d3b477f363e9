//! Use-Case: Primär-Klick auf die Zeichenfläche.

use super::select_point;
use crate::app::AppState;
use crate::shared::SNAP_RADIUS;
use glam::Vec2;

/// Rastet auf einen Punkt innerhalb des Snap-Radius ein oder setzt einen neuen Punkt.
///
/// - Liegt `world_pos` exakt auf einem Punkt, wird dieser selektiert.
/// - Liegt ein Punkt näher als `SNAP_RADIUS`, wird dieser selektiert.
/// - Sonst wird ein neuer Punkt angelegt und selektiert.
///
/// In allen Fällen wird eine bestehende Selektion mit dem Ziel verbunden,
/// der Drag beginnt und die Bounding Box wird um `world_pos` erweitert.
pub fn place_or_select_at(state: &mut AppState, world_pos: Vec2) {
    let target = state
        .graph
        .point_at(world_pos)
        .map(|p| p.id)
        .or_else(|| {
            state
                .graph
                .find_nearest_point(world_pos)
                .filter(|hit| hit.distance < SNAP_RADIUS)
                .map(|hit| hit.point_id)
        });

    match target {
        Some(point_id) => select_point(state, point_id),
        None => match state.graph.try_add_point(world_pos) {
            Some(point_id) => {
                log::info!(
                    "Neuer Punkt {} bei ({:.1}, {:.1})",
                    point_id,
                    world_pos.x,
                    world_pos.y
                );
                select_point(state, point_id);
            }
            None => log::warn!("Punkt bei ({:.1}, {:.1}) abgelehnt", world_pos.x, world_pos.y),
        },
    }

    state.editor.dragging = true;
    state.graph.update_boundary(world_pos);
}
