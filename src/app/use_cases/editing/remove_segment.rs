//! Use-Case: Segment unter dem Zeiger präzise löschen.

use crate::app::AppState;
use glam::Vec2;

/// Entfernt das nächste Segment, wenn es näher als `max_distance` liegt.
///
/// Gibt `true` zurück, wenn ein Segment entfernt wurde.
pub fn remove_segment_near(state: &mut AppState, world_pos: Vec2, max_distance: f32) -> bool {
    let Some(hit) = state
        .graph
        .find_nearest_segment(world_pos)
        .filter(|hit| hit.distance < max_distance)
    else {
        log::debug!(
            "Kein Segment innerhalb {:.1} um ({:.1}, {:.1})",
            max_distance,
            world_pos.x,
            world_pos.y
        );
        return false;
    };
    state.graph.remove_segment_by_id(hit.segment_id).is_some()
}
