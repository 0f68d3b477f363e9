//! Use-Case: Zeigerposition und Hover-Punkt nachführen.

use crate::app::AppState;
use crate::core::{Graph, Point};
use crate::shared::SNAP_RADIUS;
use glam::Vec2;

/// Speichert die Zeigerposition und setzt `hovered` auf den Punkt unter
/// dem Zeiger, sonst auf den nächsten Punkt.
///
/// Abweichung von einer reinen `find_nearest_point`-Abfrage: die schließt
/// Abstand 0 aus und würde für einen exakt getroffenen Punkt dessen Nachbarn
/// liefern. Nach einem Drag liegt der Zeiger genau auf dem gezogenen Punkt,
/// daher ist dieser `hovered` und wird von Ctrl+Rechtsklick gelöscht.
pub fn update_hover(state: &mut AppState, world_pos: Vec2) {
    state.editor.pointer_world = world_pos;
    state.editor.hovered = state.graph.point_at(world_pos).map(|p| p.id).or_else(|| {
        state
            .graph
            .find_nearest_point(world_pos)
            .map(|hit| hit.point_id)
    });
}

/// Punkt, auf den ein Klick an `world_pos` einrasten würde (Abstand < `SNAP_RADIUS`).
pub fn snap_target(graph: &Graph, world_pos: Vec2) -> Option<&Point> {
    graph.point_at(world_pos).or_else(|| {
        graph
            .find_nearest_point(world_pos)
            .filter(|hit| hit.distance < SNAP_RADIUS)
            .and_then(|hit| graph.point(hit.point_id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_tracks_nearest_point_regardless_of_distance() {
        let mut state = AppState::new();
        let far = state.graph.try_add_point(Vec2::new(500.0, 0.0)).expect("neu");

        update_hover(&mut state, Vec2::ZERO);

        assert_eq!(state.editor.hovered, Some(far));
        assert_eq!(state.editor.pointer_world, Vec2::ZERO);
        assert!(snap_target(&state.graph, Vec2::ZERO).is_none());
    }

    #[test]
    fn snap_target_within_radius() {
        let mut state = AppState::new();
        let near = state.graph.try_add_point(Vec2::new(10.0, 0.0)).expect("neu");

        let target = snap_target(&state.graph, Vec2::ZERO).map(|p| p.id);

        assert_eq!(target, Some(near));
    }

    #[test]
    fn pointer_exactly_on_point_hovers_that_point() {
        let mut state = AppState::new();
        let under = state.graph.try_add_point(Vec2::new(5.0, 5.0)).expect("neu");
        state.graph.try_add_point(Vec2::new(8.0, 5.0)).expect("neu");

        update_hover(&mut state, Vec2::new(5.0, 5.0));

        assert_eq!(state.editor.hovered, Some(under));
        assert_eq!(
            snap_target(&state.graph, Vec2::new(5.0, 5.0)).map(|p| p.id),
            Some(under)
        );
    }

    #[test]
    fn hover_on_empty_graph_is_none() {
        let mut state = AppState::new();
        state.editor.hovered = Some(crate::core::PointId(3));

        update_hover(&mut state, Vec2::ONE);

        assert!(state.editor.hovered.is_none());
    }
}
