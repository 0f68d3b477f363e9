//! Use-Case: Punkt inklusive angeschlossener Segmente löschen.

use crate::app::AppState;
use crate::core::PointId;

/// Entfernt `point_id` samt Segmenten und Envelopes und invalidiert Selektion/Hover.
pub fn remove_point(state: &mut AppState, point_id: PointId) {
    if state.graph.remove_point(point_id).is_none() {
        log::warn!("Punkt {} nicht gefunden, nichts entfernt", point_id);
    }
    state.editor.forget_point(point_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn removing_hovered_point_clears_handles() {
        let mut state = AppState::new();
        let a = state.graph.try_add_point(Vec2::ZERO).expect("neu");
        let b = state.graph.try_add_point(Vec2::new(40.0, 0.0)).expect("neu");
        state.graph.try_add_segment(a, b);
        state.editor.selected = Some(b);
        state.editor.hovered = Some(b);

        remove_point(&mut state, b);

        assert_eq!(state.graph.point_count(), 1);
        assert_eq!(state.graph.segment_count(), 0);
        assert_eq!(state.graph.envelopes().count(), 0);
        assert!(state.editor.selected.is_none());
        assert!(state.editor.hovered.is_none());
    }
}
