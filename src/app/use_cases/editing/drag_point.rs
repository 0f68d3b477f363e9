//! Use-Case: Selektierten Punkt ziehen.

use crate::app::AppState;
use glam::Vec2;

/// Verschiebt den selektierten Punkt, sofern ein Drag aktiv ist.
///
/// Angeschlossene Segmente und ihre Envelopes folgen dem Punkt.
pub fn drag_selected_to(state: &mut AppState, world_pos: Vec2) {
    if !state.editor.dragging {
        return;
    }
    let Some(selected) = state.editor.selected else {
        return;
    };
    if !state.graph.move_point(selected, world_pos) {
        log::debug!("Drag von {} nicht anwendbar", selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::editing::place_or_select_at;

    #[test]
    fn drag_moves_point_and_connected_envelope() {
        let mut state = AppState::new();
        place_or_select_at(&mut state, Vec2::new(0.0, 0.0));
        place_or_select_at(&mut state, Vec2::new(100.0, 0.0));
        let moved = state.editor.selected.expect("selektiert");

        drag_selected_to(&mut state, Vec2::new(100.0, 60.0));

        assert_eq!(
            state.graph.point(moved).map(|p| p.position),
            Some(Vec2::new(100.0, 60.0))
        );
        let envelope = state.graph.envelopes().next().expect("Envelope vorhanden");
        assert_eq!(envelope.shape().center, Vec2::new(50.0, 30.0));
    }

    #[test]
    fn drag_without_active_drag_is_ignored() {
        let mut state = AppState::new();
        place_or_select_at(&mut state, Vec2::new(0.0, 0.0));
        state.editor.dragging = false;

        drag_selected_to(&mut state, Vec2::new(50.0, 50.0));

        assert!(state.graph.contains_point(Vec2::ZERO));
    }
}
