//! Use-Case: Punkt selektieren und mit der vorherigen Selektion verbinden.

use crate::app::AppState;
use crate::core::PointId;

/// Selektiert `point_id`.
///
/// Ist bereits ein anderer Punkt selektiert, wird zuerst ein Segment von
/// diesem zum neuen Punkt angelegt (Duplikate werden vom Graphen abgelehnt).
pub fn select_point(state: &mut AppState, point_id: PointId) {
    if state.graph.point(point_id).is_none() {
        log::warn!("Selektion ignoriert: Punkt {} existiert nicht", point_id);
        return;
    }

    if let Some(previous) = state.editor.selected {
        if previous != point_id {
            state.graph.try_add_segment(previous, point_id);
        }
    }
    state.editor.selected = Some(point_id);
    log::debug!("Punkt {} selektiert", point_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn select_connects_previous_selection() {
        let mut state = AppState::new();
        let a = state.graph.try_add_point(Vec2::ZERO).expect("neu");
        let b = state.graph.try_add_point(Vec2::new(50.0, 0.0)).expect("neu");

        select_point(&mut state, a);
        assert_eq!(state.graph.segment_count(), 0);

        select_point(&mut state, b);
        assert_eq!(state.editor.selected, Some(b));
        assert_eq!(state.graph.segment_count(), 1);
    }

    #[test]
    fn reselecting_same_point_adds_nothing() {
        let mut state = AppState::new();
        let a = state.graph.try_add_point(Vec2::ZERO).expect("neu");

        select_point(&mut state, a);
        select_point(&mut state, a);

        assert_eq!(state.graph.segment_count(), 0);
        assert_eq!(state.editor.selected, Some(a));
    }

    #[test]
    fn unknown_point_keeps_selection() {
        let mut state = AppState::new();
        let a = state.graph.try_add_point(Vec2::ZERO).expect("neu");
        select_point(&mut state, a);

        select_point(&mut state, PointId(999));

        assert_eq!(state.editor.selected, Some(a));
    }
}
