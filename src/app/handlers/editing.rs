//! Handler für Punkt/Segment-Editing.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointId;

/// Primär-Klick: einrasten oder neuen Punkt setzen.
pub fn place_or_select(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::editing::place_or_select_at(state, world_pos);
}

/// Selektiert einen Punkt und verbindet ihn mit der alten Selektion.
pub fn select_point(state: &mut AppState, point_id: PointId) {
    use_cases::editing::select_point(state, point_id);
}

/// Zieht den selektierten Punkt mit.
pub fn drag_selected(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::editing::drag_selected_to(state, world_pos);
}

/// Entfernt einen Punkt inklusive Segmenten.
pub fn remove_point(state: &mut AppState, point_id: PointId) {
    use_cases::editing::remove_point(state, point_id);
}

/// Entfernt das Segment nahe der Position.
pub fn remove_segment_near(state: &mut AppState, world_pos: glam::Vec2, max_distance: f32) {
    use_cases::editing::remove_segment_near(state, world_pos, max_distance);
}

/// Leert Graph und Editor-Zustand.
pub fn reset_graph(state: &mut AppState) {
    use_cases::editing::reset_graph(state);
}
