//! Handler für Hover, Selektion und Drag-Ende.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert Zeigerposition und Hover-Punkt.
pub fn update_hover(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::selection::update_hover(state, world_pos);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}
