use crate::app::AppState;

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    if let Some(previous) = state.editor.selected.take() {
        log::debug!("Selektion von {} aufgehoben", previous);
    }
}

/// Beendet einen laufenden Drag; die Selektion bleibt bestehen.
pub fn end_drag(state: &mut AppState) {
    state.editor.dragging = false;
}
