//! Use-Case: Graph und Editor-Zustand zurücksetzen (Reset-Button).

use crate::app::AppState;

/// Leert den Graphen und setzt Selektion, Hover und Drag zurück.
pub fn reset_graph(state: &mut AppState) {
    let points = state.graph.point_count();
    let segments = state.graph.segment_count();
    state.graph.clear();
    state.editor.reset();
    log::info!(
        "Graph zurückgesetzt ({} Punkte, {} Segmente verworfen)",
        points,
        segments
    );
}
