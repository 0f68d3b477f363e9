//! Use-Case-Funktionen für Datei-Operationen.

use crate::app::AppState;

/// Save-Button: Persistenz des Graphen wird nicht unterstützt.
///
/// Hinterlässt nur eine Statusmeldung, der Graph bleibt unverändert.
pub fn save_graph(state: &mut AppState) {
    log::warn!(
        "Speichern nicht unterstützt ({} Punkte, {} Segmente bleiben nur im Speicher)",
        state.graph.point_count(),
        state.graph.segment_count()
    );
    state.status_message = Some("Speichern wird nicht unterstützt".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn save_leaves_graph_untouched() {
        let mut state = AppState::new();
        state.graph.try_add_point(Vec2::ZERO);

        save_graph(&mut state);

        assert_eq!(state.graph.point_count(), 1);
        assert!(state.status_message.is_some());
    }
}
