//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditorPhase};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Punkte: {} | Segmente: {}",
                state.point_count(),
                state.segment_count()
            ));

            ui.separator();

            let phase = match state.editor.phase() {
                EditorPhase::Idle => "Bereit",
                EditorPhase::PointSelected => "Punkt selektiert",
                EditorPhase::Dragging => "Verschieben",
            };
            match state.editor.selected {
                Some(id) => ui.label(format!("{} ({})", phase, id)),
                None => ui.label(phase),
            };

            ui.separator();

            let pointer = state.editor.pointer_world;
            ui.label(format!(
                "Zoom: {:.2}x | Zeiger: ({:.1}, {:.1})",
                state.view.camera.zoom, pointer.x, pointer.y
            ));

            if let Some(message) = &state.status_message {
                ui.separator();
                ui.label(message);
            }
        });
    });
}
