//! Toolbar mit den Graph-Aktionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .button("Reset")
                .on_hover_text("Alle Punkte und Segmente entfernen")
                .clicked()
            {
                events.push(AppIntent::ResetGraphRequested);
            }

            if ui.button("Save").clicked() {
                events.push(AppIntent::SaveRequested);
            }

            ui.separator();

            if ui
                .add_enabled(
                    state.view.camera.position != glam::Vec2::ZERO
                        || state.view.camera.zoom != 1.0,
                    egui::Button::new("Ansicht zurücksetzen"),
                )
                .clicked()
            {
                events.push(AppIntent::ResetCameraRequested);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });
    });

    events
}
