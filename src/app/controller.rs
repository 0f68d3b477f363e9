//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::DragSelectedTo { world_pos } => {
                handlers::editing::drag_selected(state, world_pos)
            }
            AppCommand::PlaceOrSelectAt { world_pos } => {
                handlers::editing::place_or_select(state, world_pos)
            }
            AppCommand::SelectPoint { point_id } => handlers::editing::select_point(state, point_id),
            AppCommand::RemoveSegmentNear {
                world_pos,
                max_distance,
            } => handlers::editing::remove_segment_near(state, world_pos, max_distance),
            AppCommand::RemovePoint { point_id } => handlers::editing::remove_point(state, point_id),
            AppCommand::ResetGraph => handlers::editing::reset_graph(state),

            // === Selektion & Zeiger ===
            AppCommand::UpdateHover { world_pos } => {
                handlers::selection::update_hover(state, world_pos)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::EndDrag => handlers::selection::end_drag(state),

            // === Kamera & Viewport ===
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),

            // === Datei & Anwendung ===
            AppCommand::SaveGraph => handlers::file_io::save(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
