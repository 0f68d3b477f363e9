//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::SNAP_RADIUS;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerMoved { world_pos } => {
            let mut commands = Vec::with_capacity(2);
            if state.editor.dragging && state.editor.selected.is_some() {
                commands.push(AppCommand::DragSelectedTo { world_pos });
            }
            commands.push(AppCommand::UpdateHover { world_pos });
            commands
        }
        AppIntent::PrimaryPressed { world_pos } => vec![AppCommand::PlaceOrSelectAt { world_pos }],
        AppIntent::SecondaryPressed {
            world_pos,
            modifiers,
        } => {
            let mut commands = Vec::with_capacity(3);
            if modifiers.precise_delete {
                commands.push(AppCommand::RemoveSegmentNear {
                    world_pos,
                    max_distance: SNAP_RADIUS,
                });
            }
            commands.push(AppCommand::ClearSelection);
            if modifiers.remove_point {
                if let Some(point_id) = state.editor.hovered {
                    commands.push(AppCommand::RemovePoint { point_id });
                }
            }
            commands
        }
        AppIntent::ButtonReleased => vec![AppCommand::EndDrag],
        AppIntent::SelectPointRequested { point_id } => {
            vec![AppCommand::SelectPoint { point_id }]
        }
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ResetGraphRequested => vec![AppCommand::ResetGraph],
        AppIntent::SaveRequested => vec![AppCommand::SaveGraph],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
