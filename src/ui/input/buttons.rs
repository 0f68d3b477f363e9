//! Zeigerbewegung und Maustasten: Drücken setzt/selektiert/löscht, Loslassen beendet Drags.

use super::{screen_pos_to_world, InputState, ViewportContext};
use crate::app::{AppIntent, DeleteModifiers};

/// Übersetzt die Modifier eines Sekundär-Klicks.
///
/// Shift löscht präzise das nächste Segment, Ctrl (Cmd auf macOS) den Punkt
/// unter dem Zeiger.
pub(crate) fn delete_modifiers(modifiers: egui::Modifiers) -> DeleteModifiers {
    DeleteModifiers {
        precise_delete: modifiers.shift,
        remove_point: modifiers.command,
    }
}

impl InputState {
    /// Verarbeitet Roh-Events des Zeigers in Eingangsreihenfolge.
    pub(crate) fn handle_pointer_events(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let raw_events = ctx.ui.input(|i| i.events.clone());
        let rect = ctx.response.rect;

        for event in raw_events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    let world_pos =
                        screen_pos_to_world(pos, ctx.response, ctx.viewport_size, ctx.camera);
                    events.push(AppIntent::PointerMoved { world_pos });
                }
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    modifiers,
                    ..
                } if rect.contains(pos) => {
                    let world_pos =
                        screen_pos_to_world(pos, ctx.response, ctx.viewport_size, ctx.camera);
                    match button {
                        egui::PointerButton::Primary => {
                            events.push(AppIntent::PrimaryPressed { world_pos });
                        }
                        egui::PointerButton::Secondary => {
                            events.push(AppIntent::SecondaryPressed {
                                world_pos,
                                modifiers: delete_modifiers(modifiers),
                            });
                        }
                        _ => {}
                    }
                }
                egui::Event::PointerButton { pressed: false, .. } => {
                    events.push(AppIntent::ButtonReleased);
                }
                _ => {}
            }
        }
    }
}
