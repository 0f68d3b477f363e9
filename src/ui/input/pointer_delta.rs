//! Pointer-Delta-Verarbeitung: Kamera-Pan per Mittel-Drag.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verschiebt die Kamera entgegen der Mausbewegung, solange die mittlere Taste zieht.
    pub(crate) fn handle_pointer_delta(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.dragged_by(egui::PointerButton::Middle) {
            return;
        }

        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let wpp = ctx.camera.world_per_pixel();
        events.push(AppIntent::CameraPan {
            delta: glam::Vec2::new(-pointer_delta.x * wpp, -pointer_delta.y * wpp),
        });
    }
}
