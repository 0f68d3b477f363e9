//! Use-Case-Funktionen für Selektion, Hover und Drag-Lebenszyklus.
//!
//! - `hover` — Zeiger nachführen, Hover-Punkt und Snap-Ziel bestimmen
//! - `clear` — Selektion aufheben, Drag beenden

mod clear;
mod hover;

pub use clear::{clear_selection, end_drag};
pub use hover::{snap_target, update_hover};
