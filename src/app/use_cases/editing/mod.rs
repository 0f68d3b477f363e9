//! Use-Case-Funktionen für Punkt/Segment-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `place_point` — Primär-Klick: einrasten oder neuen Punkt setzen
//! - `select_point` — Punkt selektieren (mit Auto-Connect)
//! - `drag_point` — Selektierten Punkt ziehen
//! - `remove_point` — Punkt mit angeschlossenen Segmenten löschen
//! - `remove_segment` — Segment präzise löschen
//! - `reset_graph` — Alles leeren

mod drag_point;
mod place_point;
mod remove_point;
mod remove_segment;
mod reset_graph;
mod select_point;

pub use drag_point::drag_selected_to;
pub use place_point::place_or_select_at;
pub use remove_point::remove_point;
pub use remove_segment::remove_segment_near;
pub use reset_graph::reset_graph;
pub use select_point::select_point;
