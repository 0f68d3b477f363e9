//! Handler für Datei-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Save-Button.
pub fn save(state: &mut AppState) {
    use_cases::file_io::save_graph(state);
}
