//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Graph, Editor, View).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, DeleteModifiers};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorPhase, EditorState, ViewState};
