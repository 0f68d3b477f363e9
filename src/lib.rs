//! Spatial Graph Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DeleteModifiers, EditorPhase, EditorState,
    ViewState,
};
pub use core::{
    Camera2D, Envelope, Graph, GraphBounds, OrientedRect, Point, PointId, PointMatch, Road,
    RoadStyle, RoadTexture, Segment, SegmentId, SegmentMatch, TextureTiling,
};
pub use shared::{EditorOptions, RenderScene};
