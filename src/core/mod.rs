//! Core-Domänentypen: Geometrie, Punkte, Segmente, Envelopes, Graph, Kamera.

pub mod bounds;
pub mod camera;
pub mod envelope;
pub mod geometry;
pub mod graph;
pub mod point;
pub mod segment;

pub use bounds::GraphBounds;
pub use camera::Camera2D;
pub use envelope::{Envelope, OrientedRect, RoadTexture, TextureTiling};
pub use graph::{Graph, PointMatch, Road, RoadStyle, SegmentMatch};
pub use point::{Point, PointId};
pub use segment::{Segment, SegmentId};
