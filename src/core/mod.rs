//! Core-Domänentypen: Nodes, Segmente, Straßennetz, Weltgrenzen, Kamera, Spatial-Index.

pub mod camera;
pub mod error;
pub mod road_network;
pub mod road_node;
pub mod road_segment;
pub mod snapshot;
pub mod spatial;
pub mod world_bounds;

pub use camera::{Camera2D, ScreenToWorld, ViewportCamera};
pub use error::RoadNetworkError;
pub use road_network::{BoundaryEntryPoint, RoadNetwork, SegmentNear};
pub use road_node::{NodeId, NodeKind, RoadNode, SegmentId};
pub use road_segment::{RoadSegment, SegmentHit};
pub use snapshot::{NetworkSnapshot, NodeRecord, SegmentRecord};
pub use spatial::{SpatialIndex, SpatialMatch};
pub use world_bounds::{BoundarySide, WorldBounds};
