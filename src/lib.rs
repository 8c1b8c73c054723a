//! Road Network Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::tools::{
    EventResponse, FinishOutcome, RoadRenderer, RoadTool, RoadToolUi, ToolEnv, ToolEvent,
    ToolState,
};
pub use app::{AppController, AppIntent, AppState, ToolMode, UiState, ViewState};
pub use core::{
    BoundaryEntryPoint, BoundarySide, Camera2D, NodeId, NodeKind, RoadNetwork, RoadNetworkError,
    RoadNode, RoadSegment, SegmentId, SpatialIndex, WorldBounds,
};
pub use render::DrawList;
pub use shared::{ControlPoint, CubicBezier, EditorOptions, RoadToolOptions};
