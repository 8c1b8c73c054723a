//! Rendering-Puffer für das Straßennetz.
//!
//! Der `DrawList` ist der `RoadRenderer` der Anwendung: er hält nur
//! Geometrie, gezeichnet wird in `ui::viewport`.

mod draw_list;

pub use draw_list::{DrawList, EditHandles, HandleMarker, NodeMarker, PreviewShape, RoadShape};
