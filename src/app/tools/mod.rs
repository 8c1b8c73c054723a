//! Interaktive Werkzeuge und ihre Kollaborator-Schnittstellen.
//!
//! Das Straßen-Tool konsumiert `ToolEvent`s und arbeitet gegen drei
//! Kollaboratoren: einen Renderer (`RoadRenderer`), eine UI-Schale
//! (`RoadToolUi`) und eine Kamera (`ScreenToWorld`). Alle drei werden pro
//! Event über `ToolEnv` geliehen, das Tool selbst hält keine Referenzen.

/// Straßen-Tool: Zeichnen (Create-Modus) und Bearbeiten (Edit-Modus).
pub mod road_tool;

pub use crate::core::ScreenToWorld;
pub use road_tool::{
    DragSession, DrawingSession, EditSelection, FinishOutcome, HandleRef, PendingFinish,
    RoadTool, SnapTarget, ToolState,
};

use crate::core::{BoundaryEntryPoint, RoadNetwork, RoadSegment};
use crate::shared::ControlPoint;
use glam::Vec2;

// ── Kollaboratoren ───────────────────────────────────────────────

/// Zeichnet Netz, Vorschau und Overlays. Liest das Netz nur.
pub trait RoadRenderer {
    /// Zeichnet das gesamte Netz neu.
    fn render(&mut self, network: &RoadNetwork);
    /// Vorschau der im Bau befindlichen Straße (optional bis zum Cursor).
    fn render_preview(&mut self, points: &[ControlPoint], cursor: Option<Vec2>, draft_mode: bool);
    fn clear_preview(&mut self);
    fn render_entry_points(&mut self, points: &[BoundaryEntryPoint]);
    fn clear_entry_points(&mut self);
    fn render_snap_indicator(&mut self, pos: Vec2);
    fn clear_snap_indicator(&mut self);
    fn highlight_entry_point(&mut self, pos: Vec2);
    fn clear_entry_highlight(&mut self);
    fn highlight_all_roads(&mut self, enabled: bool);
    /// Griffe (Endpunkte + Kontrollpunkte) eines Segments, `selected` hervorgehoben.
    fn render_edit_handles(
        &mut self,
        segment: &RoadSegment,
        network: &RoadNetwork,
        selected: Option<HandleRef>,
    );
    fn clear_edit_handles(&mut self);
}

/// UI-Schale: Hinweise, Modus-Anzeige und Sackgassen-Bestätigung.
pub trait RoadToolUi {
    fn show_hint(&mut self, text: &str);
    fn hide_hint(&mut self);
    /// Öffnet den Bestätigungsdialog. Die Antwort kommt später über
    /// `RoadTool::resolve_dead_end` zurück.
    fn request_dead_end_confirm(&mut self);
    fn set_active(&mut self);
    fn set_inactive(&mut self);
    fn set_edit_mode(&mut self);
}

/// Für genau ein Event geliehene Umgebung des Tools.
pub struct ToolEnv<'a> {
    pub network: &'a mut RoadNetwork,
    pub renderer: &'a mut dyn RoadRenderer,
    pub ui: &'a mut dyn RoadToolUi,
    pub camera: &'a dyn ScreenToWorld,
}

// ── Events ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKey {
    Escape,
    Enter,
    Delete,
    Backspace,
}

/// Eingabe-Event in Viewport-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolEvent {
    PointerDown { screen: Vec2, button: PointerButton },
    PointerMove { screen: Vec2 },
    PointerUp { screen: Vec2 },
    DoubleClick { screen: Vec2 },
    Key(ToolKey),
    Wheel { screen: Vec2, delta_y: f32 },
}

/// Hat das Tool das Event verbraucht? `Ignored` darf der Aufrufer weiterreichen
/// (z.B. Mausrad an die Kamera).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Consumed,
    Ignored,
}

impl EventResponse {
    pub fn is_consumed(self) -> bool {
        self == EventResponse::Consumed
    }
}
