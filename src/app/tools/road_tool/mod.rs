//! Straßen-Tool: Zustandsmaschine für Zeichnen und Bearbeiten von Straßen.
//!
//! **Create-Modus:** `Inactive → Idle ⇄ Drawing`. Start an einem Einstiegspunkt,
//! Node oder Segment (Verzweigung), Punkte per Klick, Abschluss per Fangziel,
//! Doppelklick oder Enter.
//!
//! **Edit-Modus:** `Inactive → Editing ⇄ EditingDragging`. Segment wählen,
//! Griffe ziehen, Kontrollpunkte per Doppelklick einfügen, Glättung per Mausrad.
//!
//! Solange eine Sackgassen-Bestätigung offen ist, werden alle Eingaben ignoriert.

mod draw;
mod edit;
mod snap;
mod state;

pub use state::{
    DragSession, DrawingSession, EditSelection, FinishOutcome, HandleRef, PendingFinish,
    SnapTarget, ToolState,
};

use super::{EventResponse, PointerButton, ToolEnv, ToolEvent};
use crate::core::{BoundaryEntryPoint, RoadNetwork, WorldBounds};
use crate::shared::RoadToolOptions;
use glam::Vec2;

/// Das Straßen-Tool. Hält nur flüchtigen Interaktionszustand.
#[derive(Debug, Clone)]
pub struct RoadTool {
    state: ToolState,
    bounds: WorldBounds,
    options: RoadToolOptions,
    /// Aktuell angebotene Einstiegspunkte (nur im Create-Modus gefüllt)
    entry_points: Vec<BoundaryEntryPoint>,
    /// Letzte Cursor-Position in Weltkoordinaten
    cursor_world: Option<Vec2>,
    draft_mode: bool,
}

impl RoadTool {
    pub fn new(bounds: WorldBounds, options: RoadToolOptions) -> Self {
        Self {
            state: ToolState::Inactive,
            bounds,
            draft_mode: options.draft_mode,
            options,
            entry_points: Vec::new(),
            cursor_world: None,
        }
    }

    // ── Abfragen ──

    pub fn state(&self) -> &ToolState {
        &self.state
    }

    pub fn bounds(&self) -> &WorldBounds {
        &self.bounds
    }

    pub fn options(&self) -> &RoadToolOptions {
        &self.options
    }

    /// Create-Modus aktiv (Idle oder Drawing)?
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Idle | ToolState::Drawing(_))
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, ToolState::Drawing(_))
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(
            self.state,
            ToolState::Editing(_) | ToolState::EditingDragging(_)
        )
    }

    /// Wartet das Tool auf die Sackgassen-Bestätigung?
    pub fn is_dead_end_pending(&self) -> bool {
        matches!(&self.state, ToolState::Drawing(s) if s.pending.is_some())
    }

    pub fn entry_points(&self) -> &[BoundaryEntryPoint] {
        &self.entry_points
    }

    /// Aktuelle Auswahl im Edit-Modus (auch während eines Drags).
    pub fn selection(&self) -> EditSelection {
        match self.state {
            ToolState::Editing(selection) => selection,
            ToolState::EditingDragging(drag) => EditSelection::Handle(drag.segment, drag.handle),
            _ => EditSelection::Nothing,
        }
    }

    pub fn draft_mode(&self) -> bool {
        self.draft_mode
    }

    /// Schaltet zwischen Polyline- und Kurven-Vorschau um.
    pub fn toggle_draft_mode(&mut self, env: &mut ToolEnv) -> bool {
        self.draft_mode = !self.draft_mode;
        if let ToolState::Drawing(session) = &self.state {
            env.renderer
                .render_preview(&session.points, self.cursor_world, self.draft_mode);
        }
        log::debug!("Entwurfsmodus: {}", self.draft_mode);
        self.draft_mode
    }

    // ── Event-Dispatch ──

    /// Verarbeitet ein Eingabe-Event.
    pub fn handle_event(&mut self, event: ToolEvent, env: &mut ToolEnv) -> EventResponse {
        if self.state == ToolState::Inactive || self.is_dead_end_pending() {
            return EventResponse::Ignored;
        }

        match event {
            ToolEvent::PointerDown { screen, button } => {
                if button != PointerButton::Primary {
                    return EventResponse::Ignored;
                }
                let world = env.camera.screen_to_world(screen);
                match self.state {
                    ToolState::Idle => self.on_idle_click(world, env),
                    ToolState::Drawing(_) => self.on_drawing_click(world, env),
                    ToolState::Editing(_) => self.on_editing_pointer_down(world, env),
                    _ => {}
                }
                EventResponse::Consumed
            }
            ToolEvent::PointerMove { screen } => {
                let world = env.camera.screen_to_world(screen);
                self.cursor_world = Some(world);
                match self.state {
                    ToolState::Idle => self.on_idle_move(world, env),
                    ToolState::Drawing(_) => self.on_drawing_move(world, env),
                    ToolState::Editing(_) => self.on_editing_move(world, env),
                    ToolState::EditingDragging(_) => self.on_drag_move(world, env),
                    ToolState::Inactive => {}
                }
                EventResponse::Consumed
            }
            ToolEvent::PointerUp { .. } => {
                if !self.is_edit_mode() {
                    return EventResponse::Ignored;
                }
                self.on_pointer_up();
                EventResponse::Consumed
            }
            ToolEvent::DoubleClick { screen } => {
                let world = env.camera.screen_to_world(screen);
                match self.state {
                    ToolState::Drawing(_) => {
                        let clamped = self.bounds.clamp_point(world);
                        self.finish_drawing(clamped, None, env);
                    }
                    ToolState::Editing(_) => self.on_editing_double_click(world, env),
                    _ => {}
                }
                EventResponse::Consumed
            }
            ToolEvent::Key(key) => {
                if self.is_active() {
                    self.on_create_key(key, env);
                } else {
                    self.on_edit_key(key, env);
                }
                EventResponse::Consumed
            }
            ToolEvent::Wheel { delta_y, .. } => self.on_wheel(delta_y, env),
        }
    }

    // ── Netz-Hilfen ──

    pub(crate) fn regenerate_entry_points(&mut self, network: &RoadNetwork) {
        self.entry_points =
            network.generate_boundary_entry_points(&self.bounds, self.options.entry_point_spacing);
    }
}
