//! Edit-Modus: Auswahl, Griffe ziehen, Kontrollpunkte einfügen/löschen, Glättung.

use glam::Vec2;

use super::{DragSession, EditSelection, HandleRef, RoadTool, ToolState};
use crate::app::tools::{EventResponse, ToolEnv, ToolKey};
use crate::core::{NodeId, RoadNetwork, SegmentId};
use crate::shared::ControlPoint;

const HINT_EDIT: &str =
    "Straße anklicken zum Auswählen. Punkte ziehen zum Bearbeiten. Doppelklick fügt Punkt hinzu";
const HINT_SELECT: &str = "Straße anklicken zum Auswählen";
const HINT_SEGMENT: &str =
    "Straße ausgewählt. Kontrollpunkte anklicken zum Bearbeiten, Entf zum Löschen";
const HINT_NODE: &str = "Node ausgewählt. Ziehen zum Verschieben";
const HINT_INSERTED: &str = "Neuer Punkt eingefügt. Ziehen zum Verschieben, Mausrad zum Glätten";
const HINT_POINT_REMOVED: &str =
    "Punkt entfernt. Anderen Punkt wählen oder Entf zum Löschen der Straße";
const HINT_ROAD_DELETED: &str = "Straße gelöscht. Andere Straße anklicken zum Auswählen";
const HINT_SELECTION_CLEARED: &str = "Auswahl aufgehoben. Straße anklicken zum Auswählen";

/// Welt-Position eines Griffs.
pub(crate) fn handle_position(
    network: &RoadNetwork,
    segment_id: SegmentId,
    handle: HandleRef,
) -> Option<Vec2> {
    let segment = network.segment(segment_id)?;
    match handle {
        HandleRef::StartNode => network.node(segment.start_node_id).map(|n| n.position()),
        HandleRef::EndNode => network.node(segment.end_node_id).map(|n| n.position()),
        HandleRef::Control(i) => segment.control_points().get(i).map(ControlPoint::position),
    }
}

/// Node hinter einem Endpunkt-Griff.
fn handle_node(network: &RoadNetwork, segment_id: SegmentId, handle: HandleRef) -> Option<NodeId> {
    let segment = network.segment(segment_id)?;
    match handle {
        HandleRef::StartNode => Some(segment.start_node_id),
        HandleRef::EndNode => Some(segment.end_node_id),
        HandleRef::Control(_) => None,
    }
}

/// Erster Griff strikt innerhalb `radius`: Start, Ende, dann Kontrollpunkte.
pub(crate) fn find_handle_at(
    network: &RoadNetwork,
    segment_id: SegmentId,
    world: Vec2,
    radius: f32,
) -> Option<HandleRef> {
    let segment = network.segment(segment_id)?;
    let near = |pos: Vec2| pos.distance(world) < radius;

    if network
        .node(segment.start_node_id)
        .is_some_and(|n| near(n.position()))
    {
        return Some(HandleRef::StartNode);
    }
    if network
        .node(segment.end_node_id)
        .is_some_and(|n| near(n.position()))
    {
        return Some(HandleRef::EndNode);
    }
    segment
        .control_points()
        .iter()
        .position(|cp| near(cp.position()))
        .map(HandleRef::Control)
}

impl RoadTool {
    // ── Aktivierung ──

    /// `Inactive → Editing`.
    pub fn activate_edit_mode(&mut self, env: &mut ToolEnv) {
        if self.state != ToolState::Inactive {
            return;
        }

        self.state = ToolState::Editing(EditSelection::Nothing);
        env.renderer.highlight_all_roads(true);
        env.ui.set_edit_mode();
        env.ui.show_hint(HINT_EDIT);
        log::info!("Edit-Modus aktiviert");
    }

    /// `Editing/EditingDragging → Inactive`.
    pub fn deactivate_edit_mode(&mut self, env: &mut ToolEnv) {
        if !self.is_edit_mode() {
            return;
        }

        self.state = ToolState::Inactive;
        self.cursor_world = None;
        env.renderer.highlight_all_roads(false);
        env.renderer.clear_edit_handles();
        env.ui.set_inactive();
        env.ui.hide_hint();
        log::info!("Edit-Modus deaktiviert");
    }

    /// Auswahl setzen und Griffe passend zeichnen.
    fn select(&mut self, selection: EditSelection, env: &mut ToolEnv) {
        self.state = ToolState::Editing(selection);
        match selection.segment().and_then(|id| env.network.segment(id)) {
            Some(segment) => {
                env.renderer
                    .render_edit_handles(segment, env.network, selection.handle())
            }
            None => env.renderer.clear_edit_handles(),
        }
    }

    /// Netz neu zeichnen, Straßen hervorheben und Griffe aktualisieren.
    fn redraw_edit(&self, segment_id: SegmentId, selected: Option<HandleRef>, env: &mut ToolEnv) {
        env.renderer.render(env.network);
        env.renderer.highlight_all_roads(true);
        match env.network.segment(segment_id) {
            Some(segment) => env
                .renderer
                .render_edit_handles(segment, env.network, selected),
            None => env.renderer.clear_edit_handles(),
        }
    }

    // ── Maus ──

    pub(super) fn on_editing_pointer_down(&mut self, world: Vec2, env: &mut ToolEnv) {
        let ToolState::Editing(mut selection) = self.state else {
            return;
        };
        let radius = self.options.handle_pick_radius;

        if let Some(segment_id) = selection.segment() {
            if !env.network.contains_segment(segment_id) {
                log::warn!("Ausgewähltes Segment {} existiert nicht mehr", segment_id);
                selection = EditSelection::Nothing;
            }
        }

        // Erneuter Treffer auf den gewählten Griff → Drag
        if let EditSelection::Handle(segment_id, handle) = selection {
            if find_handle_at(env.network, segment_id, world, radius) == Some(handle) {
                if let Some(pos) = handle_position(env.network, segment_id, handle) {
                    let boundary_side = handle_node(env.network, segment_id, handle)
                        .and_then(|id| env.network.node(id))
                        .filter(|n| n.is_boundary())
                        .map(|n| self.bounds.nearest_side(n.position()).0);
                    self.state = ToolState::EditingDragging(DragSession {
                        segment: segment_id,
                        handle,
                        offset: world - pos,
                        boundary_side,
                    });
                    log::debug!("Drag gestartet: Segment {} {:?}", segment_id, handle);
                    return;
                }
            }
        }

        // Griff des gewählten Segments → nur Auswahl ändern
        if let Some(segment_id) = selection.segment() {
            if let Some(handle) = find_handle_at(env.network, segment_id, world, radius) {
                self.select(EditSelection::Handle(segment_id, handle), env);
                let hint = match handle {
                    HandleRef::Control(i) => {
                        let smoothing = env
                            .network
                            .segment(segment_id)
                            .and_then(|s| s.control_points().get(i))
                            .map_or(0.0, |cp| cp.smoothing);
                        format!(
                            "Punkt ausgewählt. Ziehen zum Verschieben, Mausrad zum Glätten ({}%)",
                            (smoothing * 100.0).round()
                        )
                    }
                    _ => HINT_NODE.to_string(),
                };
                env.ui.show_hint(&hint);
                return;
            }
        }

        // Segment in Reichweite → auswählen
        if let Some(near) = env
            .network
            .find_segment_near(world, self.options.edit_segment_pick_radius)
        {
            self.select(EditSelection::Segment(near.segment_id), env);
            env.ui.show_hint(HINT_SEGMENT);
            return;
        }

        self.select(EditSelection::Nothing, env);
        env.ui.show_hint(HINT_SELECT);
    }

    pub(super) fn on_editing_move(&mut self, world: Vec2, env: &mut ToolEnv) {
        let ToolState::Editing(selection) = self.state else {
            return;
        };
        let Some(segment_id) = selection.segment() else {
            return;
        };
        let Some(segment) = env.network.segment(segment_id) else {
            return;
        };
        let hovered = find_handle_at(
            env.network,
            segment_id,
            world,
            self.options.handle_pick_radius,
        );
        env.renderer
            .render_edit_handles(segment, env.network, hovered.or(selection.handle()));
    }

    pub(super) fn on_drag_move(&mut self, world: Vec2, env: &mut ToolEnv) {
        let ToolState::EditingDragging(drag) = self.state else {
            return;
        };

        let mut target = self.bounds.clamp_point(world - drag.offset);
        if let Some(side) = drag.boundary_side {
            target = self.bounds.project_onto_side(target, side);
        }

        let result = match handle_node(env.network, drag.segment, drag.handle) {
            Some(node_id) => env.network.move_node(node_id, target),
            None => match drag.handle {
                HandleRef::Control(i) => env.network.move_control_point(drag.segment, i, target),
                _ => Ok(()),
            },
        };
        if let Err(e) = result {
            log::warn!("Griff konnte nicht verschoben werden: {}", e);
            return;
        }

        self.redraw_edit(drag.segment, Some(drag.handle), env);
    }

    pub(super) fn on_pointer_up(&mut self) {
        if let ToolState::EditingDragging(drag) = self.state {
            self.state = ToolState::Editing(EditSelection::Handle(drag.segment, drag.handle));
            log::debug!("Drag beendet: Segment {}", drag.segment);
        }
    }

    /// Fügt einen Kontrollpunkt an der nächsten Kurvenposition ein.
    pub(super) fn on_editing_double_click(&mut self, world: Vec2, env: &mut ToolEnv) {
        let ToolState::Editing(selection) = self.state else {
            return;
        };

        let segment_id = match selection.segment() {
            Some(id) if env.network.contains_segment(id) => id,
            _ => match env
                .network
                .find_segment_near(world, self.options.edit_segment_pick_radius)
            {
                Some(near) => near.segment_id,
                None => return,
            },
        };

        let Some(hit) = env
            .network
            .segment(segment_id)
            .and_then(|s| s.closest_point(world))
        else {
            return;
        };
        if hit.distance > self.options.insert_max_distance {
            return;
        }

        let index = hit.curve_index;
        if let Err(e) =
            env.network
                .insert_control_point(segment_id, index, ControlPoint::sharp(hit.point))
        {
            log::warn!("Kontrollpunkt konnte nicht eingefügt werden: {}", e);
            return;
        }

        let handle = HandleRef::Control(index);
        self.state = ToolState::Editing(EditSelection::Handle(segment_id, handle));
        self.redraw_edit(segment_id, Some(handle), env);
        env.ui.show_hint(HINT_INSERTED);
    }

    // ── Mausrad ──

    /// Glättung des gewählten Kontrollpunkts anpassen. Nur in genau diesem
    /// Unterzustand verbraucht, sonst darf die Kamera zoomen.
    pub(super) fn on_wheel(&mut self, delta_y: f32, env: &mut ToolEnv) -> EventResponse {
        let ToolState::Editing(EditSelection::Handle(segment_id, HandleRef::Control(index))) =
            self.state
        else {
            return EventResponse::Ignored;
        };
        let Some(current) = env
            .network
            .segment(segment_id)
            .and_then(|s| s.control_points().get(index))
            .map(|cp| cp.smoothing)
        else {
            return EventResponse::Ignored;
        };

        let direction = if delta_y > 0.0 {
            -1.0
        } else if delta_y < 0.0 {
            1.0
        } else {
            0.0
        };
        let requested = current + direction * self.options.smoothing_step;

        match env
            .network
            .set_control_point_smoothing(segment_id, index, requested)
        {
            Ok(smoothing) => {
                self.redraw_edit(segment_id, Some(HandleRef::Control(index)), env);
                env.ui
                    .show_hint(&format!("Glättung: {}%", (smoothing * 100.0).round()));
            }
            Err(e) => log::warn!("Glättung konnte nicht gesetzt werden: {}", e),
        }
        EventResponse::Consumed
    }

    // ── Tastatur ──

    pub(super) fn on_edit_key(&mut self, key: ToolKey, env: &mut ToolEnv) {
        let ToolState::Editing(selection) = self.state else {
            // Während eines Drags keine Tastatur-Aktionen
            return;
        };

        match key {
            ToolKey::Delete | ToolKey::Backspace => self.delete_selection(selection, env),
            ToolKey::Escape => match selection {
                EditSelection::Handle(segment_id, _) => {
                    self.select(EditSelection::Segment(segment_id), env);
                    env.ui.show_hint(HINT_SEGMENT);
                }
                EditSelection::Segment(_) => {
                    self.select(EditSelection::Nothing, env);
                    env.ui.show_hint(HINT_SELECTION_CLEARED);
                }
                EditSelection::Nothing => self.deactivate_edit_mode(env),
            },
            ToolKey::Enter => {}
        }
    }

    /// Entf: gewählten Kontrollpunkt löschen, sonst das ganze Segment.
    fn delete_selection(&mut self, selection: EditSelection, env: &mut ToolEnv) {
        match selection {
            EditSelection::Nothing => {}
            EditSelection::Handle(segment_id, HandleRef::Control(index)) => {
                if let Err(e) = env.network.remove_control_point(segment_id, index) {
                    log::warn!("Kontrollpunkt konnte nicht gelöscht werden: {}", e);
                    return;
                }
                self.state = ToolState::Editing(EditSelection::Segment(segment_id));
                self.redraw_edit(segment_id, None, env);
                env.ui.show_hint(HINT_POINT_REMOVED);
            }
            EditSelection::Segment(segment_id) | EditSelection::Handle(segment_id, _) => {
                env.network.remove_segment(segment_id);
                self.state = ToolState::Editing(EditSelection::Nothing);
                env.renderer.render(env.network);
                env.renderer.highlight_all_roads(true);
                env.renderer.clear_edit_handles();
                env.ui.show_hint(HINT_ROAD_DELETED);
                log::info!("Straße {} gelöscht", segment_id);
            }
        }
    }
}
