//! Create-Modus: Aktivierung, Startpunkt, Zeichnen, Abschluss und Abbruch.

use glam::Vec2;

use super::{DrawingSession, FinishOutcome, PendingFinish, RoadTool, SnapTarget, ToolState};
use crate::app::tools::{ToolEnv, ToolKey};
use crate::core::{NodeId, NodeKind};

const HINT_START: &str = "Einstiegspunkt am Rand oder bestehende Straße anklicken, um zu beginnen";
const HINT_DRAWING: &str = "Klicken für Punkte. Doppelklick oder Rand anklicken zum Abschließen";
const HINT_BRANCH: &str = "Verzweigung von bestehender Straße. Klicken für Punkte";
const HINT_NO_START: &str = "Am Rand-Einstiegspunkt oder an einer bestehenden Straße beginnen";
const HINT_CREATED: &str = "Straße erstellt! Einstiegspunkt oder Straße anklicken für die nächste";
const HINT_CANCELLED: &str = "Zeichnen abgebrochen. Einstiegspunkt anklicken, um neu zu beginnen";
const HINT_DEAD_END: &str = "Sackgasse bestätigen?";
const HINT_DECLINED: &str = "Weiterzeichnen: Rand, Node oder Straße anklicken zum Abschließen";

impl RoadTool {
    // ── Aktivierung ──

    /// `Inactive → Idle`: Einstiegspunkte berechnen und anzeigen.
    pub fn activate(&mut self, env: &mut ToolEnv) {
        if self.state != ToolState::Inactive {
            return;
        }

        self.state = ToolState::Idle;
        self.regenerate_entry_points(env.network);
        env.renderer.render_entry_points(&self.entry_points);
        env.ui.set_active();
        env.ui.show_hint(HINT_START);
        log::info!(
            "Straßen-Tool aktiviert ({} Einstiegspunkte)",
            self.entry_points.len()
        );
    }

    /// `Idle/Drawing → Inactive`: bricht eine laufende Zeichnung ab.
    ///
    /// Eine offene Sackgassen-Bestätigung gilt dabei als abgelehnt.
    pub fn deactivate(&mut self, env: &mut ToolEnv) {
        if !self.is_active() {
            return;
        }

        if self.is_dead_end_pending() {
            log::debug!("Offene Sackgassen-Bestätigung verworfen");
        }
        self.cancel_drawing(env);
        self.state = ToolState::Inactive;
        self.entry_points.clear();
        self.cursor_world = None;

        env.renderer.clear_entry_points();
        env.renderer.clear_preview();
        env.renderer.clear_snap_indicator();
        env.renderer.clear_entry_highlight();
        env.ui.set_inactive();
        env.ui.hide_hint();
        log::info!("Straßen-Tool deaktiviert");
    }

    // ── Idle ──

    pub(super) fn on_idle_click(&mut self, world: Vec2, env: &mut ToolEnv) {
        let radius = self.options.node_snap_radius;

        if let Some(ep) = self.nearest_entry_point(world, radius) {
            let start = env.network.add_node(ep.position, NodeKind::Boundary);
            self.begin_drawing(start, ep.position, HINT_DRAWING, env);
            return;
        }

        if let Some(node) = env.network.find_node_at(world, radius) {
            let (id, pos) = (node.id, node.position());
            self.begin_drawing(id, pos, HINT_DRAWING, env);
            return;
        }

        if let Some(near) = env
            .network
            .find_segment_near(world, self.options.segment_snap_radius)
        {
            match env
                .network
                .split_segment_at(near.segment_id, near.hit.curve_index, near.hit.t)
            {
                Ok(junction) => {
                    let pos = env
                        .network
                        .node(junction)
                        .map_or(near.hit.point, |n| n.position());
                    env.renderer.render(env.network);
                    self.begin_drawing(junction, pos, HINT_BRANCH, env);
                }
                Err(e) => log::error!("Verzweigung fehlgeschlagen: {}", e),
            }
            return;
        }

        env.ui.show_hint(HINT_NO_START);
    }

    pub(super) fn on_idle_move(&mut self, world: Vec2, env: &mut ToolEnv) {
        env.renderer.clear_snap_indicator();
        env.renderer.clear_entry_highlight();

        if let Some(ep) = self.nearest_entry_point(world, self.options.entry_highlight_radius) {
            env.renderer.highlight_entry_point(ep.position);
            env.renderer.render_snap_indicator(ep.position);
            return;
        }

        if let Some(pos) = self.idle_snap_position(world, env.network) {
            env.renderer.render_snap_indicator(pos);
        }
    }

    fn begin_drawing(&mut self, start: NodeId, seed: Vec2, hint: &str, env: &mut ToolEnv) {
        let session = DrawingSession::new(start, seed);
        env.renderer.clear_entry_points();
        env.renderer.clear_snap_indicator();
        env.renderer.clear_entry_highlight();
        env.renderer
            .render_preview(&session.points, None, self.draft_mode);
        env.ui.show_hint(hint);
        log::debug!("Zeichnen gestartet an Node {}", start);
        self.state = ToolState::Drawing(session);
    }

    // ── Drawing ──

    pub(super) fn on_drawing_click(&mut self, world: Vec2, env: &mut ToolEnv) {
        let ToolState::Drawing(session) = &self.state else {
            return;
        };
        let clamped = self.bounds.clamp_point(world);

        if let Some(snap) = self.snap_target(clamped, session.start_node, env.network) {
            self.finish_drawing(snap.position(), Some(snap), env);
            return;
        }

        if let ToolState::Drawing(session) = &mut self.state {
            session
                .points
                .push(crate::shared::ControlPoint::sharp(clamped));
            env.renderer
                .render_preview(&session.points, None, self.draft_mode);
        }
    }

    pub(super) fn on_drawing_move(&mut self, world: Vec2, env: &mut ToolEnv) {
        let ToolState::Drawing(session) = &self.state else {
            return;
        };
        let clamped = self.bounds.clamp_point(world);
        env.renderer.clear_snap_indicator();

        let cursor = match self.snap_target(clamped, session.start_node, env.network) {
            Some(snap) => {
                env.renderer.render_snap_indicator(snap.position());
                snap.position()
            }
            None => clamped,
        };
        env.renderer
            .render_preview(&session.points, Some(cursor), self.draft_mode);
    }

    pub(super) fn on_create_key(&mut self, key: ToolKey, env: &mut ToolEnv) {
        match (key, &mut self.state) {
            (ToolKey::Escape, ToolState::Drawing(_)) => {
                self.cancel_drawing(env);
                self.state = ToolState::Idle;
                self.regenerate_entry_points(env.network);
                env.renderer.render_entry_points(&self.entry_points);
                env.ui.show_hint(HINT_CANCELLED);
            }
            (ToolKey::Escape, _) => self.deactivate(env),
            (ToolKey::Enter, ToolState::Drawing(session)) => {
                if session.points.len() >= 2 {
                    let end = session.points[session.points.len() - 1].position();
                    self.finish_drawing(end, None, env);
                }
            }
            (ToolKey::Delete | ToolKey::Backspace, ToolState::Drawing(session)) => {
                if session.points.len() > 1 {
                    session.points.pop();
                    env.renderer
                        .render_preview(&session.points, self.cursor_world, self.draft_mode);
                    env.ui.show_hint(&format!(
                        "Punkt entfernt. {} Punkt(e) verbleibend",
                        session.points.len()
                    ));
                }
            }
            _ => {}
        }
    }

    // ── Abschluss ──

    /// Schließt die Zeichnung bei `end_pos` ab.
    ///
    /// Mit Fangziel wird der End-Node daraus abgeleitet. Ohne Fangziel wird nahe
    /// am Rand ein Randknoten angelegt, sonst die Sackgassen-Bestätigung angefragt.
    pub(crate) fn finish_drawing(
        &mut self,
        end_pos: Vec2,
        snap: Option<SnapTarget>,
        env: &mut ToolEnv,
    ) -> FinishOutcome {
        if !self.is_drawing() || self.is_dead_end_pending() {
            return FinishOutcome::Rejected;
        }

        let end_node = match snap {
            Some(SnapTarget::Boundary { position, .. }) => {
                env.network.add_node(position, NodeKind::Boundary)
            }
            Some(SnapTarget::Node { node_id, .. }) => {
                let is_boundary = env.network.node(node_id).is_some_and(|n| n.is_boundary());
                if !is_boundary {
                    if let Err(e) = env.network.set_node_kind(node_id, NodeKind::Junction) {
                        log::error!("Node-Typ konnte nicht gesetzt werden: {}", e);
                        return FinishOutcome::Rejected;
                    }
                }
                node_id
            }
            Some(SnapTarget::Segment {
                segment_id,
                curve_index,
                t,
                ..
            }) => match env.network.split_segment_at(segment_id, curve_index, t) {
                Ok(junction) => junction,
                Err(e) => {
                    log::error!("Verzweigung fehlgeschlagen: {}", e);
                    return FinishOutcome::Rejected;
                }
            },
            None if self
                .bounds
                .is_near_boundary(end_pos, self.options.boundary_finish_threshold) =>
            {
                let (_, snapped) = self.bounds.snap_to_nearest_side(end_pos);
                env.network.add_node(snapped, NodeKind::Boundary)
            }
            None => {
                if let ToolState::Drawing(session) = &mut self.state {
                    session.pending = Some(PendingFinish { end_pos });
                }
                env.ui.request_dead_end_confirm();
                env.ui.show_hint(HINT_DEAD_END);
                log::debug!("Sackgassen-Bestätigung angefragt bei {:?}", end_pos);
                return FinishOutcome::AwaitingConfirmation;
            }
        };

        self.complete_drawing(end_node, env)
    }

    /// Antwort der UI auf die Sackgassen-Bestätigung.
    ///
    /// Ablehnung lässt Netz und Zeichnung unverändert.
    pub fn resolve_dead_end(&mut self, confirmed: bool, env: &mut ToolEnv) -> FinishOutcome {
        let ToolState::Drawing(session) = &mut self.state else {
            return FinishOutcome::Rejected;
        };
        let Some(pending) = session.pending.take() else {
            return FinishOutcome::Rejected;
        };

        if !confirmed {
            env.ui.show_hint(HINT_DECLINED);
            log::debug!("Sackgasse abgelehnt");
            return FinishOutcome::Declined;
        }

        let end_node = env.network.add_node(pending.end_pos, NodeKind::DeadEnd);
        self.complete_drawing(end_node, env)
    }

    fn complete_drawing(&mut self, end_node: NodeId, env: &mut ToolEnv) -> FinishOutcome {
        let ToolState::Drawing(session) = std::mem::replace(&mut self.state, ToolState::Idle) else {
            return FinishOutcome::Rejected;
        };

        let control_points = session.points[1..].to_vec();
        let outcome = match env.network.add_segment(
            session.start_node,
            end_node,
            control_points,
            self.options.default_road_width,
        ) {
            Ok(segment) => {
                log::info!(
                    "Straße {} erstellt: {} -> {}",
                    segment,
                    session.start_node,
                    end_node
                );
                FinishOutcome::Created { segment, end_node }
            }
            Err(e) => {
                log::error!("Straße konnte nicht angelegt werden: {}", e);
                FinishOutcome::Rejected
            }
        };

        env.renderer.render(env.network);
        env.renderer.clear_preview();
        env.renderer.clear_snap_indicator();
        self.regenerate_entry_points(env.network);
        env.renderer.render_entry_points(&self.entry_points);
        env.ui.show_hint(HINT_CREATED);
        outcome
    }

    // ── Abbruch ──

    /// Verwirft die laufende Zeichnung. Ein Start-Node ohne Segmente wird entfernt.
    fn cancel_drawing(&mut self, env: &mut ToolEnv) {
        if let ToolState::Drawing(session) = &self.state {
            let orphan = env
                .network
                .node(session.start_node)
                .is_some_and(|n| n.degree() == 0);
            if orphan {
                env.network.remove_node(session.start_node);
                env.renderer.render(env.network);
            }
            log::debug!("Zeichnen abgebrochen");
        }
        self.state = ToolState::Idle;
        env.renderer.clear_preview();
        env.renderer.clear_snap_indicator();
    }
}
