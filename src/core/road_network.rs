//! Das Straßennetz: Nodes, Segmente, Adjazenz und Spatial-Index.

use glam::Vec2;
use indexmap::IndexMap;

use super::{
    BoundarySide, NodeId, NodeKind, RoadNetworkError, RoadNode, RoadSegment, SegmentHit,
    SegmentId, SpatialIndex, WorldBounds,
};
use crate::shared::curve_math::ControlPoint;

/// Möglicher Einstiegspunkt auf dem Weltrand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryEntryPoint {
    pub position: Vec2,
    pub side: BoundarySide,
}

/// Nächstes Segment zu einer Weltposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentNear {
    pub segment_id: SegmentId,
    pub hit: SegmentHit,
}

/// Container für das gesamte Straßennetz.
///
/// Nodes und Segmente teilen sich einen monoton steigenden ID-Zähler.
/// Segmente referenzieren Nodes nur über IDs.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    nodes: IndexMap<NodeId, RoadNode>,
    segments: IndexMap<SegmentId, RoadSegment>,
    next_id: u64,
    /// Persistenter Spatial-Index über allen Node-Positionen
    spatial_index: SpatialIndex,
}

impl Default for RoadNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadNetwork {
    /// Erstellt ein leeres Netz (erste vergebene ID ist 1).
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            segments: IndexMap::new(),
            next_id: 1,
            spatial_index: SpatialIndex::empty(),
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Nächste zu vergebende ID.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    // ─── Nodes ───

    /// Legt einen neuen Node an und gibt seine ID zurück.
    pub fn add_node(&mut self, position: Vec2, kind: NodeKind) -> NodeId {
        let id = self.allocate_id();
        self.nodes.insert(id, RoadNode::new(id, position, kind));
        self.spatial_index.insert(id, position);
        log::debug!("Node {} ({:?}) bei {:?} angelegt", id, kind, position);
        id
    }

    /// Entfernt einen Node samt aller angrenzenden Segmente. No-op, falls unbekannt.
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<RoadNode> {
        let edge_ids: Vec<SegmentId> = self.nodes.get(&node_id)?.edge_ids.iter().copied().collect();
        for segment_id in edge_ids {
            self.remove_segment(segment_id);
        }
        let removed = self.nodes.shift_remove(&node_id);
        self.spatial_index.remove(node_id);
        log::debug!("Node {} entfernt", node_id);
        removed
    }

    /// Ändert den Typ eines Nodes (keine Prüfung der Übergänge).
    pub fn set_node_kind(&mut self, node_id: NodeId, kind: NodeKind) -> Result<(), RoadNetworkError> {
        let node = self
            .nodes
            .get_mut(&node_id)
            .ok_or(RoadNetworkError::NodeNotFound(node_id))?;
        if node.kind != kind {
            log::debug!("Node {}: {:?} -> {:?}", node_id, node.kind, kind);
            node.kind = kind;
        }
        Ok(())
    }

    /// Verschiebt einen Node und baut alle angrenzenden Segmente neu auf.
    pub fn move_node(&mut self, node_id: NodeId, position: Vec2) -> Result<(), RoadNetworkError> {
        let node = self
            .nodes
            .get_mut(&node_id)
            .ok_or(RoadNetworkError::NodeNotFound(node_id))?;
        if node.position() == position {
            return Ok(());
        }
        node.set_position(position);
        let edge_ids: Vec<SegmentId> = node.edge_ids.iter().copied().collect();
        for segment_id in edge_ids {
            self.rebuild_segment(segment_id);
        }
        self.spatial_index.update(node_id, position);
        Ok(())
    }

    pub fn node(&self, node_id: NodeId) -> Option<&RoadNode> {
        self.nodes.get(&node_id)
    }

    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Alle Nodes in Einfügereihenfolge.
    pub fn nodes(&self) -> impl Iterator<Item = &RoadNode> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ─── Segmente ───

    /// Legt ein Segment an, baut seine Kurven und trägt es bei beiden Endpunkten ein.
    pub fn add_segment(
        &mut self,
        start_node_id: NodeId,
        end_node_id: NodeId,
        control_points: Vec<ControlPoint>,
        width: f32,
    ) -> Result<SegmentId, RoadNetworkError> {
        let start = self
            .nodes
            .get(&start_node_id)
            .ok_or(RoadNetworkError::NodeNotFound(start_node_id))?;
        let end = self
            .nodes
            .get(&end_node_id)
            .ok_or(RoadNetworkError::NodeNotFound(end_node_id))?;

        let id = self.next_id;
        let mut segment = RoadSegment::new(id, start_node_id, end_node_id, control_points, width);
        segment.rebuild(start, end);
        self.next_id += 1;

        for node_id in [start_node_id, end_node_id] {
            if let Some(node) = self.nodes.get_mut(&node_id) {
                node.add_edge(id);
            }
        }
        self.segments.insert(id, segment);
        log::debug!(
            "Segment {} angelegt: {} -> {}",
            id,
            start_node_id,
            end_node_id
        );
        Ok(id)
    }

    /// Entfernt ein Segment und löst es von beiden Endpunkten. Verwaiste Nodes bleiben.
    pub fn remove_segment(&mut self, segment_id: SegmentId) -> Option<RoadSegment> {
        let segment = self.segments.shift_remove(&segment_id)?;
        for node_id in [segment.start_node_id, segment.end_node_id] {
            if let Some(node) = self.nodes.get_mut(&node_id) {
                node.remove_edge(segment_id);
            }
        }
        log::debug!("Segment {} entfernt", segment_id);
        Some(segment)
    }

    pub fn segment(&self, segment_id: SegmentId) -> Option<&RoadSegment> {
        self.segments.get(&segment_id)
    }

    pub fn contains_segment(&self, segment_id: SegmentId) -> bool {
        self.segments.contains_key(&segment_id)
    }

    /// Alle Segmente in Einfügereihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = &RoadSegment> {
        self.segments.values()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Segmente am Node `node_id` außer `except`.
    pub fn other_segments_at(&self, node_id: NodeId, except: SegmentId) -> Vec<SegmentId> {
        self.nodes
            .get(&node_id)
            .map(|node| {
                node.edge_ids
                    .iter()
                    .copied()
                    .filter(|&id| id != except)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Baut die Kurven eines Segments aus den aktuellen Node-Positionen neu.
    fn rebuild_segment(&mut self, segment_id: SegmentId) {
        let Some(segment) = self.segments.get_mut(&segment_id) else {
            return;
        };
        match (
            self.nodes.get(&segment.start_node_id),
            self.nodes.get(&segment.end_node_id),
        ) {
            (Some(start), Some(end)) => segment.rebuild(start, end),
            _ => log::warn!(
                "Segment {} verweist auf fehlenden Endpunkt, Rebuild übersprungen",
                segment_id
            ),
        }
    }

    // ─── Kontrollpunkte ───

    /// Fügt einen Kontrollpunkt an Position `index` ein (0..=len).
    pub fn insert_control_point(
        &mut self,
        segment_id: SegmentId,
        index: usize,
        point: ControlPoint,
    ) -> Result<(), RoadNetworkError> {
        let points = self.control_points_mut(segment_id)?;
        if index > points.len() {
            return Err(RoadNetworkError::ControlPointOutOfRange {
                segment: segment_id,
                index,
                len: points.len(),
            });
        }
        points.insert(index, point);
        self.rebuild_segment(segment_id);
        Ok(())
    }

    /// Entfernt einen Kontrollpunkt und gibt ihn zurück.
    pub fn remove_control_point(
        &mut self,
        segment_id: SegmentId,
        index: usize,
    ) -> Result<ControlPoint, RoadNetworkError> {
        let points = self.control_points_mut(segment_id)?;
        if index >= points.len() {
            return Err(RoadNetworkError::ControlPointOutOfRange {
                segment: segment_id,
                index,
                len: points.len(),
            });
        }
        let removed = points.remove(index);
        self.rebuild_segment(segment_id);
        Ok(removed)
    }

    /// Setzt die Position eines Kontrollpunkts; die Glättung bleibt erhalten.
    pub fn move_control_point(
        &mut self,
        segment_id: SegmentId,
        index: usize,
        position: Vec2,
    ) -> Result<(), RoadNetworkError> {
        self.control_point_mut(segment_id, index)?.set_position(position);
        self.rebuild_segment(segment_id);
        Ok(())
    }

    /// Setzt die Glättung eines Kontrollpunkts (auf [0, 1] geklemmt) und gibt den neuen Wert zurück.
    pub fn set_control_point_smoothing(
        &mut self,
        segment_id: SegmentId,
        index: usize,
        smoothing: f32,
    ) -> Result<f32, RoadNetworkError> {
        let point = self.control_point_mut(segment_id, index)?;
        *point = point.with_smoothing(smoothing);
        let value = point.smoothing;
        self.rebuild_segment(segment_id);
        Ok(value)
    }

    fn control_points_mut(
        &mut self,
        segment_id: SegmentId,
    ) -> Result<&mut Vec<ControlPoint>, RoadNetworkError> {
        self.segments
            .get_mut(&segment_id)
            .map(RoadSegment::control_points_mut)
            .ok_or(RoadNetworkError::SegmentNotFound(segment_id))
    }

    fn control_point_mut(
        &mut self,
        segment_id: SegmentId,
        index: usize,
    ) -> Result<&mut ControlPoint, RoadNetworkError> {
        let points = self.control_points_mut(segment_id)?;
        let len = points.len();
        points
            .get_mut(index)
            .ok_or(RoadNetworkError::ControlPointOutOfRange {
                segment: segment_id,
                index,
                len,
            })
    }

    // ─── Abfragen ───

    /// Alle Randknoten.
    pub fn find_boundary_nodes(&self) -> Vec<&RoadNode> {
        self.nodes.values().filter(|n| n.is_boundary()).collect()
    }

    /// Nächster Node strikt innerhalb `radius`.
    pub fn find_node_at(&self, pos: Vec2, radius: f32) -> Option<&RoadNode> {
        self.find_node_at_excluding(pos, radius, None)
    }

    /// Wie `find_node_at`, ignoriert aber `exclude`.
    pub fn find_node_at_excluding(
        &self,
        pos: Vec2,
        radius: f32,
        exclude: Option<NodeId>,
    ) -> Option<&RoadNode> {
        self.spatial_index
            .within_radius(pos, radius)
            .into_iter()
            .filter(|m| m.distance < radius && Some(m.node_id) != exclude)
            .find_map(|m| self.nodes.get(&m.node_id))
    }

    /// Global nächstes Segment strikt innerhalb `max_dist`; Gleichstand: älteres Segment.
    pub fn find_segment_near(&self, pos: Vec2, max_dist: f32) -> Option<SegmentNear> {
        let mut best: Option<SegmentNear> = None;
        for segment in self.segments.values() {
            let Some(hit) = segment.closest_point(pos) else {
                continue;
            };
            if hit.distance < max_dist && best.is_none_or(|b| hit.distance < b.hit.distance) {
                best = Some(SegmentNear {
                    segment_id: segment.id,
                    hit,
                });
            }
        }
        best
    }

    /// Lose Enden: genau ein Segment, weder Sackgasse noch Randknoten.
    pub fn find_unconfirmed_dead_ends(&self) -> Vec<&RoadNode> {
        self.nodes
            .values()
            .filter(|n| n.degree() == 1 && !n.is_dead_end() && !n.is_boundary())
            .collect()
    }

    /// Gleichmäßig verteilte Einstiegspunkte auf allen vier Kanten.
    ///
    /// Schrittweite `spacing`, beginnend bei `spacing / 2` ab der Ecke.
    /// Kandidaten, die näher als `spacing * 0.4` an einem Node liegen, entfallen.
    pub fn generate_boundary_entry_points(
        &self,
        bounds: &WorldBounds,
        spacing: f32,
    ) -> Vec<BoundaryEntryPoint> {
        if spacing <= 0.0 {
            log::warn!("Ungültiger Abstand für Einstiegspunkte: {}", spacing);
            return Vec::new();
        }

        let along = |min: f32, max: f32| {
            let mut values = Vec::new();
            let mut v = min + spacing / 2.0;
            while v < max {
                values.push(v);
                v += spacing;
            }
            values
        };
        let xs = along(bounds.min_x, bounds.max_x);
        let ys = along(bounds.min_y, bounds.max_y);

        let mut points = Vec::with_capacity(2 * (xs.len() + ys.len()));
        for (side, y) in [
            (BoundarySide::Top, bounds.min_y),
            (BoundarySide::Bottom, bounds.max_y),
        ] {
            points.extend(xs.iter().map(|&x| BoundaryEntryPoint {
                position: Vec2::new(x, y),
                side,
            }));
        }
        for (side, x) in [
            (BoundarySide::Left, bounds.min_x),
            (BoundarySide::Right, bounds.max_x),
        ] {
            points.extend(ys.iter().map(|&y| BoundaryEntryPoint {
                position: Vec2::new(x, y),
                side,
            }));
        }

        let exclusion = spacing * 0.4;
        points.retain(|ep| self.find_node_at(ep.position, exclusion).is_none());
        points
    }

    // ─── Verzweigung ───

    /// Teilt ein Segment bei `t` auf Kurve `curve_index` und gibt den neuen Kreuzungsknoten zurück.
    ///
    /// Die Kontrollpunkte werden bei `curve_index` aufgeteilt (Index < curve_index
    /// in die erste Hälfte) und beide Hälften über die normale Kurvenberechnung
    /// neu aufgebaut. Die neue Form entspricht der alten daher nur näherungsweise.
    pub fn split_segment_at(
        &mut self,
        segment_id: SegmentId,
        curve_index: usize,
        t: f32,
    ) -> Result<NodeId, RoadNetworkError> {
        let segment = self
            .segments
            .get(&segment_id)
            .ok_or(RoadNetworkError::SegmentNotFound(segment_id))?;
        let curve = segment.bezier_curves().get(curve_index).ok_or(
            RoadNetworkError::CurveIndexOutOfRange {
                segment: segment_id,
                index: curve_index,
                len: segment.bezier_curves().len(),
            },
        )?;

        let split_point = curve.point_at(t);
        let start_node_id = segment.start_node_id;
        let end_node_id = segment.end_node_id;
        let width = segment.width;
        let mut first_half = segment.control_points().to_vec();
        let second_half = first_half.split_off(curve_index.min(first_half.len()));

        let junction_id = self.add_node(split_point, NodeKind::Junction);
        self.remove_segment(segment_id);
        self.add_segment(start_node_id, junction_id, first_half, width)?;
        self.add_segment(junction_id, end_node_id, second_half, width)?;

        log::debug!(
            "Segment {} bei Kurve {} (t={:.2}) geteilt, Kreuzung {}",
            segment_id,
            curve_index,
            t,
            junction_id
        );
        Ok(junction_id)
    }

    /// Baut ein Netz aus bereits validierten Teilen auf (für Snapshot-Import).
    pub(crate) fn from_parts(
        nodes: IndexMap<NodeId, RoadNode>,
        segments: IndexMap<SegmentId, RoadSegment>,
        next_id: u64,
    ) -> Self {
        let mut network = Self {
            nodes,
            segments,
            next_id,
            spatial_index: SpatialIndex::empty(),
        };
        let segment_ids: Vec<SegmentId> = network.segments.keys().copied().collect();
        for segment_id in segment_ids {
            network.rebuild_segment(segment_id);
        }
        network.spatial_index = SpatialIndex::from_nodes(&network.nodes);
        network
    }
}

#[cfg(test)]
mod tests;
