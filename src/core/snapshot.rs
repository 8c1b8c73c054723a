//! Serialisierbares Abbild des Straßennetzes (JSON-Austauschformat).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{NodeId, NodeKind, RoadNetwork, RoadNetworkError, RoadNode, RoadSegment, SegmentId};
use crate::shared::curve_math::ControlPoint;

/// Node im Austauschformat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub id: NodeId,
    pub x: f32,
    pub y: f32,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

/// Segment im Austauschformat. Kurven werden beim Import neu berechnet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRecord {
    pub id: SegmentId,
    pub start_node_id: NodeId,
    pub end_node_id: NodeId,
    #[serde(default)]
    pub control_points: Vec<ControlPoint>,
    pub width: f32,
}

/// Vollständiger Netz-Snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSnapshot {
    pub nodes: Vec<NodeRecord>,
    pub segments: Vec<SegmentRecord>,
    /// Nächste freie ID; fehlt sie, wird sie aus der größten ID abgeleitet
    #[serde(default)]
    pub next_id: Option<u64>,
}

impl RoadNetwork {
    /// Erzeugt einen Snapshot in Einfügereihenfolge.
    pub fn to_snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            nodes: self
                .nodes()
                .map(|n| NodeRecord {
                    id: n.id,
                    x: n.x,
                    y: n.y,
                    kind: n.kind,
                })
                .collect(),
            segments: self
                .segments()
                .map(|s| SegmentRecord {
                    id: s.id,
                    start_node_id: s.start_node_id,
                    end_node_id: s.end_node_id,
                    control_points: s.control_points().to_vec(),
                    width: s.width,
                })
                .collect(),
            next_id: Some(self.next_id()),
        }
    }

    /// Baut ein Netz aus einem Snapshot auf (Adjazenz und Kurven werden abgeleitet).
    ///
    /// Segmente mit unbekannten Endpunkten ergeben `NodeNotFound`. IDs müssen
    /// über Nodes und Segmente hinweg eindeutig sein, sonst `DuplicateId`.
    pub fn from_snapshot(snapshot: &NetworkSnapshot) -> Result<Self, RoadNetworkError> {
        let mut nodes: IndexMap<NodeId, RoadNode> = IndexMap::with_capacity(snapshot.nodes.len());
        for record in &snapshot.nodes {
            let node = RoadNode::new(record.id, glam::Vec2::new(record.x, record.y), record.kind);
            if nodes.insert(record.id, node).is_some() {
                return Err(RoadNetworkError::DuplicateId(record.id));
            }
        }

        let mut segments: IndexMap<SegmentId, RoadSegment> =
            IndexMap::with_capacity(snapshot.segments.len());
        for record in &snapshot.segments {
            // Vor der Adjazenz prüfen, sonst bleiben fremde Kanten-IDs an Nodes hängen
            if nodes.contains_key(&record.id) || segments.contains_key(&record.id) {
                return Err(RoadNetworkError::DuplicateId(record.id));
            }
            for node_id in [record.start_node_id, record.end_node_id] {
                nodes
                    .get_mut(&node_id)
                    .ok_or(RoadNetworkError::NodeNotFound(node_id))?
                    .add_edge(record.id);
            }
            let control_points = record
                .control_points
                .iter()
                .map(|p| ControlPoint::new(p.x, p.y, p.smoothing))
                .collect();
            segments.insert(
                record.id,
                RoadSegment::new(
                    record.id,
                    record.start_node_id,
                    record.end_node_id,
                    control_points,
                    record.width,
                ),
            );
        }

        let max_id = nodes
            .keys()
            .chain(segments.keys())
            .max()
            .copied()
            .unwrap_or(0);
        let next_id = snapshot.next_id.unwrap_or(0).max(max_id + 1);

        Ok(Self::from_parts(nodes, segments, next_id))
    }
}
