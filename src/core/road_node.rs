//! Knoten des Straßennetzes (Randpunkt, Kreuzung, Sackgasse).

use glam::Vec2;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Node-ID (teilt sich den Zähler mit Segment-IDs).
pub type NodeId = u64;
/// Segment-ID (teilt sich den Zähler mit Node-IDs).
pub type SegmentId = u64;

/// Art eines Straßenknotens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Liegt auf dem Weltrand (Einfahrt in die Karte)
    Boundary,
    /// Verzweigung / Verbindung mehrerer Segmente
    Junction,
    /// Vom User bestätigte Sackgasse
    #[serde(rename = "deadend")]
    DeadEnd,
}

/// Ein Straßenknoten mit Adjazenzliste der angrenzenden Segmente
#[derive(Debug, Clone, PartialEq)]
pub struct RoadNode {
    pub id: NodeId,
    pub x: f32,
    pub y: f32,
    pub kind: NodeKind,
    /// Angrenzende Segmente in Einfügereihenfolge, ohne Duplikate
    pub(crate) edge_ids: IndexSet<SegmentId>,
}

impl RoadNode {
    /// Erstellt einen neuen Node ohne Kanten.
    pub fn new(id: NodeId, position: Vec2, kind: NodeKind) -> Self {
        Self {
            id,
            x: position.x,
            y: position.y,
            kind,
            edge_ids: IndexSet::new(),
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub(crate) fn set_position(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// IDs aller angrenzenden Segmente (Einfügereihenfolge).
    pub fn edge_ids(&self) -> &IndexSet<SegmentId> {
        &self.edge_ids
    }

    /// Anzahl angrenzender Segmente.
    pub fn degree(&self) -> usize {
        self.edge_ids.len()
    }

    pub fn is_boundary(&self) -> bool {
        self.kind == NodeKind::Boundary
    }

    pub fn is_junction(&self) -> bool {
        self.kind == NodeKind::Junction
    }

    pub fn is_dead_end(&self) -> bool {
        self.kind == NodeKind::DeadEnd
    }

    /// Registriert ein Segment (idempotent).
    pub(crate) fn add_edge(&mut self, segment_id: SegmentId) {
        self.edge_ids.insert(segment_id);
    }

    /// Entfernt ein Segment, Reihenfolge der übrigen bleibt erhalten.
    pub(crate) fn remove_edge(&mut self, segment_id: SegmentId) {
        self.edge_ids.shift_remove(&segment_id);
    }
}
