//! Spatial-Index (KD-Tree) für schnelle Node-Abfragen.

use glam::Vec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};

use super::{NodeId, RoadNode};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Nodes
    pub node_id: NodeId,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Spatial-Index über allen Nodes eines Straßennetzes.
///
/// Wird inkrementell gepflegt. Die Positionsliste hält die Einfügereihenfolge
/// der Node-Map, damit Gleichstände deterministisch zugunsten des älteren
/// Nodes aufgelöst werden.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    positions: IndexMap<NodeId, [f64; 2]>,
}

fn to_key(position: Vec2) -> [f64; 2] {
    [position.x as f64, position.y as f64]
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: KdTree::new(),
            positions: IndexMap::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Nodes.
    pub fn from_nodes(nodes: &IndexMap<NodeId, RoadNode>) -> Self {
        let mut index = Self::empty();
        for node in nodes.values() {
            index.insert(node.id, node.position());
        }
        index
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Nimmt einen Node auf. Ein bereits bekannter Node wird verschoben.
    pub fn insert(&mut self, node_id: NodeId, position: Vec2) {
        let key = to_key(position);
        if let Some(old) = self.positions.insert(node_id, key) {
            self.tree.remove(&old, node_id);
        }
        self.tree.add(&key, node_id);
    }

    /// Aktualisiert die Position eines Nodes (Reihenfolge bleibt erhalten).
    pub fn update(&mut self, node_id: NodeId, position: Vec2) {
        self.insert(node_id, position);
    }

    /// Entfernt einen Node. No-op, falls unbekannt.
    pub fn remove(&mut self, node_id: NodeId) {
        if let Some(old) = self.positions.shift_remove(&node_id) {
            self.tree.remove(&old, node_id);
        }
    }

    /// Alle Nodes innerhalb eines Radius, aufsteigend nach Distanz.
    ///
    /// Gleiche Distanzen bleiben in Einfügereihenfolge der Nodes.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&to_key(query), (radius as f64) * (radius as f64))
            .into_iter()
            .filter_map(|entry| {
                let order = self.positions.get_index_of(&entry.item)?;
                Some((order, entry.item, (entry.distance as f32).sqrt()))
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.2.total_cmp(&b.2).then(a.0.cmp(&b.0)));
        results
            .into_iter()
            .map(|(_, node_id, distance)| SpatialMatch { node_id, distance })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeKind;

    fn sample_nodes() -> IndexMap<NodeId, RoadNode> {
        let mut nodes = IndexMap::new();
        nodes.insert(1, RoadNode::new(1, Vec2::new(0.0, 0.0), NodeKind::Boundary));
        nodes.insert(2, RoadNode::new(2, Vec2::new(10.0, 0.0), NodeKind::Junction));
        nodes.insert(3, RoadNode::new(3, Vec2::new(4.0, 3.0), NodeKind::DeadEnd));
        nodes
    }

    fn ids(matches: Vec<SpatialMatch>) -> Vec<NodeId> {
        matches.into_iter().map(|m| m.node_id).collect()
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let index = SpatialIndex::from_nodes(&sample_nodes());
        let matches = index.within_radius(Vec2::new(0.0, 0.0), 6.0);

        assert_eq!(matches[1].distance, 5.0);
        assert_eq!(ids(matches), vec![1, 3]);
    }

    #[test]
    fn radius_query_breaks_ties_by_insertion_order() {
        let mut nodes = IndexMap::new();
        nodes.insert(8, RoadNode::new(8, Vec2::new(5.0, 0.0), NodeKind::Junction));
        nodes.insert(4, RoadNode::new(4, Vec2::new(-5.0, 0.0), NodeKind::Junction));
        let index = SpatialIndex::from_nodes(&nodes);

        assert_eq!(ids(index.within_radius(Vec2::ZERO, 10.0)), vec![8, 4]);
    }

    #[test]
    fn update_moves_node_and_keeps_order() {
        let mut index = SpatialIndex::from_nodes(&sample_nodes());
        index.update(1, Vec2::new(100.0, 100.0));

        assert_eq!(index.len(), 3);
        assert_eq!(ids(index.within_radius(Vec2::ZERO, 6.0)), vec![3]);
        assert_eq!(ids(index.within_radius(Vec2::new(100.0, 100.0), 1.0)), vec![1]);

        // Node 1 bleibt vor Node 2, obwohl er zuletzt verschoben wurde
        index.update(2, Vec2::new(110.0, 100.0));
        index.update(1, Vec2::new(120.0, 100.0));
        assert_eq!(ids(index.within_radius(Vec2::new(115.0, 100.0), 6.0)), vec![1, 2]);
    }

    #[test]
    fn remove_drops_node_from_queries() {
        let mut index = SpatialIndex::from_nodes(&sample_nodes());
        index.remove(3);
        index.remove(42);

        assert_eq!(index.len(), 2);
        assert_eq!(ids(index.within_radius(Vec2::ZERO, 6.0)), vec![1]);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.within_radius(Vec2::ZERO, 10.0).is_empty());
    }
}
