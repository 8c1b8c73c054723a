//! Fang-Logik des Create-Modus.

use glam::Vec2;

use super::{RoadTool, SnapTarget};
use crate::core::{BoundaryEntryPoint, NodeId, RoadNetwork};

impl RoadTool {
    /// Nächster Einstiegspunkt strikt innerhalb `radius`.
    pub(crate) fn nearest_entry_point(&self, world: Vec2, radius: f32) -> Option<BoundaryEntryPoint> {
        let mut best: Option<(BoundaryEntryPoint, f32)> = None;
        for ep in &self.entry_points {
            let dist = ep.position.distance(world);
            if dist < best.map_or(radius, |(_, d)| d) {
                best = Some((*ep, dist));
            }
        }
        best.map(|(ep, _)| ep)
    }

    /// Fangziel für einen Punkt während des Zeichnens.
    ///
    /// Reihenfolge: Weltrand (nur weiter als `boundary_snap_min_distance` vom
    /// Start entfernt), Einstiegspunkt, anderer Node, Segment.
    pub(crate) fn snap_target(
        &self,
        world: Vec2,
        start_node: NodeId,
        network: &RoadNetwork,
    ) -> Option<SnapTarget> {
        let opts = &self.options;
        let start_dist = network
            .node(start_node)
            .map_or(f32::INFINITY, |n| n.position().distance(world));

        if start_dist > opts.boundary_snap_min_distance {
            if let Some((side, position)) = self
                .bounds
                .nearest_edge_within(world, opts.boundary_snap_radius)
            {
                return Some(SnapTarget::Boundary { position, side });
            }
        }

        if let Some(ep) = self.nearest_entry_point(world, opts.node_snap_radius) {
            return Some(SnapTarget::Boundary {
                position: ep.position,
                side: ep.side,
            });
        }

        if let Some(node) =
            network.find_node_at_excluding(world, opts.node_snap_radius, Some(start_node))
        {
            return Some(SnapTarget::Node {
                node_id: node.id,
                position: node.position(),
            });
        }

        network
            .find_segment_near(world, opts.segment_snap_radius)
            .map(|near| SnapTarget::Segment {
                segment_id: near.segment_id,
                curve_index: near.hit.curve_index,
                t: near.hit.t,
                position: near.hit.point,
            })
    }

    /// Position, die im Idle-Zustand beim Hover angezeigt wird.
    pub(crate) fn idle_snap_position(&self, world: Vec2, network: &RoadNetwork) -> Option<Vec2> {
        let opts = &self.options;
        if let Some(node) = network.find_node_at(world, opts.node_snap_radius) {
            return Some(node.position());
        }
        network
            .find_segment_near(world, opts.segment_snap_radius)
            .map(|near| near.hit.point)
    }
}
