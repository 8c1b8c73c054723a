use super::*;
use approx::assert_relative_eq;

fn straight_network() -> (RoadNetwork, NodeId, NodeId, SegmentId) {
    let mut network = RoadNetwork::new();
    let a = network.add_node(Vec2::new(0.0, 0.0), NodeKind::Boundary);
    let b = network.add_node(Vec2::new(100.0, 0.0), NodeKind::Boundary);
    let seg = network
        .add_segment(a, b, Vec::new(), 50.0)
        .expect("Nodes existieren");
    (network, a, b, seg)
}

#[test]
fn test_ids_are_shared_across_kinds() {
    let (network, a, b, seg) = straight_network();
    assert_eq!((a, b, seg), (1, 2, 3));
    assert_eq!(network.next_id(), 4);

    let segment = network.segment(seg).expect("Segment erwartet");
    assert_eq!(segment.bezier_curves().len(), 1);
    assert!(segment.to_svg_path().starts_with("M 0 0"));
}

#[test]
fn test_add_segment_unknown_node_fails() {
    let mut network = RoadNetwork::new();
    let a = network.add_node(Vec2::ZERO, NodeKind::Junction);
    assert_eq!(
        network.add_segment(a, 42, Vec::new(), 50.0),
        Err(RoadNetworkError::NodeNotFound(42))
    );
    assert_eq!(network.segment_count(), 0);
    assert_eq!(network.node(a).expect("Node").degree(), 0);
}

#[test]
fn test_add_then_remove_segment_restores_adjacency() {
    let (mut network, a, b, first) = straight_network();
    let second = network
        .add_segment(a, b, vec![ControlPoint::smooth(Vec2::new(50.0, 40.0))], 50.0)
        .expect("Nodes existieren");

    assert!(network.remove_segment(second).is_some());
    let ids_a: Vec<_> = network.node(a).expect("a").edge_ids().iter().copied().collect();
    let ids_b: Vec<_> = network.node(b).expect("b").edge_ids().iter().copied().collect();
    assert_eq!(ids_a, vec![first]);
    assert_eq!(ids_b, vec![first]);

    assert!(network.remove_segment(second).is_none());
}

#[test]
fn test_remove_segment_keeps_orphaned_nodes() {
    let (mut network, a, b, seg) = straight_network();
    network.remove_segment(seg);
    assert!(network.contains_node(a));
    assert!(network.contains_node(b));
    assert_eq!(network.node(a).expect("a").degree(), 0);
}

#[test]
fn test_remove_node_cascades() {
    let (mut network, a, b, seg) = straight_network();
    let c = network.add_node(Vec2::new(50.0, 80.0), NodeKind::Junction);
    let s2 = network.add_segment(b, c, Vec::new(), 50.0).expect("ok");
    let s3 = network.add_segment(c, a, Vec::new(), 50.0).expect("ok");

    assert!(network.remove_node(c).is_some());
    assert!(!network.contains_segment(s2));
    assert!(!network.contains_segment(s3));
    assert!(network.contains_segment(seg));
    for node in network.nodes() {
        for edge in node.edge_ids() {
            assert!(network.contains_segment(*edge), "dangling edge {edge}");
        }
    }
    assert!(network.remove_node(c).is_none());
}

#[test]
fn test_find_node_at_radius() {
    let mut network = RoadNetwork::new();
    let id = network.add_node(Vec2::new(100.0, 100.0), NodeKind::Junction);

    assert_eq!(
        network.find_node_at(Vec2::new(105.0, 100.0), 10.0).map(|n| n.id),
        Some(id)
    );
    assert!(network.find_node_at(Vec2::new(200.0, 100.0), 10.0).is_none());
    // Strikter Vergleich
    assert!(network.find_node_at(Vec2::new(110.0, 100.0), 10.0).is_none());
    assert!(network
        .find_node_at_excluding(Vec2::new(100.0, 100.0), 10.0, Some(id))
        .is_none());
}

#[test]
fn test_find_node_at_follows_moves_and_removals() {
    let mut network = RoadNetwork::new();
    let id = network.add_node(Vec2::new(0.0, 0.0), NodeKind::DeadEnd);
    network.move_node(id, Vec2::new(300.0, 0.0)).expect("Node existiert");

    assert!(network.find_node_at(Vec2::ZERO, 15.0).is_none());
    assert!(network.find_node_at(Vec2::new(300.0, 1.0), 15.0).is_some());

    network.remove_node(id);
    assert!(network.find_node_at(Vec2::new(300.0, 1.0), 15.0).is_none());
}

#[test]
fn test_find_node_at_during_repeated_drag_moves() {
    let mut network = RoadNetwork::new();
    let fixed = network.add_node(Vec2::new(50.0, 0.0), NodeKind::Junction);
    let dragged = network.add_node(Vec2::new(0.0, 0.0), NodeKind::DeadEnd);

    for step in 1..=40 {
        let pos = Vec2::new(step as f32 * 5.0, 0.0);
        network.move_node(dragged, pos).expect("Node existiert");
        assert_eq!(network.find_node_at(pos, 1.0).map(|n| n.id), Some(dragged));
    }

    // Gleichstand: der ältere Node gewinnt trotz späterer Verschiebung
    network.move_node(dragged, Vec2::new(40.0, 0.0)).expect("Node existiert");
    network.move_node(fixed, Vec2::new(60.0, 0.0)).expect("Node existiert");
    assert_eq!(
        network.find_node_at(Vec2::new(50.0, 0.0), 15.0).map(|n| n.id),
        Some(fixed)
    );
}

#[test]
fn test_find_segment_near() {
    let (network, _, _, seg) = straight_network();

    let near = network
        .find_segment_near(Vec2::new(50.0, 10.0), 25.0)
        .expect("Segment in Reichweite");
    assert_eq!(near.segment_id, seg);
    assert_eq!(near.hit.curve_index, 0);
    assert_relative_eq!(near.hit.distance, 10.0, epsilon = 0.5);

    assert!(network.find_segment_near(Vec2::new(50.0, 40.0), 25.0).is_none());
}

#[test]
fn test_find_unconfirmed_dead_ends() {
    let (mut network, a, _, _) = straight_network();
    let loose = network.add_node(Vec2::new(0.0, 200.0), NodeKind::Junction);
    let confirmed = network.add_node(Vec2::new(200.0, 200.0), NodeKind::DeadEnd);
    network.add_segment(a, loose, Vec::new(), 50.0).expect("ok");
    network.add_segment(a, confirmed, Vec::new(), 50.0).expect("ok");

    let ids: Vec<_> = network.find_unconfirmed_dead_ends().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![loose]);
    assert_eq!(network.find_boundary_nodes().len(), 2);
}

#[test]
fn test_generate_boundary_entry_points() {
    let bounds = WorldBounds::new(0.0, 0.0, 1000.0, 1000.0);
    let network = RoadNetwork::new();
    let points = network.generate_boundary_entry_points(&bounds, 150.0);

    // 75, 225, ..., 975 → 7 pro Kante
    assert_eq!(points.len(), 28);
    let top: Vec<f32> = points
        .iter()
        .filter(|p| p.side == BoundarySide::Top)
        .map(|p| p.position.x)
        .collect();
    assert_eq!(top, vec![75.0, 225.0, 375.0, 525.0, 675.0, 825.0, 975.0]);
    assert!(points
        .iter()
        .filter(|p| p.side == BoundarySide::Left)
        .all(|p| p.position.x == 0.0));
    assert!(points
        .iter()
        .filter(|p| p.side == BoundarySide::Bottom)
        .all(|p| p.position.y == 1000.0));
}

#[test]
fn test_entry_points_exclude_existing_nodes() {
    let bounds = WorldBounds::new(0.0, 0.0, 1000.0, 1000.0);
    let mut network = RoadNetwork::new();
    network.add_node(Vec2::new(375.0, 0.0), NodeKind::Boundary);

    let points = network.generate_boundary_entry_points(&bounds, 150.0);
    assert_eq!(points.len(), 27);
    assert!(points
        .iter()
        .all(|p| p.position.distance(Vec2::new(375.0, 0.0)) >= 60.0));
}

#[test]
fn test_split_segment_at_midpoint() {
    let (mut network, a, b, seg) = straight_network();
    let junction = network.split_segment_at(seg, 0, 0.5).expect("gültiger Split");

    let node = network.node(junction).expect("Kreuzung");
    assert_eq!(node.kind, NodeKind::Junction);
    assert_relative_eq!(node.x, 50.0, epsilon = 1e-3);
    assert_relative_eq!(node.y, 0.0, epsilon = 1e-3);

    assert!(!network.contains_segment(seg));
    assert_eq!(network.segment_count(), 2);
    let chain: Vec<(NodeId, NodeId)> = network
        .segments()
        .map(|s| (s.start_node_id, s.end_node_id))
        .collect();
    assert_eq!(chain, vec![(a, junction), (junction, b)]);
    assert_eq!(node.degree(), 2);
}

#[test]
fn test_split_partitions_control_points() {
    let mut network = RoadNetwork::new();
    let a = network.add_node(Vec2::new(0.0, 0.0), NodeKind::Boundary);
    let b = network.add_node(Vec2::new(300.0, 0.0), NodeKind::Boundary);
    let cps = vec![
        ControlPoint::smooth(Vec2::new(100.0, 50.0)),
        ControlPoint::smooth(Vec2::new(200.0, -50.0)),
    ];
    let seg = network.add_segment(a, b, cps, 50.0).expect("ok");

    let junction = network.split_segment_at(seg, 1, 0.5).expect("gültiger Split");
    let halves: Vec<usize> = network.segments().map(|s| s.control_point_count()).collect();
    assert_eq!(halves, vec![1, 1]);
    for s in network.segments() {
        assert_eq!(s.bezier_curves().len(), s.control_point_count() + 1);
        assert!(s.touches(junction));
    }
}

#[test]
fn test_split_segment_errors() {
    let (mut network, _, _, seg) = straight_network();
    assert_eq!(
        network.split_segment_at(99, 0, 0.5),
        Err(RoadNetworkError::SegmentNotFound(99))
    );
    assert_eq!(
        network.split_segment_at(seg, 3, 0.5),
        Err(RoadNetworkError::CurveIndexOutOfRange {
            segment: seg,
            index: 3,
            len: 1
        })
    );
    assert_eq!(network.node_count(), 2);
}

#[test]
fn test_move_node_rebuilds_all_adjacent_segments() {
    let (mut network, a, b, seg) = straight_network();
    let c = network.add_node(Vec2::new(100.0, 100.0), NodeKind::Junction);
    let other = network.add_segment(b, c, Vec::new(), 50.0).expect("ok");

    network.move_node(b, Vec2::new(120.0, 20.0)).expect("Node existiert");

    let first = network.segment(seg).expect("seg");
    assert_eq!(first.bezier_curves()[0].p3, Vec2::new(120.0, 20.0));
    let second = network.segment(other).expect("other");
    assert_eq!(second.bezier_curves()[0].p0, Vec2::new(120.0, 20.0));
    assert_eq!(network.other_segments_at(b, seg), vec![other]);
    assert_eq!(network.node(a).expect("a").position(), Vec2::ZERO);
}

#[test]
fn test_control_point_mutators_keep_curves_in_sync() {
    let (mut network, _, _, seg) = straight_network();

    network
        .insert_control_point(seg, 0, ControlPoint::sharp(Vec2::new(50.0, 30.0)))
        .expect("Index 0 gültig");
    assert_eq!(network.segment(seg).expect("seg").bezier_curves().len(), 2);

    network
        .move_control_point(seg, 0, Vec2::new(60.0, 40.0))
        .expect("Index 0 gültig");
    assert_eq!(
        network.segment(seg).expect("seg").bezier_curves()[0].p3,
        Vec2::new(60.0, 40.0)
    );

    let value = network
        .set_control_point_smoothing(seg, 0, 1.7)
        .expect("Index 0 gültig");
    assert_eq!(value, 1.0);

    assert_eq!(
        network.remove_control_point(seg, 5),
        Err(RoadNetworkError::ControlPointOutOfRange {
            segment: seg,
            index: 5,
            len: 1
        })
    );
    let removed = network.remove_control_point(seg, 0).expect("Index 0 gültig");
    assert_eq!(removed.smoothing, 1.0);
    assert_eq!(network.segment(seg).expect("seg").bezier_curves().len(), 1);
}
