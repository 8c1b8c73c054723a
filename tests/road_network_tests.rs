use approx::assert_relative_eq;
use glam::Vec2;
use road_network_editor::shared::curve_math::{
    point_on_cubic, points_to_bezier_curves, split_cubic,
};
use road_network_editor::{ControlPoint, NodeKind, RoadNetwork, WorldBounds};

#[test]
fn test_cubic_endpoints_and_split_continuity() {
    let curves = [
        [Vec2::ZERO, Vec2::new(10.0, 40.0), Vec2::new(60.0, -20.0), Vec2::new(90.0, 5.0)],
        [Vec2::new(-5.0, 3.0), Vec2::new(-5.0, 3.0), Vec2::new(7.0, 7.0), Vec2::new(7.0, 7.0)],
    ];
    for [p0, p1, p2, p3] in curves {
        assert_eq!(point_on_cubic(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(point_on_cubic(p0, p1, p2, p3, 1.0), p3);

        for t in [0.2, 0.5, 0.9] {
            let mid = point_on_cubic(p0, p1, p2, p3, t);
            let (left, right) = split_cubic(p0, p1, p2, p3, t);
            assert_relative_eq!(left.point_at(1.0).x, mid.x, epsilon = 1e-4);
            assert_relative_eq!(left.point_at(1.0).y, mid.y, epsilon = 1e-4);
            assert_relative_eq!(right.point_at(0.0).x, mid.x, epsilon = 1e-4);
            assert_relative_eq!(right.point_at(0.0).y, mid.y, epsilon = 1e-4);
        }
    }
}

#[test]
fn test_points_to_curves_chain_through_inputs() {
    let points: Vec<ControlPoint> = [(0.0, 0.0), (50.0, 20.0), (120.0, -10.0), (200.0, 40.0)]
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| ControlPoint::new(x, y, i as f32 * 0.3))
        .collect();

    let curves = points_to_bezier_curves(&points);
    assert_eq!(curves.len(), points.len() - 1);
    for (i, curve) in curves.iter().enumerate() {
        assert_eq!(curve.p0, points[i].position());
        assert_eq!(curve.p3, points[i + 1].position());
    }
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
}

#[test]
fn test_straight_segment_and_midpoint_split() {
    let mut network = RoadNetwork::new();
    let a = network.add_node(Vec2::new(0.0, 0.0), NodeKind::Boundary);
    let b = network.add_node(Vec2::new(100.0, 0.0), NodeKind::Boundary);
    assert_eq!((a, b), (1, 2));

    let s = network.add_segment(a, b, Vec::new(), 50.0).expect("Nodes existieren");
    let segment = network.segment(s).expect("Segment");
    assert_eq!(segment.bezier_curves().len(), 1);
    assert!(segment.to_svg_path().starts_with("M 0 0"));

    let junction = network.split_segment_at(s, 0, 0.5).expect("Split");
    let node = network.node(junction).expect("Kreuzung");
    assert_eq!(node.kind, NodeKind::Junction);
    assert!(node.position().distance(Vec2::new(50.0, 0.0)) < 1.0);
    assert!(!network.contains_segment(s));
    assert_eq!(network.segment_count(), 2);

    let mut chain: Vec<(u64, u64)> = network
        .segments()
        .map(|seg| (seg.start_node_id, seg.end_node_id))
        .collect();
    chain.sort();
    assert_eq!(chain, vec![(a, junction), (junction, b)]);
}

#[test]
fn test_curve_count_follows_control_points_after_every_edit() {
    let mut network = RoadNetwork::new();
    let a = network.add_node(Vec2::new(0.0, 0.0), NodeKind::Boundary);
    let b = network.add_node(Vec2::new(400.0, 0.0), NodeKind::DeadEnd);
    let s = network
        .add_segment(a, b, vec![ControlPoint::sharp(Vec2::new(100.0, 50.0))], 50.0)
        .expect("ok");

    let check = |network: &RoadNetwork| {
        let segment = network.segment(s).expect("Segment");
        assert_eq!(
            segment.bezier_curves().len(),
            segment.control_point_count() + 1
        );
    };

    check(&network);
    network
        .insert_control_point(s, 1, ControlPoint::smooth(Vec2::new(250.0, -40.0)))
        .expect("ok");
    check(&network);
    network.move_control_point(s, 0, Vec2::new(90.0, 70.0)).expect("ok");
    check(&network);
    network.set_control_point_smoothing(s, 0, 0.8).expect("ok");
    check(&network);
    network.move_node(b, Vec2::new(420.0, 30.0)).expect("ok");
    check(&network);
    network.remove_control_point(s, 1).expect("ok");
    check(&network);
}

#[test]
fn test_remove_node_leaves_no_dangling_edges() {
    let mut network = RoadNetwork::new();
    let hub = network.add_node(Vec2::new(0.0, 0.0), NodeKind::Junction);
    let spokes: Vec<u64> = (0..3)
        .map(|i| network.add_node(Vec2::new(100.0 * (i + 1) as f32, 0.0), NodeKind::DeadEnd))
        .collect();
    for &spoke in &spokes {
        network.add_segment(hub, spoke, Vec::new(), 50.0).expect("ok");
    }
    let before = network.node(spokes[0]).expect("spoke").edge_ids().clone();
    let extra = network.add_segment(spokes[0], spokes[1], Vec::new(), 50.0).expect("ok");
    network.remove_segment(extra);
    assert_eq!(network.node(spokes[0]).expect("spoke").edge_ids(), &before);

    network.remove_node(hub);
    assert_eq!(network.segment_count(), 0);
    for node in network.nodes() {
        assert!(node.edge_ids().iter().all(|id| network.contains_segment(*id)));
        assert_eq!(node.degree(), 0);
    }
}

#[test]
fn test_entry_points_skip_occupied_candidates() {
    let bounds = WorldBounds::new(0.0, 0.0, 1000.0, 1000.0);
    let mut network = RoadNetwork::new();

    let all = network.generate_boundary_entry_points(&bounds, 150.0);
    assert_eq!(all.len(), 28);
    let top: Vec<f32> = all
        .iter()
        .filter(|ep| ep.position.y == 0.0)
        .map(|ep| ep.position.x)
        .collect();
    assert_eq!(top, vec![75.0, 225.0, 375.0, 525.0, 675.0, 825.0, 975.0]);

    network.add_node(Vec2::new(375.0, 0.0), NodeKind::Boundary);
    let remaining = network.generate_boundary_entry_points(&bounds, 150.0);
    assert_eq!(remaining.len(), 27);
    assert!(remaining
        .iter()
        .all(|ep| ep.position.distance(Vec2::new(375.0, 0.0)) >= 60.0));
}

#[test]
fn test_boundary_projection_keeps_left_edge() {
    let bounds = WorldBounds::new(0.0, 0.0, 1000.0, 1000.0);
    let (side, _) = bounds.nearest_side(Vec2::new(0.0, 400.0));

    for target in [
        Vec2::new(350.0, 620.0),
        Vec2::new(-80.0, -300.0),
        Vec2::new(990.0, 1500.0),
    ] {
        let projected = bounds.project_onto_side(target, side);
        assert_eq!(projected.x, 0.0);
        assert!((0.0..=1000.0).contains(&projected.y));
    }
}
