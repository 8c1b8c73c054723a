//! Ende-zu-Ende-Abläufe über Controller, AppState, DrawList und UiState.

use glam::Vec2;
use road_network_editor::app::tools::{PointerButton, ToolKey};
use road_network_editor::{
    AppController, AppIntent, AppState, ControlPoint, NodeKind, ToolEvent, ToolMode,
};

/// Viewport 1000×1000 mit Kamera in der Weltmitte (500,500): Bildschirm = Welt.
fn setup() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: Vec2::new(1000.0, 1000.0),
            },
        )
        .expect("Resize");
    (controller, state)
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::Tool(ToolEvent::PointerDown {
            screen: Vec2::new(x, y),
            button: PointerButton::Primary,
        }),
    );
}

fn double_click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::Tool(ToolEvent::DoubleClick {
            screen: Vec2::new(x, y),
        }),
    );
}

fn wheel(controller: &mut AppController, state: &mut AppState, delta_y: f32) {
    send(
        controller,
        state,
        AppIntent::Tool(ToolEvent::Wheel {
            screen: Vec2::new(500.0, 500.0),
            delta_y,
        }),
    );
}

#[test]
fn test_draw_road_from_edge_to_edge() {
    let (mut c, mut s) = setup();
    send(&mut c, &mut s, AppIntent::ToggleCreateMode);
    assert_eq!(s.ui.mode, ToolMode::Create);
    assert_eq!(s.draw_list.entry_points().len(), s.tool.entry_points().len());

    // Einstiegspunkt oben bei x = -500 + 75 + 6·150
    click(&mut c, &mut s, 475.0, -500.0);
    assert!(s.tool.is_drawing());
    assert!(s.draw_list.entry_points().is_empty());

    click(&mut c, &mut s, 475.0, 500.0);
    click(&mut c, &mut s, 480.0, 1490.0);

    assert!(!s.tool.is_drawing());
    assert_eq!(s.network.segment_count(), 1);
    assert_eq!(s.draw_list.roads().len(), 1);
    assert!(s.draw_list.preview().is_none());
    assert!(s
        .network
        .nodes()
        .all(|n| n.kind == NodeKind::Boundary));
    assert!(s.ui.hint.is_some());
}

#[test]
fn test_dead_end_dialog_roundtrip() {
    let (mut c, mut s) = setup();
    send(&mut c, &mut s, AppIntent::ToggleCreateMode);
    click(&mut c, &mut s, 475.0, -500.0);
    double_click(&mut c, &mut s, 500.0, 500.0);
    assert!(s.ui.show_dead_end_dialog);

    send(&mut c, &mut s, AppIntent::DeadEndAnswered { confirmed: false });
    assert!(!s.ui.show_dead_end_dialog);
    assert!(s.tool.is_drawing());
    assert_eq!(s.network.segment_count(), 0);

    double_click(&mut c, &mut s, 500.0, 500.0);
    send(&mut c, &mut s, AppIntent::DeadEndAnswered { confirmed: true });
    assert_eq!(s.network.segment_count(), 1);
    let dead_end = s
        .network
        .nodes()
        .find(|n| n.kind == NodeKind::DeadEnd)
        .expect("Sackgasse");
    assert_eq!(dead_end.position(), Vec2::new(500.0, 500.0));
    assert!(s.network.find_unconfirmed_dead_ends().is_empty());
}

#[test]
fn test_switching_to_edit_mode_cancels_drawing() {
    let (mut c, mut s) = setup();
    send(&mut c, &mut s, AppIntent::ToggleCreateMode);
    click(&mut c, &mut s, 475.0, -500.0);
    assert_eq!(s.network.node_count(), 1);

    send(&mut c, &mut s, AppIntent::ToggleEditMode);
    assert_eq!(s.ui.mode, ToolMode::Edit);
    assert_eq!(s.network.node_count(), 0);
    assert!(s.draw_list.roads_highlighted());
}

#[test]
fn test_wheel_routes_to_camera_unless_tool_consumes_it() {
    let (mut c, mut s) = setup();
    let a = s.network.add_node(Vec2::new(-500.0, 500.0), NodeKind::Boundary);
    let b = s.network.add_node(Vec2::new(500.0, 500.0), NodeKind::DeadEnd);
    let seg = s
        .network
        .add_segment(a, b, vec![ControlPoint::sharp(Vec2::new(0.0, 300.0))], 50.0)
        .expect("ok");

    // Inaktiv: Kamera zoomt
    wheel(&mut c, &mut s, -1.0);
    let zoomed = s.view.camera.zoom;
    assert!(zoomed > 1.0);
    send(&mut c, &mut s, AppIntent::ResetCameraRequested);

    // Kontrollpunkt gewählt: Tool verbraucht das Rad
    send(&mut c, &mut s, AppIntent::ToggleEditMode);
    click(&mut c, &mut s, 0.0, 305.0);
    click(&mut c, &mut s, 0.0, 300.0);
    wheel(&mut c, &mut s, -1.0);

    assert_eq!(s.view.camera.zoom, 1.0);
    let smoothing = s.network.segment(seg).expect("Segment").control_points()[0].smoothing;
    assert!((smoothing - 0.1).abs() < 1e-5);
    let handles = s.draw_list.edit_handles().expect("Griffe");
    assert_eq!(handles.handles[1].smoothing, Some(smoothing));
}

#[test]
fn test_boundary_node_drag_stays_on_edge() {
    let (mut c, mut s) = setup();
    let a = s.network.add_node(Vec2::new(-500.0, 400.0), NodeKind::Boundary);
    let b = s.network.add_node(Vec2::new(300.0, 400.0), NodeKind::DeadEnd);
    s.network.add_segment(a, b, Vec::new(), 50.0).expect("ok");

    send(&mut c, &mut s, AppIntent::ToggleEditMode);
    click(&mut c, &mut s, 0.0, 410.0);
    click(&mut c, &mut s, -495.0, 400.0);
    click(&mut c, &mut s, -495.0, 400.0);

    for (x, y) in [(200.0, 900.0), (-900.0, -2000.0), (0.0, 2500.0)] {
        send(
            &mut c,
            &mut s,
            AppIntent::Tool(ToolEvent::PointerMove {
                screen: Vec2::new(x, y),
            }),
        );
        let node = s.network.node(a).expect("a");
        assert_eq!(node.x, -500.0);
        assert!((-500.0..=1500.0).contains(&node.y));
    }
    send(
        &mut c,
        &mut s,
        AppIntent::Tool(ToolEvent::PointerUp {
            screen: Vec2::ZERO,
        }),
    );
    assert_eq!(s.network.node(a).expect("a").y, 1500.0);
}

#[test]
fn test_save_and_reload_through_controller() {
    let (mut c, mut s) = setup();
    send(&mut c, &mut s, AppIntent::ToggleCreateMode);
    click(&mut c, &mut s, 475.0, -500.0);
    click(&mut c, &mut s, 475.0, 500.0);
    click(&mut c, &mut s, 480.0, 1490.0);

    let path = std::env::temp_dir().join(format!(
        "road_network_flow_{}.json",
        std::process::id()
    ));
    send(
        &mut c,
        &mut s,
        AppIntent::SaveFilePathSelected { path: path.clone() },
    );
    assert_eq!(s.ui.current_file_path.as_deref(), Some(path.as_path()));

    send(&mut c, &mut s, AppIntent::NewNetworkRequested);
    assert_eq!(s.network.node_count(), 0);
    assert_eq!(s.ui.mode, ToolMode::Inactive);
    assert!(s.draw_list.roads().is_empty());

    send(&mut c, &mut s, AppIntent::FileSelected { path: path.clone() });
    let _ = std::fs::remove_file(&path);
    assert_eq!(s.network.segment_count(), 1);
    assert_eq!(s.network.node_count(), 2);
    assert_eq!(s.draw_list.roads().len(), 1);

    // Neue IDs kollidieren nicht mit geladenen
    let fresh = s.network.add_node(Vec2::ZERO, NodeKind::Junction);
    assert!(s.network.segments().all(|seg| seg.id != fresh));
}

#[test]
fn test_loading_missing_file_reports_error() {
    let (mut c, mut s) = setup();
    let result = c.handle_intent(
        &mut s,
        AppIntent::FileSelected {
            path: "/nonexistent/netz.json".into(),
        },
    );
    assert!(result.is_err());
}

#[test]
fn test_keys_reach_the_tool() {
    let (mut c, mut s) = setup();
    send(&mut c, &mut s, AppIntent::ToggleCreateMode);
    send(&mut c, &mut s, AppIntent::Tool(ToolEvent::Key(ToolKey::Escape)));
    assert_eq!(s.ui.mode, ToolMode::Inactive);
    assert!(!s.tool.is_active());
}
