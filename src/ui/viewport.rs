//! Zeichnet den `DrawList` mit dem egui-Painter in den Viewport.

use egui::epaint::CubicBezierShape;
use egui::{Color32, Pos2, Stroke};
use glam::Vec2;

use crate::core::{Camera2D, NodeKind, WorldBounds};
use crate::render::{DrawList, PreviewShape};
use crate::shared::CubicBezier;

const BACKGROUND: Color32 = Color32::from_rgb(38, 44, 38);
const WORLD_FILL: Color32 = Color32::from_rgb(62, 84, 56);
const ROAD_COLOR: Color32 = Color32::from_rgb(90, 90, 96);
const ROAD_HIGHLIGHT: Color32 = Color32::from_rgb(120, 120, 150);
const ROAD_CENTER: Color32 = Color32::from_rgb(220, 210, 120);
const BOUNDARY_COLOR: Color32 = Color32::from_rgb(80, 160, 255);
const JUNCTION_COLOR: Color32 = Color32::from_rgb(255, 170, 60);
const DEAD_END_COLOR: Color32 = Color32::from_rgb(230, 70, 70);
const UNCONFIRMED_COLOR: Color32 = Color32::YELLOW;
const ENTRY_COLOR: Color32 = Color32::from_rgb(100, 230, 120);
const PREVIEW_COLOR: Color32 = Color32::from_rgb(255, 255, 255);
const HANDLE_COLOR: Color32 = Color32::from_rgb(240, 240, 240);
const HANDLE_SELECTED: Color32 = Color32::from_rgb(255, 120, 220);

/// Bildschirm-Radien in Pixeln
const NODE_RADIUS: f32 = 6.0;
const ENTRY_RADIUS: f32 = 5.0;
const HANDLE_RADIUS: f32 = 6.0;
const SNAP_RADIUS: f32 = 10.0;

/// Welt → Bildschirm für ein Viewport-Rechteck.
struct Projection {
    camera: Camera2D,
    rect: egui::Rect,
}

impl Projection {
    fn pos(&self, world: Vec2) -> Pos2 {
        let size = Vec2::new(self.rect.width(), self.rect.height());
        let local = self.camera.world_to_screen(world, size);
        Pos2::new(self.rect.min.x + local.x, self.rect.min.y + local.y)
    }

    fn curve(&self, curve: &CubicBezier) -> [Pos2; 4] {
        [
            self.pos(curve.p0),
            self.pos(curve.p1),
            self.pos(curve.p2),
            self.pos(curve.p3),
        ]
    }
}

fn node_color(kind: NodeKind) -> Color32 {
    match kind {
        NodeKind::Boundary => BOUNDARY_COLOR,
        NodeKind::Junction => JUNCTION_COLOR,
        NodeKind::DeadEnd => DEAD_END_COLOR,
    }
}

/// Zeichnet Weltfläche, Netz und alle Overlays.
pub fn paint_viewport(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    bounds: &WorldBounds,
    draw_list: &DrawList,
) {
    let proj = Projection {
        camera: camera.clone(),
        rect,
    };
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let world_rect = egui::Rect::from_two_pos(
        proj.pos(Vec2::new(bounds.min_x, bounds.min_y)),
        proj.pos(Vec2::new(bounds.max_x, bounds.max_y)),
    );
    painter.rect_filled(world_rect, 0.0, WORLD_FILL);
    painter.rect_stroke(
        world_rect,
        0.0,
        Stroke::new(1.0, Color32::DARK_GRAY),
        egui::StrokeKind::Inside,
    );

    paint_roads(painter, &proj, draw_list, camera.zoom);
    paint_nodes(painter, &proj, draw_list);
    paint_entry_points(painter, &proj, draw_list);
    paint_preview(painter, &proj, draw_list);
    paint_edit_handles(painter, &proj, draw_list);

    if let Some(pos) = draw_list.snap_indicator() {
        painter.circle_stroke(proj.pos(pos), SNAP_RADIUS, Stroke::new(2.0, ENTRY_COLOR));
    }
}

fn paint_roads(painter: &egui::Painter, proj: &Projection, draw_list: &DrawList, zoom: f32) {
    let color = if draw_list.roads_highlighted() {
        ROAD_HIGHLIGHT
    } else {
        ROAD_COLOR
    };

    for road in draw_list.roads() {
        let stroke = Stroke::new((road.width * zoom).max(1.0), color);
        for curve in &road.curves {
            painter.add(CubicBezierShape::from_points_stroke(
                proj.curve(curve),
                false,
                Color32::TRANSPARENT,
                stroke,
            ));
        }
    }

    // Mittellinie über allen Fahrbahnen
    for road in draw_list.roads() {
        for curve in &road.curves {
            painter.add(CubicBezierShape::from_points_stroke(
                proj.curve(curve),
                false,
                Color32::TRANSPARENT,
                Stroke::new(1.0, ROAD_CENTER),
            ));
        }
    }
}

fn paint_nodes(painter: &egui::Painter, proj: &Projection, draw_list: &DrawList) {
    for node in draw_list.nodes() {
        let center = proj.pos(node.position);
        painter.circle_filled(center, NODE_RADIUS, node_color(node.kind));
        if node.unconfirmed {
            painter.circle_stroke(center, NODE_RADIUS + 3.0, Stroke::new(2.0, UNCONFIRMED_COLOR));
        }
    }
}

fn paint_entry_points(painter: &egui::Painter, proj: &Projection, draw_list: &DrawList) {
    for ep in draw_list.entry_points() {
        painter.circle_stroke(proj.pos(ep.position), ENTRY_RADIUS, Stroke::new(2.0, ENTRY_COLOR));
    }
    if let Some(pos) = draw_list.entry_highlight() {
        painter.circle_filled(proj.pos(pos), ENTRY_RADIUS + 2.0, ENTRY_COLOR);
    }
}

fn paint_preview(painter: &egui::Painter, proj: &Projection, draw_list: &DrawList) {
    let stroke = Stroke::new(2.0, PREVIEW_COLOR);
    match draw_list.preview() {
        Some(PreviewShape::Polyline(points)) => {
            let screen: Vec<Pos2> = points.iter().map(|p| proj.pos(*p)).collect();
            for p in &screen {
                painter.circle_filled(*p, 3.0, PREVIEW_COLOR);
            }
            if screen.len() >= 2 {
                painter.line(screen, stroke);
            }
        }
        Some(PreviewShape::Curves(curves)) => {
            for curve in curves {
                let points = proj.curve(curve);
                painter.circle_filled(points[0], 3.0, PREVIEW_COLOR);
                painter.add(CubicBezierShape::from_points_stroke(
                    points,
                    false,
                    Color32::TRANSPARENT,
                    stroke,
                ));
            }
        }
        None => {}
    }
}

fn paint_edit_handles(painter: &egui::Painter, proj: &Projection, draw_list: &DrawList) {
    let Some(handles) = draw_list.edit_handles() else {
        return;
    };

    let polygon: Vec<Pos2> = handles
        .control_polygon
        .iter()
        .map(|p| proj.pos(*p))
        .collect();
    if polygon.len() >= 2 {
        painter.line(polygon, Stroke::new(1.0, Color32::from_white_alpha(90)));
    }

    for marker in &handles.handles {
        let center = proj.pos(marker.position);
        let color = if marker.selected {
            HANDLE_SELECTED
        } else {
            HANDLE_COLOR
        };
        painter.circle_filled(center, HANDLE_RADIUS, color);

        // Glättungsring wächst mit dem Faktor
        if let Some(smoothing) = marker.smoothing {
            if smoothing > 0.0 {
                painter.circle_stroke(
                    center,
                    HANDLE_RADIUS + 2.0 + smoothing * 8.0,
                    Stroke::new(1.5, color),
                );
            }
        }
    }
}
