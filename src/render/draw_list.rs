//! Zeichenpuffer: CPU-seitige Geometrie für Netz, Vorschau und Overlays.
//!
//! Implementiert `RoadRenderer`. Das Tool befüllt den Puffer, die UI liest ihn
//! pro Frame und zeichnet ihn mit dem egui-Painter.

use glam::Vec2;

use crate::app::tools::{HandleRef, RoadRenderer};
use crate::core::{BoundaryEntryPoint, NodeId, NodeKind, RoadNetwork, RoadSegment, SegmentId};
use crate::shared::curve_math::points_to_bezier_curves;
use crate::shared::{ControlPoint, CubicBezier};

/// Gezeichnete Straße.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadShape {
    pub segment_id: SegmentId,
    pub curves: Vec<CubicBezier>,
    pub width: f32,
}

/// Gezeichneter Knoten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeMarker {
    pub node_id: NodeId,
    pub position: Vec2,
    pub kind: NodeKind,
    /// Loses Ende ohne Sackgassen-Bestätigung
    pub unconfirmed: bool,
}

/// Vorschau der im Bau befindlichen Straße.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewShape {
    /// Entwurfsmodus: gerade Linien durch alle Punkte
    Polyline(Vec<Vec2>),
    Curves(Vec<CubicBezier>),
}

/// Ein Griff im Edit-Modus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMarker {
    pub handle: HandleRef,
    pub position: Vec2,
    /// Nur für Kontrollpunkte gesetzt
    pub smoothing: Option<f32>,
    pub selected: bool,
}

/// Griffe des gewählten Segments samt Kontrollpolygon.
#[derive(Debug, Clone, PartialEq)]
pub struct EditHandles {
    pub segment_id: SegmentId,
    pub handles: Vec<HandleMarker>,
    pub control_polygon: Vec<Vec2>,
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    roads: Vec<RoadShape>,
    nodes: Vec<NodeMarker>,
    preview: Option<PreviewShape>,
    entry_points: Vec<BoundaryEntryPoint>,
    entry_highlight: Option<Vec2>,
    snap_indicator: Option<Vec2>,
    roads_highlighted: bool,
    edit_handles: Option<EditHandles>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft alle Overlays und übernimmt das Netz neu.
    pub fn reset(&mut self, network: &RoadNetwork) {
        *self = Self::new();
        self.render(network);
    }

    pub fn roads(&self) -> &[RoadShape] {
        &self.roads
    }

    pub fn nodes(&self) -> &[NodeMarker] {
        &self.nodes
    }

    pub fn preview(&self) -> Option<&PreviewShape> {
        self.preview.as_ref()
    }

    pub fn entry_points(&self) -> &[BoundaryEntryPoint] {
        &self.entry_points
    }

    pub fn entry_highlight(&self) -> Option<Vec2> {
        self.entry_highlight
    }

    pub fn snap_indicator(&self) -> Option<Vec2> {
        self.snap_indicator
    }

    pub fn roads_highlighted(&self) -> bool {
        self.roads_highlighted
    }

    pub fn edit_handles(&self) -> Option<&EditHandles> {
        self.edit_handles.as_ref()
    }
}

impl RoadRenderer for DrawList {
    fn render(&mut self, network: &RoadNetwork) {
        self.roads = network
            .segments()
            .map(|s| RoadShape {
                segment_id: s.id,
                curves: s.bezier_curves().to_vec(),
                width: s.width,
            })
            .collect();

        let unconfirmed: Vec<NodeId> = network
            .find_unconfirmed_dead_ends()
            .iter()
            .map(|n| n.id)
            .collect();
        self.nodes = network
            .nodes()
            .map(|n| NodeMarker {
                node_id: n.id,
                position: n.position(),
                kind: n.kind,
                unconfirmed: unconfirmed.contains(&n.id),
            })
            .collect();
    }

    fn render_preview(&mut self, points: &[ControlPoint], cursor: Option<Vec2>, draft_mode: bool) {
        let mut all = points.to_vec();
        if let Some(cursor) = cursor {
            all.push(ControlPoint::sharp(cursor));
        }

        self.preview = Some(if draft_mode || all.len() < 2 {
            PreviewShape::Polyline(all.iter().map(ControlPoint::position).collect())
        } else {
            PreviewShape::Curves(points_to_bezier_curves(&all))
        });
    }

    fn clear_preview(&mut self) {
        self.preview = None;
    }

    fn render_entry_points(&mut self, points: &[BoundaryEntryPoint]) {
        self.entry_points = points.to_vec();
    }

    fn clear_entry_points(&mut self) {
        self.entry_points.clear();
        self.entry_highlight = None;
    }

    fn render_snap_indicator(&mut self, pos: Vec2) {
        self.snap_indicator = Some(pos);
    }

    fn clear_snap_indicator(&mut self) {
        self.snap_indicator = None;
    }

    fn highlight_entry_point(&mut self, pos: Vec2) {
        self.entry_highlight = Some(pos);
    }

    fn clear_entry_highlight(&mut self) {
        self.entry_highlight = None;
    }

    fn highlight_all_roads(&mut self, enabled: bool) {
        self.roads_highlighted = enabled;
    }

    fn render_edit_handles(
        &mut self,
        segment: &RoadSegment,
        network: &RoadNetwork,
        selected: Option<HandleRef>,
    ) {
        let (Some(start), Some(end)) = (
            network.node(segment.start_node_id),
            network.node(segment.end_node_id),
        ) else {
            log::warn!("Griffe für Segment {} ohne Endpunkte", segment.id);
            self.edit_handles = None;
            return;
        };

        let mut handles = vec![HandleMarker {
            handle: HandleRef::StartNode,
            position: start.position(),
            smoothing: None,
            selected: selected == Some(HandleRef::StartNode),
        }];
        handles.extend(segment.control_points().iter().enumerate().map(|(i, cp)| {
            HandleMarker {
                handle: HandleRef::Control(i),
                position: cp.position(),
                smoothing: Some(cp.smoothing),
                selected: selected == Some(HandleRef::Control(i)),
            }
        }));
        handles.push(HandleMarker {
            handle: HandleRef::EndNode,
            position: end.position(),
            smoothing: None,
            selected: selected == Some(HandleRef::EndNode),
        });

        let control_polygon = segment
            .point_sequence(start, end)
            .iter()
            .map(ControlPoint::position)
            .collect();

        self.edit_handles = Some(EditHandles {
            segment_id: segment.id,
            handles,
            control_polygon,
        });
    }

    fn clear_edit_handles(&mut self) {
        self.edit_handles = None;
    }
}
