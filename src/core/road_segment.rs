//! Straßensegment: Kante zwischen zwei Nodes als Kette kubischer Bézier-Kurven.

use glam::Vec2;

use super::{NodeId, RoadNode, SegmentId};
use crate::shared::curve_math::{
    curves_to_svg_path, points_to_bezier_curves, ControlPoint, CubicBezier, DEFAULT_CURVE_STEPS,
};

/// Treffer einer Nächster-Punkt-Suche auf einem Segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Nächster gesampelter Punkt
    pub point: Vec2,
    /// Kurvenparameter innerhalb der getroffenen Kurve
    pub t: f32,
    /// Index der getroffenen Kurve in `bezier_curves()`
    pub curve_index: usize,
    /// Abstand zum Suchpunkt
    pub distance: f32,
}

/// Segment zwischen `start_node_id` und `end_node_id`.
///
/// Die Kurven sind abgeleitet aus Start, Kontrollpunkten und Ende und werden
/// nach jeder Mutation über `rebuild` neu berechnet. Kontrollpunkte sind nur
/// über `RoadNetwork` veränderbar.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadSegment {
    pub id: SegmentId,
    pub start_node_id: NodeId,
    pub end_node_id: NodeId,
    /// Straßenbreite in Welteinheiten
    pub width: f32,
    control_points: Vec<ControlPoint>,
    bezier_curves: Vec<CubicBezier>,
}

impl RoadSegment {
    /// Erstellt ein Segment ohne Kurven; der Aufrufer muss danach `rebuild` aufrufen.
    pub(crate) fn new(
        id: SegmentId,
        start_node_id: NodeId,
        end_node_id: NodeId,
        control_points: Vec<ControlPoint>,
        width: f32,
    ) -> Self {
        Self {
            id,
            start_node_id,
            end_node_id,
            width,
            control_points,
            bezier_curves: Vec::new(),
        }
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    pub fn control_point_count(&self) -> usize {
        self.control_points.len()
    }

    pub fn bezier_curves(&self) -> &[CubicBezier] {
        &self.bezier_curves
    }

    /// Ist `node_id` Start oder Ende dieses Segments?
    pub fn touches(&self, node_id: NodeId) -> bool {
        self.start_node_id == node_id || self.end_node_id == node_id
    }

    /// Gegenüberliegender Endpunkt zu `node_id`.
    pub fn other_end(&self, node_id: NodeId) -> Option<NodeId> {
        if self.start_node_id == node_id {
            Some(self.end_node_id)
        } else if self.end_node_id == node_id {
            Some(self.start_node_id)
        } else {
            None
        }
    }

    /// Volle Punktfolge `[Start, Kontrollpunkte…, Ende]`, Endpunkte scharf.
    pub fn point_sequence(&self, start: &RoadNode, end: &RoadNode) -> Vec<ControlPoint> {
        let mut points = Vec::with_capacity(self.control_points.len() + 2);
        points.push(ControlPoint::sharp(start.position()));
        points.extend_from_slice(&self.control_points);
        points.push(ControlPoint::sharp(end.position()));
        points
    }

    /// Berechnet die Kurvenkette aus den aktuellen Endpunkt-Positionen neu.
    pub fn rebuild(&mut self, start: &RoadNode, end: &RoadNode) {
        let points = self.point_sequence(start, end);
        self.bezier_curves = points_to_bezier_curves(&points);
    }

    /// Nächster Punkt über alle Kurven; bei Gleichstand gewinnt die erste Kurve.
    pub fn closest_point(&self, world_pos: Vec2) -> Option<SegmentHit> {
        let mut best: Option<SegmentHit> = None;
        for (curve_index, curve) in self.bezier_curves.iter().enumerate() {
            let hit = curve.closest_point(world_pos, DEFAULT_CURVE_STEPS);
            if best.is_none_or(|b| hit.distance < b.distance) {
                best = Some(SegmentHit {
                    point: hit.point,
                    t: hit.t,
                    curve_index,
                    distance: hit.distance,
                });
            }
        }
        best
    }

    /// Angenäherte Bogenlänge (Summe über alle Kurven).
    pub fn length(&self) -> f32 {
        self.bezier_curves
            .iter()
            .map(|c| c.length(DEFAULT_CURVE_STEPS))
            .sum()
    }

    pub fn to_svg_path(&self) -> String {
        curves_to_svg_path(&self.bezier_curves)
    }

    pub(crate) fn control_points_mut(&mut self) -> &mut Vec<ControlPoint> {
        &mut self.control_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeKind;
    use approx::assert_relative_eq;

    fn nodes() -> (RoadNode, RoadNode) {
        (
            RoadNode::new(1, Vec2::new(0.0, 0.0), NodeKind::Boundary),
            RoadNode::new(2, Vec2::new(100.0, 0.0), NodeKind::Boundary),
        )
    }

    #[test]
    fn test_rebuild_curve_count() {
        let (a, b) = nodes();
        let mut seg = RoadSegment::new(
            3,
            1,
            2,
            vec![
                ControlPoint::smooth(Vec2::new(30.0, 20.0)),
                ControlPoint::sharp(Vec2::new(60.0, -20.0)),
            ],
            50.0,
        );
        assert!(seg.bezier_curves().is_empty());
        seg.rebuild(&a, &b);
        assert_eq!(seg.bezier_curves().len(), seg.control_point_count() + 1);
        assert_eq!(seg.bezier_curves()[0].p0, a.position());
        assert_eq!(seg.bezier_curves()[2].p3, b.position());
    }

    #[test]
    fn test_straight_segment_length_and_path() {
        let (a, b) = nodes();
        let mut seg = RoadSegment::new(3, 1, 2, Vec::new(), 50.0);
        seg.rebuild(&a, &b);
        assert_relative_eq!(seg.length(), 100.0, epsilon = 1e-3);
        assert!(seg.to_svg_path().starts_with("M 0 0"));
    }

    #[test]
    fn test_closest_point_reports_curve_index() {
        let (a, b) = nodes();
        let mut seg = RoadSegment::new(
            3,
            1,
            2,
            vec![ControlPoint::sharp(Vec2::new(50.0, 50.0))],
            50.0,
        );
        seg.rebuild(&a, &b);

        let hit = seg.closest_point(Vec2::new(75.0, 26.0)).expect("Treffer erwartet");
        assert_eq!(hit.curve_index, 1);
        assert!(hit.distance < 2.0);
    }

    #[test]
    fn test_other_end() {
        let seg = RoadSegment::new(3, 1, 2, Vec::new(), 50.0);
        assert_eq!(seg.other_end(1), Some(2));
        assert_eq!(seg.other_end(2), Some(1));
        assert_eq!(seg.other_end(9), None);
        assert!(seg.touches(2));
    }
}
