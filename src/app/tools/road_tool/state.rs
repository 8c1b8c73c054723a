//! Zustandstypen des Straßen-Tools.

use glam::Vec2;

use crate::core::{BoundarySide, NodeId, SegmentId};
use crate::shared::ControlPoint;

/// Expliziter Zustand des Tools. Create- und Edit-Modus schließen sich aus.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToolState {
    #[default]
    Inactive,
    /// Create-Modus, wartet auf einen Startpunkt
    Idle,
    /// Create-Modus, Straße im Bau
    Drawing(DrawingSession),
    /// Edit-Modus
    Editing(EditSelection),
    /// Edit-Modus, Griff wird gezogen
    EditingDragging(DragSession),
}

/// Laufende Zeichnung.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSession {
    pub start_node: NodeId,
    /// Gezeichnete Punkte; der erste ist die Position des Start-Nodes
    pub points: Vec<ControlPoint>,
    /// Offene Sackgassen-Bestätigung
    pub pending: Option<PendingFinish>,
}

impl DrawingSession {
    pub(crate) fn new(start_node: NodeId, seed: Vec2) -> Self {
        Self {
            start_node,
            points: vec![ControlPoint::sharp(seed)],
            pending: None,
        }
    }
}

/// Abschluss, der auf die Sackgassen-Bestätigung wartet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingFinish {
    pub end_pos: Vec2,
}

/// Griff eines Segments im Edit-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleRef {
    StartNode,
    EndNode,
    Control(usize),
}

impl HandleRef {
    pub fn is_node(self) -> bool {
        matches!(self, HandleRef::StartNode | HandleRef::EndNode)
    }
}

/// Auswahl im Edit-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSelection {
    #[default]
    Nothing,
    Segment(SegmentId),
    Handle(SegmentId, HandleRef),
}

impl EditSelection {
    pub fn segment(self) -> Option<SegmentId> {
        match self {
            EditSelection::Nothing => None,
            EditSelection::Segment(id) | EditSelection::Handle(id, _) => Some(id),
        }
    }

    pub fn handle(self) -> Option<HandleRef> {
        match self {
            EditSelection::Handle(_, handle) => Some(handle),
            _ => None,
        }
    }
}

/// Laufender Drag eines Griffs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub segment: SegmentId,
    pub handle: HandleRef,
    /// Abstand Cursor → Griff beim Drag-Start
    pub offset: Vec2,
    /// Kante, auf der ein Randknoten gleitet (beim Drag-Start festgelegt)
    pub boundary_side: Option<BoundarySide>,
}

/// Fangziel beim Zeichnen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapTarget {
    /// Weltrand oder Einstiegspunkt → neuer Randknoten
    Boundary { position: Vec2, side: BoundarySide },
    /// Bestehender Node
    Node { node_id: NodeId, position: Vec2 },
    /// Bestehendes Segment → Verzweigung
    Segment {
        segment_id: SegmentId,
        curve_index: usize,
        t: f32,
        position: Vec2,
    },
}

impl SnapTarget {
    pub fn position(&self) -> Vec2 {
        match *self {
            SnapTarget::Boundary { position, .. }
            | SnapTarget::Node { position, .. }
            | SnapTarget::Segment { position, .. } => position,
        }
    }
}

/// Ergebnis eines Abschlussversuchs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    /// Segment angelegt
    Created {
        segment: SegmentId,
        end_node: NodeId,
    },
    /// Sackgassen-Dialog offen
    AwaitingConfirmation,
    /// User hat die Sackgasse abgelehnt, Zeichnung läuft weiter
    Declined,
    /// Kein Abschluss möglich (falscher Zustand oder interner Fehler)
    Rejected,
}
