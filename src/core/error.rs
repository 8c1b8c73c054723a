//! Fehlertypen des Straßennetzes.

use super::{NodeId, SegmentId};

/// Fehler bei Zugriffen auf nicht existierende Netz-Elemente.
///
/// Über die Tool-API sollten diese nie auftreten, da alle IDs aus
/// Live-Abfragen stammen. Sie signalisieren Programmierfehler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoadNetworkError {
    #[error("Node {0} nicht gefunden")]
    NodeNotFound(NodeId),
    #[error("Segment {0} nicht gefunden")]
    SegmentNotFound(SegmentId),
    /// Eine ID kommt im Snapshot mehrfach vor (Nodes und Segmente teilen sich den ID-Raum)
    #[error("ID {0} mehrfach vergeben")]
    DuplicateId(u64),
    #[error("Kurvenindex {index} ausserhalb des Bereichs (Segment {segment}, {len} Kurven)")]
    CurveIndexOutOfRange {
        segment: SegmentId,
        index: usize,
        len: usize,
    },
    #[error("Kontrollpunkt {index} ausserhalb des Bereichs (Segment {segment}, {len} Punkte)")]
    ControlPointOutOfRange {
        segment: SegmentId,
        index: usize,
        len: usize,
    },
}
