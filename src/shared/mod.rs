//! Geteilte, layer-neutrale Bausteine: Kurven-Mathematik und Optionen.

pub mod curve_math;
pub mod options;

pub use curve_math::{ControlPoint, CubicBezier, CurveHit};
pub use options::{EditorOptions, RoadToolOptions};
