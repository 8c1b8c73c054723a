//! Reine Geometrie-Funktionen für kubische Bézier-Kurven und Catmull-Rom-Synthese.
//!
//! Layer-neutral: wird von `core` (Segment-Geometrie), `app::tools` (Preview,
//! Hit-Tests) und `render` genutzt, ohne Zirkel-Abhängigkeiten zu erzeugen.
//! Alle Funktionen sind zustandslos.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Schrittzahl für Längen- und Abstandsberechnung.
pub const DEFAULT_CURVE_STEPS: usize = 64;
/// Standard-Anzahl Samples für `sample_cubic`.
pub const DEFAULT_SAMPLE_COUNT: usize = 32;

/// Punkt einer Punktfolge mit Glättungsfaktor.
///
/// `smoothing` ∈ [0, 1]: 0 = scharfe Ecke, 1 = volle Catmull-Rom-Tangente.
/// Fehlt der Wert beim Deserialisieren, wird 0 angenommen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub smoothing: f32,
}

impl ControlPoint {
    /// Erstellt einen Punkt mit explizitem (geklemmtem) Glättungsfaktor.
    pub fn new(x: f32, y: f32, smoothing: f32) -> Self {
        Self {
            x,
            y,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// Scharfe Ecke (smoothing = 0).
    pub fn sharp(pos: Vec2) -> Self {
        Self::new(pos.x, pos.y, 0.0)
    }

    /// Volle Catmull-Rom-Glättung (smoothing = 1).
    pub fn smooth(pos: Vec2) -> Self {
        Self::new(pos.x, pos.y, 1.0)
    }

    /// Gibt eine Kopie mit geändertem Glättungsfaktor zurück.
    pub fn with_smoothing(self, smoothing: f32) -> Self {
        Self::new(self.x, self.y, smoothing)
    }

    /// Position als `Vec2`.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Setzt die Position, der Glättungsfaktor bleibt erhalten.
    pub fn set_position(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
    }
}

/// Ergebnis einer Nächster-Punkt-Suche auf einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveHit {
    /// Gesampelter Kurvenpunkt mit minimalem Abstand
    pub point: Vec2,
    /// Kurvenparameter des Treffers
    pub t: f32,
    /// Euklidischer Abstand zum Suchpunkt
    pub distance: f32,
}

/// Kubische Bézier-Kurve: Start `p0`, Steuerpunkte `p1`/`p2`, Ende `p3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicBezier {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Gerade Strecke als Bézier (Steuerpunkte auf den Sehnen-Dritteln).
    pub fn line(from: Vec2, to: Vec2) -> Self {
        let chord = to - from;
        Self::new(from, from + chord / 3.0, from + chord * 2.0 / 3.0, to)
    }

    pub fn point_at(&self, t: f32) -> Vec2 {
        point_on_cubic(self.p0, self.p1, self.p2, self.p3, t)
    }

    pub fn tangent_at(&self, t: f32) -> Vec2 {
        tangent_on_cubic(self.p0, self.p1, self.p2, self.p3, t)
    }

    pub fn length(&self, steps: usize) -> f32 {
        cubic_length(self.p0, self.p1, self.p2, self.p3, steps)
    }

    pub fn closest_point(&self, point: Vec2, steps: usize) -> CurveHit {
        distance_to_cubic(point, self.p0, self.p1, self.p2, self.p3, steps)
    }

    pub fn split(&self, t: f32) -> (CubicBezier, CubicBezier) {
        split_cubic(self.p0, self.p1, self.p2, self.p3, t)
    }

    pub fn sample(&self, count: usize) -> Vec<Vec2> {
        sample_cubic(self.p0, self.p1, self.p2, self.p3, count)
    }
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// `t` wird nicht geklemmt, der Aufrufer ist für [0, 1] verantwortlich.
pub fn point_on_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Erste Ableitung B'(t) der kubischen Bézier-Kurve.
pub fn tangent_on_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    3.0 * inv * inv * (p1 - p0) + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Approximierte Bogenlänge als Summe der Sehnen über `steps` gleichmäßige Samples.
pub fn cubic_length(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, steps: usize) -> f32 {
    let steps = steps.max(1);
    let mut length = 0.0;
    let mut prev = p0;
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        let p = point_on_cubic(p0, p1, p2, p3, t);
        length += prev.distance(p);
        prev = p;
    }
    length
}

/// Berechnet die inneren Bézier-Steuerpunkte für das Catmull-Rom-Segment p1 → p2.
///
/// Tangente an p1: `(p2 - p0) · smoothing1 / 3`, an p2: `(p3 - p1) · smoothing2 / 3`.
/// Bei smoothing = 0 liegt der Steuerpunkt exakt auf der Ecke.
pub fn catmull_rom_to_bezier(
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    smoothing1: f32,
    smoothing2: f32,
) -> (Vec2, Vec2) {
    let t1 = smoothing1 / 3.0;
    let t2 = smoothing2 / 3.0;
    let cp1 = p1 + (p2 - p0) * t1;
    let cp2 = p2 - (p3 - p1) * t2;
    (cp1, cp2)
}

/// Wandelt eine Punktfolge in eine Kette kubischer Bézier-Kurven um (eine pro Punktpaar).
///
/// An den Rändern werden Phantom-Punkte gespiegelt (`2·p0 − p1` bzw. symmetrisch am Ende),
/// damit Catmull-Rom überall vier Punkte Kontext hat. Der erste Steuerpunkt einer Kurve
/// nutzt die Glättung ihres Startpunkts, der zweite die ihres Endpunkts.
/// Weniger als zwei Punkte ergeben eine leere Liste.
///
/// Es gibt keinen impliziten Glättungswert: `ControlPoint` ohne `smoothing`
/// deserialisiert zu 0 (Polylinie). Für freie Punktfolgen mit voller
/// Catmull-Rom-Rundung `ControlPoint::smooth` verwenden.
pub fn points_to_bezier_curves(points: &[ControlPoint]) -> Vec<CubicBezier> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let mut curves = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let curr = points[i].position();
        let next = points[i + 1].position();
        let prev = if i > 0 {
            points[i - 1].position()
        } else {
            2.0 * curr - next
        };
        let next_next = if i + 2 < n {
            points[i + 2].position()
        } else {
            2.0 * points[n - 1].position() - points[n - 2].position()
        };

        let (cp1, cp2) = catmull_rom_to_bezier(
            prev,
            curr,
            next,
            next_next,
            points[i].smoothing,
            points[i + 1].smoothing,
        );
        curves.push(CubicBezier::new(curr, cp1, cp2, next));
    }
    curves
}

/// Gleichmäßige Samples (count + 1 Punkte inkl. Start und Ende).
pub fn sample_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, count: usize) -> Vec<Vec2> {
    let count = count.max(1);
    (0..=count)
        .map(|i| point_on_cubic(p0, p1, p2, p3, i as f32 / count as f32))
        .collect()
}

/// Nächster Kurvenpunkt per Brute-Force über `steps + 1` Samples.
///
/// Approximation, keine geschlossene Projektion. Bei Gleichstand gewinnt der
/// kleinste Parameter (strikter `<`-Vergleich).
pub fn distance_to_cubic(
    point: Vec2,
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    steps: usize,
) -> CurveHit {
    let steps = steps.max(1);
    let mut best = CurveHit {
        point: p0,
        t: 0.0,
        distance: f32::INFINITY,
    };
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let p = point_on_cubic(p0, p1, p2, p3, t);
        let dist = p.distance(point);
        if dist < best.distance {
            best = CurveHit {
                point: p,
                t,
                distance: dist,
            };
        }
    }
    best
}

/// Exakte De-Casteljau-Teilung bei `t`.
///
/// Gibt `(links, rechts)` zurück; links endet und rechts beginnt im Punkt B(t).
pub fn split_cubic(
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    t: f32,
) -> (CubicBezier, CubicBezier) {
    let a = p0.lerp(p1, t);
    let b = p1.lerp(p2, t);
    let c = p2.lerp(p3, t);
    let d = a.lerp(b, t);
    let e = b.lerp(c, t);
    let f = d.lerp(e, t);
    (CubicBezier::new(p0, a, d, f), CubicBezier::new(f, e, c, p3))
}

/// Serialisiert eine Kurvenkette als Pfad-String (`M x y C c1x c1y, c2x c2y, ex ey …`).
pub fn curves_to_svg_path(curves: &[CubicBezier]) -> String {
    let Some(first) = curves.first() else {
        return String::new();
    };

    let mut d = format!("M {} {}", first.p0.x, first.p0.y);
    for c in curves {
        d.push_str(&format!(
            " C {} {}, {} {}, {} {}",
            c.p1.x, c.p1.y, c.p2.x, c.p2.y, c.p3.x, c.p3.y
        ));
    }
    d
}

/// Serialisiert eine Punktfolge als Polyline-Pfad (`M x y L x y …`).
///
/// Ein einzelner Punkt ergibt nur das Move-Kommando.
pub fn points_to_polyline_path(points: &[Vec2]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut d = format!("M {} {}", first.x, first.y);
    for p in rest {
        d.push_str(&format!(" L {} {}", p.x, p.y));
    }
    d
}

/// Euklidischer Abstand.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
