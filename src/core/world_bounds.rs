//! Weltgrenzen der Karte und Rand-Geometrie (Kanten, Projektion, Klemmung).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Eine der vier Randkanten der Welt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundarySide {
    /// y = min_y
    Top,
    /// y = max_y
    Bottom,
    /// x = min_x
    Left,
    /// x = max_x
    Right,
}

impl BoundarySide {
    /// Alle Kanten in der Prüfreihenfolge für Gleichstände.
    pub const ALL: [BoundarySide; 4] = [
        BoundarySide::Left,
        BoundarySide::Right,
        BoundarySide::Top,
        BoundarySide::Bottom,
    ];
}

/// Weltkoordinaten-Begrenzungen (achsenparalleles Rechteck, nur lesend genutzt)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldBounds {
    /// Minimale X-Koordinate (links)
    pub min_x: f32,
    /// Minimale Y-Koordinate (oben)
    pub min_y: f32,
    /// Maximale X-Koordinate (rechts)
    pub max_x: f32,
    /// Maximale Y-Koordinate (unten)
    pub max_y: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(-500.0, -500.0, 1500.0, 1500.0)
    }
}

impl WorldBounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Erstellt Bounds aus Kantenlänge (zentriert bei 0,0)
    pub fn from_map_size(size: f32) -> Self {
        let half = size / 2.0;
        Self::new(-half, -half, half, half)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// Klemmt einen Punkt in das Rechteck.
    pub fn clamp_point(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(self.min_x, self.max_x),
            pos.y.clamp(self.min_y, self.max_y),
        )
    }

    pub fn contains_point(&self, pos: Vec2) -> bool {
        pos.x >= self.min_x && pos.x <= self.max_x && pos.y >= self.min_y && pos.y <= self.max_y
    }

    /// Senkrechter Abstand zur (unendlich verlängerten) Kante.
    pub fn distance_to_side(&self, pos: Vec2, side: BoundarySide) -> f32 {
        match side {
            BoundarySide::Left => (pos.x - self.min_x).abs(),
            BoundarySide::Right => (pos.x - self.max_x).abs(),
            BoundarySide::Top => (pos.y - self.min_y).abs(),
            BoundarySide::Bottom => (pos.y - self.max_y).abs(),
        }
    }

    /// Nächste Kante mit Abstand. Gleichstand: Reihenfolge aus `BoundarySide::ALL`.
    pub fn nearest_side(&self, pos: Vec2) -> (BoundarySide, f32) {
        let mut best = (BoundarySide::Left, f32::INFINITY);
        for side in BoundarySide::ALL {
            let dist = self.distance_to_side(pos, side);
            if dist < best.1 {
                best = (side, dist);
            }
        }
        best
    }

    /// Projiziert einen Punkt auf eine Kante; die Koordinate entlang der Kante wird geklemmt.
    pub fn project_onto_side(&self, pos: Vec2, side: BoundarySide) -> Vec2 {
        match side {
            BoundarySide::Left => Vec2::new(self.min_x, pos.y.clamp(self.min_y, self.max_y)),
            BoundarySide::Right => Vec2::new(self.max_x, pos.y.clamp(self.min_y, self.max_y)),
            BoundarySide::Top => Vec2::new(pos.x.clamp(self.min_x, self.max_x), self.min_y),
            BoundarySide::Bottom => Vec2::new(pos.x.clamp(self.min_x, self.max_x), self.max_y),
        }
    }

    /// Nächste Kante innerhalb `threshold` inkl. projiziertem Punkt.
    pub fn nearest_edge_within(&self, pos: Vec2, threshold: f32) -> Option<(BoundarySide, Vec2)> {
        let (side, dist) = self.nearest_side(pos);
        (dist <= threshold).then(|| (side, self.project_onto_side(pos, side)))
    }

    /// Liegt der Punkt strikt näher als `threshold` an irgendeiner Kante?
    pub fn is_near_boundary(&self, pos: Vec2, threshold: f32) -> bool {
        BoundarySide::ALL
            .iter()
            .any(|&side| self.distance_to_side(pos, side) < threshold)
    }

    /// Setzt einen Punkt auf die nächste Kante, ohne entlang der Kante zu klemmen.
    pub fn snap_to_nearest_side(&self, pos: Vec2) -> (BoundarySide, Vec2) {
        let (side, _) = self.nearest_side(pos);
        let snapped = match side {
            BoundarySide::Left => Vec2::new(self.min_x, pos.y),
            BoundarySide::Right => Vec2::new(self.max_x, pos.y),
            BoundarySide::Top => Vec2::new(pos.x, self.min_y),
            BoundarySide::Bottom => Vec2::new(pos.x, self.max_y),
        };
        (side, snapped)
    }
}
