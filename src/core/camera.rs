//! 2D-Kamera für Pan und Zoom.

use glam::Vec2;

/// Umrechnung Bildschirm → Welt (reine Koordinatentransformation).
pub trait ScreenToWorld {
    fn screen_to_world(&self, screen_pos: Vec2) -> Vec2;
}

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Weltposition in der Viewport-Mitte
    pub position: Vec2,
    /// Pixel pro Welteinheit (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 10.0;

    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera um ein Welt-Delta
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Verschiebt die Kamera um ein Bildschirm-Delta (Pixel)
    pub fn pan_screen(&mut self, screen_delta: Vec2) {
        self.position -= screen_delta / self.zoom;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Zoomt so, dass der Weltpunkt unter `screen_anchor` an Ort und Stelle bleibt.
    pub fn zoom_towards(&mut self, factor: f32, screen_anchor: Vec2, viewport_size: Vec2) {
        let before = self.screen_to_world(screen_anchor, viewport_size);
        self.zoom_by(factor);
        let after = self.screen_to_world(screen_anchor, viewport_size);
        self.position += before - after;
    }

    /// Konvertiert Viewport-Koordinaten (Ursprung oben links) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, viewport_size: Vec2) -> Vec2 {
        (screen_pos - viewport_size * 0.5) / self.zoom + self.position
    }

    /// Konvertiert Welt-Koordinaten zu Viewport-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2, viewport_size: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom + viewport_size * 0.5
    }

    /// Welteinheiten pro Bildschirm-Pixel.
    pub fn world_per_pixel(&self) -> f32 {
        1.0 / self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

/// Kamera-Schnappschuss gebunden an eine Viewport-Größe.
#[derive(Debug, Clone, Copy)]
pub struct ViewportCamera {
    pub position: Vec2,
    pub zoom: f32,
    pub viewport_size: Vec2,
}

impl ViewportCamera {
    pub fn new(camera: &Camera2D, viewport_size: Vec2) -> Self {
        Self {
            position: camera.position,
            zoom: camera.zoom,
            viewport_size,
        }
    }
}

impl ScreenToWorld for ViewportCamera {
    fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.viewport_size * 0.5) / self.zoom + self.position
    }
}
