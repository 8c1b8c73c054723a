//! Use-Case-Funktionen für Kamera-Steuerung.

use glam::Vec2;

use crate::app::AppState;

/// Setzt die Kamera auf die Weltmitte mit Zoom 1 zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Default::default();
    state.view.camera.look_at(state.world_bounds().center());
}

/// Zoomt um `factor`, geklemmt auf die Zoom-Grenzen aus den Optionen.
///
/// Mit `screen_anchor` bleibt der Weltpunkt unter dem Anker stabil.
pub fn zoom_towards(state: &mut AppState, factor: f32, screen_anchor: Option<Vec2>) {
    let camera = &mut state.view.camera;
    let target = (camera.zoom * factor).clamp(
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
    if target == camera.zoom {
        return;
    }
    let effective = target / camera.zoom;

    match screen_anchor {
        Some(anchor) => camera.zoom_towards(effective, anchor, state.view.viewport_size),
        None => camera.zoom_by(effective),
    }
}

/// Mausrad-Zoom: Hochscrollen (negatives `delta_y`) zoomt hinein.
pub fn zoom_by_wheel(state: &mut AppState, delta_y: f32, screen_anchor: Vec2) {
    let step = state.options.camera_scroll_zoom_step;
    let factor = if delta_y < 0.0 {
        step
    } else if delta_y > 0.0 {
        1.0 / step
    } else {
        return;
    };
    zoom_towards(state, factor, Some(screen_anchor));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wheel_zoom_respects_option_limits() {
        let mut state = AppState::new();
        state.options.camera_zoom_max = 1.5;
        state.view.viewport_size = Vec2::new(800.0, 600.0);

        for _ in 0..20 {
            zoom_by_wheel(&mut state, -1.0, Vec2::new(400.0, 300.0));
        }
        assert_relative_eq!(state.view.camera.zoom, 1.5);
    }

    #[test]
    fn test_anchor_stays_fixed() {
        let mut state = AppState::new();
        state.view.viewport_size = Vec2::new(800.0, 600.0);
        let anchor = Vec2::new(100.0, 50.0);
        let size = state.view.viewport_size;
        let before = state.view.camera.screen_to_world(anchor, size);

        zoom_towards(&mut state, 2.0, Some(anchor));
        let after = state.view.camera.screen_to_world(anchor, size);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-3);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_wheel_delta_keeps_zoom() {
        let mut state = AppState::new();
        zoom_by_wheel(&mut state, 0.0, Vec2::ZERO);
        assert_eq!(state.view.camera.zoom, 1.0);
    }
}
