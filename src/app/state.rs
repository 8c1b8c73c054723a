//! Application State: Straßennetz, Tool, Kamera und UI-Zustand.

use std::path::PathBuf;

use glam::Vec2;

use super::tools::{RoadTool, RoadToolUi};
use crate::core::{Camera2D, RoadNetwork, WorldBounds};
use crate::render::DrawList;
use crate::shared::EditorOptions;

/// Welcher Tool-Modus ist in der Oberfläche aktiv?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Inactive,
    Create,
    Edit,
}

/// View-bezogener Zustand
#[derive(Debug, Clone)]
pub struct ViewState {
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: Vec2::ZERO,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-bezogener Zustand. Dient dem Straßen-Tool als UI-Schale.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktueller Hinweistext des Tools
    pub hint: Option<String>,
    pub mode: ToolMode,
    /// Sackgassen-Dialog sichtbar?
    pub show_dead_end_dialog: bool,
    pub show_file_dialog: bool,
    pub show_save_file_dialog: bool,
    /// Statusnachricht für Datei-Aktionen
    pub status_message: Option<String>,
    pub current_file_path: Option<PathBuf>,
}

impl RoadToolUi for UiState {
    fn show_hint(&mut self, text: &str) {
        self.hint = Some(text.to_string());
    }

    fn hide_hint(&mut self) {
        self.hint = None;
    }

    fn request_dead_end_confirm(&mut self) {
        self.show_dead_end_dialog = true;
    }

    fn set_active(&mut self) {
        self.mode = ToolMode::Create;
    }

    fn set_inactive(&mut self) {
        self.mode = ToolMode::Inactive;
    }

    fn set_edit_mode(&mut self) {
        self.mode = ToolMode::Edit;
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    pub network: RoadNetwork,
    pub tool: RoadTool,
    pub view: ViewState,
    pub ui: UiState,
    /// Zeichenpuffer, den das Tool als Renderer befüllt
    pub draw_list: DrawList,
    pub options: EditorOptions,
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren AppState mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren AppState mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let bounds = world_bounds_from(&options);
        let mut view = ViewState::new();
        view.camera.look_at(bounds.center());

        Self {
            network: RoadNetwork::new(),
            tool: RoadTool::new(bounds, options.road_tool),
            view,
            ui: UiState::default(),
            draw_list: DrawList::new(),
            options,
            should_exit: false,
        }
    }

    pub fn world_bounds(&self) -> WorldBounds {
        *self.tool.bounds()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// `[min_x, min_y, max_x, max_y]` aus den Optionen.
pub fn world_bounds_from(options: &EditorOptions) -> WorldBounds {
    let [min_x, min_y, max_x, max_y] = options.world_bounds;
    WorldBounds::new(min_x, min_y, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_state_tracks_tool_mode() {
        let mut ui = UiState::default();
        ui.set_active();
        assert_eq!(ui.mode, ToolMode::Create);
        ui.set_edit_mode();
        assert_eq!(ui.mode, ToolMode::Edit);
        ui.set_inactive();
        assert_eq!(ui.mode, ToolMode::Inactive);
    }

    #[test]
    fn test_ui_state_hint_and_dialog() {
        let mut ui = UiState::default();
        ui.show_hint("Hallo");
        assert_eq!(ui.hint.as_deref(), Some("Hallo"));
        ui.hide_hint();
        assert!(ui.hint.is_none());

        ui.request_dead_end_confirm();
        assert!(ui.show_dead_end_dialog);
    }

    #[test]
    fn test_new_state_centers_camera_on_world() {
        let state = AppState::new();
        assert_eq!(state.view.camera.position, Vec2::new(500.0, 500.0));
        assert!(!state.tool.is_active());
    }
}
