//! Application Controller für zentrale Event-Verarbeitung.

use super::tools::ToolEvent;
use super::use_cases;
use super::{AppIntent, AppState};
use crate::shared::EditorOptions;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent. Datei-Fehler werden an den Aufrufer gereicht.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        match intent {
            // === Straßen-Tool ===
            AppIntent::Tool(event) => {
                let response = use_cases::road_tool::dispatch_event(state, event);
                // Nicht verbrauchtes Mausrad zoomt die Kamera
                if let ToolEvent::Wheel { screen, delta_y } = event {
                    if !response.is_consumed() {
                        use_cases::camera::zoom_by_wheel(state, delta_y, screen);
                    }
                }
            }
            AppIntent::ToggleCreateMode => use_cases::road_tool::toggle_create_mode(state),
            AppIntent::ToggleEditMode => use_cases::road_tool::toggle_edit_mode(state),
            AppIntent::ToggleDraftMode => use_cases::road_tool::toggle_draft_mode(state),
            AppIntent::DeadEndAnswered { confirmed } => {
                use_cases::road_tool::answer_dead_end(state, confirmed)
            }

            // === Datei-I/O ===
            AppIntent::NewNetworkRequested => use_cases::file_io::new_network(state),
            AppIntent::OpenFileRequested => use_cases::file_io::request_open_file(state),
            AppIntent::SaveRequested => use_cases::file_io::save_current(state)?,
            AppIntent::SaveAsRequested => use_cases::file_io::request_save_file(state),
            AppIntent::FileSelected { path } => {
                use_cases::file_io::load_selected_file(state, &path)?
            }
            AppIntent::SaveFilePathSelected { path } => {
                use_cases::file_io::save_to_path(state, &path)?
            }

            // === Kamera & Viewport ===
            AppIntent::ViewportResized { size } => state.view.viewport_size = size,
            AppIntent::CameraPan { screen_delta } => state.view.camera.pan_screen(screen_delta),
            AppIntent::CameraZoom {
                factor,
                screen_anchor,
            } => use_cases::camera::zoom_towards(state, factor, screen_anchor),
            AppIntent::ResetCameraRequested => use_cases::camera::reset_camera(state),

            // === Optionen ===
            AppIntent::SaveOptionsRequested => {
                state.options.save_to_file(&EditorOptions::config_path())?
            }

            AppIntent::ExitRequested => state.should_exit = true,
        }

        Ok(())
    }
}
