//! Use-Case-Funktionen für das Straßen-Tool.
//!
//! Leiht dem Tool pro Aufruf Netz, Zeichenpuffer, UI-Schale und Kamera.

use crate::app::tools::{EventResponse, FinishOutcome, RoadTool, ToolEnv, ToolEvent};
use crate::app::AppState;
use crate::core::ViewportCamera;

/// Führt `f` mit dem Tool und einer frisch geliehenen `ToolEnv` aus.
pub fn with_tool_env<R>(state: &mut AppState, f: impl FnOnce(&mut RoadTool, &mut ToolEnv) -> R) -> R {
    let camera = ViewportCamera::new(&state.view.camera, state.view.viewport_size);
    let mut env = ToolEnv {
        network: &mut state.network,
        renderer: &mut state.draw_list,
        ui: &mut state.ui,
        camera: &camera,
    };
    f(&mut state.tool, &mut env)
}

/// Reicht ein Eingabe-Event an das Tool weiter.
pub fn dispatch_event(state: &mut AppState, event: ToolEvent) -> EventResponse {
    with_tool_env(state, |tool, env| tool.handle_event(event, env))
}

/// Create-Modus umschalten. Ein aktiver Edit-Modus wird vorher beendet.
pub fn toggle_create_mode(state: &mut AppState) {
    with_tool_env(state, |tool, env| {
        if tool.is_active() {
            tool.deactivate(env);
        } else {
            tool.deactivate_edit_mode(env);
            tool.activate(env);
        }
    });
}

/// Edit-Modus umschalten. Ein aktiver Create-Modus wird vorher beendet.
pub fn toggle_edit_mode(state: &mut AppState) {
    with_tool_env(state, |tool, env| {
        if tool.is_edit_mode() {
            tool.deactivate_edit_mode(env);
        } else {
            tool.deactivate(env);
            tool.activate_edit_mode(env);
        }
    });
}

pub fn toggle_draft_mode(state: &mut AppState) {
    with_tool_env(state, |tool, env| {
        tool.toggle_draft_mode(env);
    });
}

/// Antwort aus dem Sackgassen-Dialog an das Tool zurückgeben.
pub fn answer_dead_end(state: &mut AppState, confirmed: bool) {
    state.ui.show_dead_end_dialog = false;
    let outcome = with_tool_env(state, |tool, env| tool.resolve_dead_end(confirmed, env));
    if outcome == FinishOutcome::Rejected {
        log::warn!("Sackgassen-Antwort ohne offene Anfrage ignoriert");
    }
}

/// Beendet beide Modi, z.B. vor dem Austausch des Netzes.
pub fn deactivate_all(state: &mut AppState) {
    with_tool_env(state, |tool, env| {
        tool.deactivate(env);
        tool.deactivate_edit_mode(env);
    });
    state.ui.show_dead_end_dialog = false;
}
