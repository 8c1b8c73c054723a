//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, ToolMode};

/// Rendert die Status-Bar mit Tool-Hinweis und Netz-Kennzahlen
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mode = match state.ui.mode {
                ToolMode::Inactive => "Ansicht",
                ToolMode::Create => "Zeichnen",
                ToolMode::Edit => "Bearbeiten",
            };
            ui.strong(mode);
            ui.separator();

            if let Some(hint) = &state.ui.hint {
                ui.label(hint);
                ui.separator();
            }

            ui.label(format!(
                "Nodes: {} | Segmente: {}",
                state.network.node_count(),
                state.network.segment_count()
            ));

            let loose_ends = state.network.find_unconfirmed_dead_ends().len();
            if loose_ends > 0 {
                ui.separator();
                ui.colored_label(
                    egui::Color32::YELLOW,
                    format!("Unbestätigte Enden: {}", loose_ends),
                );
            }

            ui.separator();
            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            if let Some(msg) = &state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }
        });
    });
}
