//! Toolbar für Modus-Auswahl und Dateiaktionen.

use crate::app::{AppIntent, AppState, ToolMode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mode = state.ui.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Neu").clicked() {
                events.push(AppIntent::NewNetworkRequested);
            }
            if ui.button("Öffnen…").clicked() {
                events.push(AppIntent::OpenFileRequested);
            }
            if ui.button("Speichern").clicked() {
                events.push(AppIntent::SaveRequested);
            }
            if ui.button("Speichern unter…").clicked() {
                events.push(AppIntent::SaveAsRequested);
            }

            ui.separator();
            ui.label("Werkzeug:");

            if ui
                .selectable_label(mode == ToolMode::Create, "Straße zeichnen (R)")
                .clicked()
            {
                events.push(AppIntent::ToggleCreateMode);
            }
            if ui
                .selectable_label(mode == ToolMode::Edit, "Bearbeiten (E)")
                .clicked()
            {
                events.push(AppIntent::ToggleEditMode);
            }

            ui.separator();

            let mut draft = state.tool.draft_mode();
            if ui.checkbox(&mut draft, "Entwurf (D)").changed() {
                events.push(AppIntent::ToggleDraftMode);
            }

            ui.separator();

            let step = state.options.camera_scroll_zoom_step;
            if ui.button("+").clicked() {
                events.push(AppIntent::CameraZoom {
                    factor: step,
                    screen_anchor: None,
                });
            }
            if ui.button("−").clicked() {
                events.push(AppIntent::CameraZoom {
                    factor: 1.0 / step,
                    screen_anchor: None,
                });
            }
            if ui.button("Ansicht zurücksetzen").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }
            if ui.button("Optionen speichern").clicked() {
                events.push(AppIntent::SaveOptionsRequested);
            }
        });
    });

    events
}
