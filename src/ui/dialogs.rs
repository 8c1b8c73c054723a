//! Datei-Dialoge und modale Fenster.

use crate::app::{AppIntent, UiState};

const FILE_FILTER_NAME: &str = "Straßennetz";
const FILE_EXTENSIONS: &[&str] = &["json"];

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter(FILE_FILTER_NAME, FILE_EXTENSIONS)
            .pick_file()
        {
            events.push(AppIntent::FileSelected { path });
        }
    }

    if ui_state.show_save_file_dialog {
        ui_state.show_save_file_dialog = false;

        let default_name = ui_state
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("road_network.json");

        if let Some(path) = rfd::FileDialog::new()
            .add_filter(FILE_FILTER_NAME, FILE_EXTENSIONS)
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::SaveFilePathSelected { path });
        }
    }

    events
}

/// Modale Sackgassen-Bestätigung. Die Antwort geht als Intent zurück.
pub fn show_dead_end_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.show_dead_end_dialog {
        return events;
    }

    egui::Window::new("Sackgasse?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Die Straße endet nicht am Rand, an einem Node oder einer Straße.");
            ui.label("Als Sackgasse abschließen?");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Ja, Sackgasse").clicked() {
                    events.push(AppIntent::DeadEndAnswered { confirmed: true });
                }
                if ui.button("Nein, weiterzeichnen").clicked() {
                    events.push(AppIntent::DeadEndAnswered { confirmed: false });
                }
            });
        });

    // Enter bestätigt, Escape lehnt ab
    let (enter, escape) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Escape),
        )
    });
    if events.is_empty() {
        if enter {
            events.push(AppIntent::DeadEndAnswered { confirmed: true });
        } else if escape {
            events.push(AppIntent::DeadEndAnswered { confirmed: false });
        }
    }

    events
}
