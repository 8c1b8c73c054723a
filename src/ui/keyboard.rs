//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::tools::{ToolEvent, ToolKey};
use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_o, key_s, key_n, key_r, key_e, key_d) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::N),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::D),
        )
    });

    // Ctrl+O (Öffnen), Ctrl+S (Speichern), Ctrl+Shift+S (Speichern unter), Ctrl+N (Neu)
    if modifiers.command {
        if key_o {
            events.push(AppIntent::OpenFileRequested);
        }
        if key_s && modifiers.shift {
            events.push(AppIntent::SaveAsRequested);
        } else if key_s {
            events.push(AppIntent::SaveRequested);
        }
        if key_n {
            events.push(AppIntent::NewNetworkRequested);
        }
        return events;
    }

    // Modus-Hotkeys
    if key_r {
        events.push(AppIntent::ToggleCreateMode);
    }
    if key_e {
        events.push(AppIntent::ToggleEditMode);
    }
    if key_d {
        events.push(AppIntent::ToggleDraftMode);
    }

    // Tool-Tasten
    let tool_keys = ui.input(|i| {
        [
            (egui::Key::Escape, ToolKey::Escape),
            (egui::Key::Enter, ToolKey::Enter),
            (egui::Key::Delete, ToolKey::Delete),
            (egui::Key::Backspace, ToolKey::Backspace),
        ]
        .into_iter()
        .filter(|(key, _)| i.key_pressed(*key))
        .map(|(_, tool_key)| tool_key)
        .collect::<Vec<_>>()
    });
    events.extend(
        tool_keys
            .into_iter()
            .map(|key| AppIntent::Tool(ToolEvent::Key(key))),
    );

    events
}
