//! App-Intents: Eingaben aus UI/System ohne eigene Mutationslogik.

use std::path::PathBuf;

use glam::Vec2;

use super::tools::ToolEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Eingabe-Event für das Straßen-Tool (Viewport-Koordinaten)
    Tool(ToolEvent),
    /// Create-Modus ein/aus (Hotkey R)
    ToggleCreateMode,
    /// Edit-Modus ein/aus (Hotkey E)
    ToggleEditMode,
    /// Entwurfs-Vorschau (Polyline) ein/aus
    ToggleDraftMode,
    /// Antwort aus dem Sackgassen-Dialog
    DeadEndAnswered { confirmed: bool },
    /// Neues, leeres Netz
    NewNetworkRequested,
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Speichern unter neuem Pfad
    SaveAsRequested,
    /// Im Open-Dialog gewählte Datei
    FileSelected { path: PathBuf },
    /// Im Save-Dialog gewählter Pfad
    SaveFilePathSelected { path: PathBuf },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: Vec2 },
    /// Kamera um ein Bildschirm-Delta verschieben
    CameraPan { screen_delta: Vec2 },
    /// Kamera zoomen, optional um einen Bildschirm-Anker
    CameraZoom {
        factor: f32,
        screen_anchor: Option<Vec2>,
    },
    /// Aktuelle Optionen in die TOML-Datei schreiben
    SaveOptionsRequested,
    /// Kamera auf die Weltmitte zurücksetzen
    ResetCameraRequested,
    ExitRequested,
}
