//! Zentrale Konfiguration für den Straßennetz-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Welt ────────────────────────────────────────────────────────────

/// Standard-Weltgrenzen `[min_x, min_y, max_x, max_y]`.
pub const WORLD_BOUNDS: [f32; 4] = [-500.0, -500.0, 1500.0, 1500.0];

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 10.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Straßen ─────────────────────────────────────────────────────────

/// Abstand der Einstiegspunkte entlang des Rands.
pub const ENTRY_POINT_SPACING: f32 = 150.0;
/// Standard-Straßenbreite in Welteinheiten.
pub const DEFAULT_ROAD_WIDTH: f32 = 50.0;

// ── Zeichnen (Create-Modus) ─────────────────────────────────────────

/// Fangradius für Einstiegspunkte und Nodes.
pub const NODE_SNAP_RADIUS: f32 = 20.0;
/// Fangradius für bestehende Segmente.
pub const SEGMENT_SNAP_RADIUS: f32 = 25.0;
/// Fangradius für den Weltrand beim Zeichnen.
pub const BOUNDARY_SNAP_RADIUS: f32 = 25.0;
/// Mindestabstand zum Start-Node, bevor der Rand fängt.
pub const BOUNDARY_SNAP_MIN_DISTANCE: f32 = 30.0;
/// Ungefangene Enden näher als dieser Wert am Rand werden Randknoten.
pub const BOUNDARY_FINISH_THRESHOLD: f32 = 20.0;
/// Hover-Radius für die Hervorhebung von Einstiegspunkten.
pub const ENTRY_HIGHLIGHT_RADIUS: f32 = 25.0;

// ── Bearbeiten (Edit-Modus) ─────────────────────────────────────────

/// Pick-Radius für Griffe (Endpunkte, Kontrollpunkte).
pub const HANDLE_PICK_RADIUS: f32 = 15.0;
/// Pick-Radius für Segmente im Edit-Modus.
pub const EDIT_SEGMENT_PICK_RADIUS: f32 = 30.0;
/// Maximaler Abstand für das Einfügen eines Kontrollpunkts per Doppelklick.
pub const INSERT_MAX_DISTANCE: f32 = 40.0;
/// Glättungs-Schritt pro Mausrad-Raste.
pub const SMOOTHING_STEP: f32 = 0.1;

/// Radien und Schrittweiten des Straßen-Tools (Welteinheiten).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadToolOptions {
    pub entry_point_spacing: f32,
    pub default_road_width: f32,
    pub node_snap_radius: f32,
    pub segment_snap_radius: f32,
    pub boundary_snap_radius: f32,
    pub boundary_snap_min_distance: f32,
    pub boundary_finish_threshold: f32,
    pub entry_highlight_radius: f32,
    pub handle_pick_radius: f32,
    pub edit_segment_pick_radius: f32,
    pub insert_max_distance: f32,
    pub smoothing_step: f32,
    /// Vorschau als Polyline statt als Kurve
    pub draft_mode: bool,
}

impl Default for RoadToolOptions {
    fn default() -> Self {
        Self {
            entry_point_spacing: ENTRY_POINT_SPACING,
            default_road_width: DEFAULT_ROAD_WIDTH,
            node_snap_radius: NODE_SNAP_RADIUS,
            segment_snap_radius: SEGMENT_SNAP_RADIUS,
            boundary_snap_radius: BOUNDARY_SNAP_RADIUS,
            boundary_snap_min_distance: BOUNDARY_SNAP_MIN_DISTANCE,
            boundary_finish_threshold: BOUNDARY_FINISH_THRESHOLD,
            entry_highlight_radius: ENTRY_HIGHLIGHT_RADIUS,
            handle_pick_radius: HANDLE_PICK_RADIUS,
            edit_segment_pick_radius: EDIT_SEGMENT_PICK_RADIUS,
            insert_max_distance: INSERT_MAX_DISTANCE,
            smoothing_step: SMOOTHING_STEP,
            draft_mode: true,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `road_network_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Weltgrenzen `[min_x, min_y, max_x, max_y]`
    pub world_bounds: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    pub camera_zoom_min: f32,
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Straßen-Tool ────────────────────────────────────────────
    pub road_tool: RoadToolOptions,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            world_bounds: WORLD_BOUNDS,
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            road_tool: RoadToolOptions::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("road-network-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("road_network_editor.toml")
    }
}
