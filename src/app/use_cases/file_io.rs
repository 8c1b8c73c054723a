//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use std::path::Path;

use anyhow::Context;

use crate::app::AppState;
use crate::core::{NetworkSnapshot, RoadNetwork};

/// Schreibt das Netz als JSON-Snapshot.
pub fn save_network(network: &RoadNetwork, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&network.to_snapshot())
        .context("Straßennetz konnte nicht serialisiert werden")?;
    std::fs::write(path, json)
        .with_context(|| format!("Datei konnte nicht geschrieben werden: {}", path.display()))?;
    Ok(())
}

/// Liest ein Netz aus einem JSON-Snapshot.
pub fn load_network(path: &Path) -> anyhow::Result<RoadNetwork> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path.display()))?;
    let snapshot: NetworkSnapshot =
        serde_json::from_str(&json).context("Ungültiges Straßennetz-JSON")?;
    let network = RoadNetwork::from_snapshot(&snapshot).context("Inkonsistentes Straßennetz")?;
    Ok(network)
}

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Speichert unter dem aktuellen Pfad, ohne Pfad über den Dialog.
pub fn save_current(state: &mut AppState) -> anyhow::Result<()> {
    match state.ui.current_file_path.clone() {
        Some(path) => save_to_path(state, &path),
        None => {
            request_save_file(state);
            Ok(())
        }
    }
}

/// Speichert das Netz und merkt den Pfad.
pub fn save_to_path(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    save_network(&state.network, path)?;
    log::info!(
        "Straßennetz gespeichert: {} ({} Nodes, {} Segmente)",
        path.display(),
        state.network.node_count(),
        state.network.segment_count()
    );
    state.ui.current_file_path = Some(path.to_path_buf());
    state.ui.status_message = Some(format!("Gespeichert: {}", path.display()));
    Ok(())
}

/// Lädt die ausgewählte Datei in den AppState.
///
/// Laufende Tool-Modi werden vorher beendet; bei Fehlern bleibt das alte Netz.
pub fn load_selected_file(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let network = load_network(path)?;
    log::info!(
        "Straßennetz geladen: {} Nodes, {} Segmente",
        network.node_count(),
        network.segment_count()
    );

    replace_network(state, network);
    state.ui.current_file_path = Some(path.to_path_buf());

    let dead_ends = state.network.find_unconfirmed_dead_ends().len();
    if dead_ends > 0 {
        log::warn!("{} unbestätigte Sackgassen im geladenen Netz", dead_ends);
    }
    state.ui.status_message = Some(format!("Geladen: {}", path.display()));
    Ok(())
}

/// Verwirft das aktuelle Netz.
pub fn new_network(state: &mut AppState) {
    replace_network(state, RoadNetwork::new());
    state.ui.current_file_path = None;
    state.ui.status_message = None;
    log::info!("Neues Straßennetz");
}

fn replace_network(state: &mut AppState, network: RoadNetwork) {
    super::road_tool::deactivate_all(state);
    state.network = network;
    state.draw_list.reset(&state.network);
}
