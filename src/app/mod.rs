//! Application-Layer: Controller, State, Intents, Werkzeuge und Use-Cases.

pub mod controller;
pub mod events;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Netz, Tool, View, UI).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use controller::AppController;
pub use events::AppIntent;
pub use state::{AppState, ToolMode, UiState, ViewState};
