//! UI-Komponenten: Toolbar, Status-Bar, Viewport, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Keyboard-Shortcuts und Viewport-Zeichnung sind in eigene Dateien extrahiert.
pub mod status;
pub mod toolbar;
pub mod viewport;

pub use dialogs::{handle_file_dialogs, show_dead_end_dialog};
pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
pub use viewport::paint_viewport;
