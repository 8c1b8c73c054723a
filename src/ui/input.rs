//! Viewport-Input-Handling: Maus-Events, Kamera-Pan, Scroll → AppIntent.

use glam::Vec2;

use super::keyboard;
use crate::app::tools::{PointerButton, ToolEvent};
use crate::app::AppIntent;

/// Pixel-Scrolldistanz (Trackpad), die einer Mausrad-Raste entspricht
const POINTS_PER_WHEEL_STEP: f32 = 40.0;

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    /// Letzte an das Tool gemeldete Zeigerposition (Viewport-Koordinaten)
    last_pointer: Option<Vec2>,
    /// Angesammelte Pixel-Scrolldistanz, die noch keine ganze Raste ergibt
    scroll_points: f32,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zeigerpositionen werden relativ zur linken oberen Ecke des Viewports
    /// gemeldet. Das Tool entscheidet selbst, welche Events es verbraucht.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: Vec2,
    ) -> Vec<AppIntent> {
        let mut events = vec![AppIntent::ViewportResized {
            size: viewport_size,
        }];

        events.extend(keyboard::collect_keyboard_intents(ui));

        let origin = response.rect.min;
        let to_local = |pos: egui::Pos2| Vec2::new(pos.x - origin.x, pos.y - origin.y);
        let pointer = ui.input(|i| i.pointer.latest_pos());
        let primary_down = ui.input(|i| i.pointer.primary_down());

        // Außerhalb nur während eines laufenden Drags melden
        let local = pointer
            .filter(|pos| response.rect.contains(*pos) || primary_down)
            .map(to_local);

        self.handle_pointer_move(local, &mut events);
        if let Some(screen) = local {
            handle_buttons(ui, response, screen, &mut events);
            self.handle_scroll(ui, response, screen, &mut events);
        }
        handle_camera_pan(response, &mut events);

        events
    }

    fn handle_pointer_move(&mut self, local: Option<Vec2>, events: &mut Vec<AppIntent>) {
        if local == self.last_pointer {
            return;
        }
        self.last_pointer = local;
        if let Some(screen) = local {
            events.push(AppIntent::Tool(ToolEvent::PointerMove { screen }));
        }
    }
}

// ── Klicks ──────────────────────────────────────────────────────

fn handle_buttons(
    ui: &egui::Ui,
    response: &egui::Response,
    screen: Vec2,
    events: &mut Vec<AppIntent>,
) {
    let (pressed, released) = ui.input(|i| {
        let pressed: Vec<PointerButton> = [
            (egui::PointerButton::Primary, PointerButton::Primary),
            (egui::PointerButton::Secondary, PointerButton::Secondary),
            (egui::PointerButton::Middle, PointerButton::Middle),
        ]
        .into_iter()
        .filter(|(button, _)| i.pointer.button_pressed(*button))
        .map(|(_, tool_button)| tool_button)
        .collect();
        (pressed, i.pointer.primary_released())
    });

    if response.hovered() {
        for button in pressed {
            events.push(AppIntent::Tool(ToolEvent::PointerDown { screen, button }));
        }
    }
    if released {
        events.push(AppIntent::Tool(ToolEvent::PointerUp { screen }));
    }
    if response.double_clicked() {
        events.push(AppIntent::Tool(ToolEvent::DoubleClick { screen }));
    }
}

// ── Scroll & Pan ────────────────────────────────────────────────

impl InputState {
    /// Meldet genau ein Wheel-Event pro Mausrad-Raste.
    ///
    /// Liest die rohen `MouseWheel`-Events statt `smooth_scroll_delta`, das
    /// egui über viele Frames verteilt. Alle Einheiten werden in Pixel
    /// umgerechnet und angesammelt, eine Zeile entspricht einer Raste.
    fn handle_scroll(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        screen: Vec2,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.hovered() {
            self.scroll_points = 0.0;
            return;
        }

        let wheel_events: Vec<(egui::MouseWheelUnit, f32)> = ui.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::MouseWheel { unit, delta, .. } if delta.y != 0.0 => {
                        Some((*unit, delta.y))
                    }
                    _ => None,
                })
                .collect()
        });

        for (unit, delta) in wheel_events {
            self.scroll_points += match unit {
                egui::MouseWheelUnit::Point => delta,
                egui::MouseWheelUnit::Line => delta * POINTS_PER_WHEEL_STEP,
                egui::MouseWheelUnit::Page => delta.signum() * POINTS_PER_WHEEL_STEP,
            };
            let steps = (self.scroll_points / POINTS_PER_WHEEL_STEP).trunc();
            self.scroll_points -= steps * POINTS_PER_WHEEL_STEP;

            // egui: positiv = hochscrollen; Tool und Kamera erwarten positiv = runter
            for _ in 0..(steps.abs() as u32) {
                events.push(AppIntent::Tool(ToolEvent::Wheel {
                    screen,
                    delta_y: -steps.signum(),
                }));
            }
        }
    }
}

fn handle_camera_pan(response: &egui::Response, events: &mut Vec<AppIntent>) {
    if response.dragged_by(egui::PointerButton::Secondary)
        || response.dragged_by(egui::PointerButton::Middle)
    {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            events.push(AppIntent::CameraPan {
                screen_delta: Vec2::new(delta.x, delta.y),
            });
        }
    }
}
