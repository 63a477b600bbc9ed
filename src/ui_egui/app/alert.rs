//! Blocking alert dialog for refused submissions.
//!
//! While an alert is showing the rest of the UI is disabled until the user
//! acknowledges it.

use egui::{Context, RichText};

#[derive(Debug, Default)]
pub struct AlertState {
    message: Option<String>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    /// Render the alert if one is pending
    pub fn render(&mut self, ctx: &Context) {
        let Some(message) = self.message() else {
            return;
        };

        let mut dismissed = false;

        egui::Window::new("Weekly Planner")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(400.0);

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.label(message);
                });
                ui.add_space(15.0);
                ui.separator();

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });

                if ui.input(|i| {
                    i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)
                }) {
                    dismissed = true;
                }
            });

        if dismissed {
            self.dismiss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_dismiss() {
        let mut alert = AlertState::new();
        assert!(!alert.is_open());

        alert.show("Please choose a time frame that is valid.");
        assert!(alert.is_open());
        assert_eq!(alert.message(), Some("Please choose a time frame that is valid."));

        alert.dismiss();
        assert!(!alert.is_open());
    }
}
