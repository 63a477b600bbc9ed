use egui::RichText;

use crate::models::day::DayOfWeek;
use crate::models::time_slot::{slots_for_day, TimeSlot};

/// State for the new event form
#[derive(Debug, Clone, PartialEq)]
pub struct EventDialogState {
    pub name: String,
    pub location: String,
    pub day: DayOfWeek,
    pub start: TimeSlot,
    pub end: TimeSlot,
}

impl Default for EventDialogState {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            day: DayOfWeek::Sunday,
            start: TimeSlot::MIDNIGHT,
            end: TimeSlot::MIDNIGHT,
        }
    }
}

impl EventDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field back to its first option
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDialogAction {
    None,
    Submit,
    Cancel,
}

/// Render the new event form. Inputs are disabled while `enabled` is false
/// (a blocking alert is showing).
pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &mut EventDialogState,
    enabled: bool,
) -> EventDialogAction {
    let mut action = EventDialogAction::None;

    egui::Window::new("New Event")
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                egui::Grid::new("event_form_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Name of Event");
                        ui.add(
                            egui::TextEdit::singleline(&mut state.name)
                                .hint_text("Name of Event"),
                        );
                        ui.end_row();

                        ui.label("Location");
                        ui.add(
                            egui::TextEdit::singleline(&mut state.location)
                                .hint_text("Location"),
                        );
                        ui.end_row();

                        ui.label("Day of the Week");
                        render_day_picker(ui, &mut state.day);
                        ui.end_row();

                        ui.label("Event Start Time");
                        render_slot_picker(ui, "event_start_time", &mut state.start);
                        ui.end_row();

                        ui.label("Event End Time");
                        render_slot_picker(ui, "event_end_time", &mut state.end);
                        ui.end_row();
                    });

                ui.add_space(10.0);
                ui.separator();

                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new("Submit Event Form").strong())
                        .clicked()
                    {
                        action = EventDialogAction::Submit;
                    }
                    if ui.button("Cancel").clicked() {
                        action = EventDialogAction::Cancel;
                    }
                });
            });
        });

    action
}

fn render_day_picker(ui: &mut egui::Ui, day: &mut DayOfWeek) {
    egui::ComboBox::from_id_source("event_day_of_week")
        .width(160.0)
        .selected_text(day.name())
        .show_ui(ui, |ui| {
            for option in DayOfWeek::ALL {
                ui.selectable_value(day, option, option.name());
            }
        });
}

/// Combo box listing every quarter-hour of the day
fn render_slot_picker(ui: &mut egui::Ui, id: &str, slot: &mut TimeSlot) {
    egui::ComboBox::from_id_source(id)
        .width(160.0)
        .height(300.0)
        .selected_text(slot.label())
        .show_ui(ui, |ui| {
            for option in slots_for_day() {
                ui.selectable_value(slot, option, option.label());
            }
        });
}
