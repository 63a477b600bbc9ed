mod alert;
mod toast;

use self::alert::AlertState;
use self::toast::ToastManager;
use crate::models::settings::Settings;
use crate::services::planner::WeeklyPlanner;
use crate::ui_egui::event_dialog::{render_event_dialog, EventDialogAction, EventDialogState};
use crate::ui_egui::views::week_view::WeekView;

pub struct PlannerApp {
    /// The seven day columns and their placed events
    planner: WeeklyPlanner,
    settings: Settings,
    show_event_dialog: bool,
    event_dialog_state: EventDialogState,
    /// Blocking alert for refused submissions
    alert: AlertState,
    toast_manager: ToastManager,
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_toolbar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!self.alert.is_open(), |ui| {
                WeekView::show(ui, &self.planner);
            });
        });

        if self.show_event_dialog {
            match render_event_dialog(ctx, &mut self.event_dialog_state, !self.alert.is_open()) {
                EventDialogAction::Submit => self.submit_event(),
                EventDialogAction::Cancel => self.close_event_dialog(),
                EventDialogAction::None => {}
            }
        }

        self.alert.render(ctx);
        self.toast_manager.render(ctx);
    }
}

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        log::info!(
            "Planner columns: {}x{}px, block minimum {}px",
            settings.column_width,
            settings.column_height,
            settings.block_min_height
        );

        Self {
            planner: WeeklyPlanner::from_settings(&settings),
            settings,
            show_event_dialog: false,
            event_dialog_state: EventDialogState::new(),
            alert: AlertState::new(),
            toast_manager: ToastManager::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn planner(&self) -> &WeeklyPlanner {
        &self.planner
    }

    fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("planner_toolbar").show(ctx, |ui| {
            ui.add_enabled_ui(!self.alert.is_open(), |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Weekly Planner");
                    ui.separator();

                    if ui.button("➕ New Event").clicked() {
                        self.open_event_dialog();
                    }

                    let has_events = self.planner.event_count() > 0;
                    if ui
                        .add_enabled(has_events, egui::Button::new("Clear Week"))
                        .clicked()
                    {
                        self.planner.clear();
                        self.toast_manager.info("Week cleared");
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!("{} event(s)", self.planner.event_count()));
                    });
                });
            });
        });
    }

    fn open_event_dialog(&mut self) {
        self.show_event_dialog = true;
    }

    fn close_event_dialog(&mut self) {
        self.show_event_dialog = false;
    }

    /// Hand the form contents to the planner. On success the form closes and
    /// resets; on failure it stays open behind an alert.
    fn submit_event(&mut self) {
        let form = &self.event_dialog_state;
        match self
            .planner
            .submit(&form.name, &form.location, form.day, form.start, form.end)
        {
            Ok(placement) => {
                self.toast_manager
                    .success(format!("Event added to {}", placement.handle.day));
                self.event_dialog_state.reset();
                self.close_event_dialog();
            }
            Err(err) => {
                log::warn!("Event not added: {}", err);
                self.alert.show(err.user_message());
            }
        }
    }
}
