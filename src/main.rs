// Weekly Planner Application
// Main entry point

use anyhow::anyhow;
use weekly_planner::services::settings::SettingsService;
use weekly_planner::ui_egui::PlannerApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Weekly Planner");

    let settings_service = SettingsService::from_default_location();
    log::info!("Using settings file {}", settings_service.path().display());
    let settings = settings_service.load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Weekly Planner")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Weekly Planner",
        options,
        Box::new(move |cc| Ok(Box::new(PlannerApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow!("Failed to run planner window: {}", e))
}
