mod app;
mod event_dialog;
mod views;

pub use app::PlannerApp;
