// Settings service module

mod service;

pub use service::SettingsService;
