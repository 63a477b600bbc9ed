// Service module exports

pub mod layout;
pub mod planner;
pub mod settings;
