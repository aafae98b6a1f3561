// src/handlers.rs

pub mod charts;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod reports;
pub mod settings;
pub mod staff;
