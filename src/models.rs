// src/models.rs

pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod query;
pub mod reports;
pub mod settings;
pub mod staff;
