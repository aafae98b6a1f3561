// src/services.rs

pub mod dashboard_service;
pub mod inventory_service;
pub mod order_service;
pub mod report_service;
pub mod staff_service;
