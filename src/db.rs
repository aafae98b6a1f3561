pub mod source;
pub use source::{AnalyticsSource, SettingsSource};
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod staff_repo;
pub use staff_repo::StaffRepository;
pub mod orders_repo;
pub use orders_repo::OrdersRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;
pub mod pg_source;
pub use pg_source::PgAnalyticsSource;
pub mod upstream_source;
pub use upstream_source::UpstreamSource;

#[cfg(test)]
pub mod memory;
