pub mod admin;
pub mod analytics;
pub mod catalog;
pub mod not_found;

pub use admin::AdminPage;
pub use analytics::AnalyticsPage;
pub use catalog::CatalogPage;
pub use not_found::NotFoundPage;
