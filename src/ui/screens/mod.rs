pub mod calendar;
pub mod crops;
pub mod dashboard;
pub mod recommendations;
pub mod settings;

pub use calendar::CalendarScreen;
pub use crops::CropsScreen;
pub use dashboard::DashboardScreen;
pub use recommendations::RecommendationsScreen;
pub use settings::{SettingsField, SettingsScreen};
