pub mod recommend;
pub mod season;
pub mod stages;

pub use recommend::classify;
pub use season::detect_season;
pub use stages::actionable_steps;
