pub mod traits;
pub mod evolution;
pub mod detection;
pub mod manager;

pub use detection::DetectionSettings;
pub use evolution::EvolutionSettings;
pub use manager::{AppConfig, ConfigManager};
