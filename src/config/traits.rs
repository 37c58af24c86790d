use crate::error::TrackfitError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    /// TOML table name, also used to prefix validation errors.
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), TrackfitError>;
}
