use super::traits::ConfigSection;
use crate::error::TrackfitError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSettings {
    /// Registry alias of the track source to run.
    pub source: String,
    /// Input file for sources that read one (e.g. precomputed detections).
    pub input: Option<PathBuf>,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            source: "synthetic".to_string(),
            input: None,
        }
    }
}

impl ConfigSection for DetectionSettings {
    fn section_name() -> &'static str {
        "detection"
    }

    fn validate(&self) -> Result<(), TrackfitError> {
        if self.source.trim().is_empty() {
            return Err(TrackfitError::Configuration(format!(
                "[{}] source must name a track source",
                Self::section_name()
            )));
        }
        Ok(())
    }
}
