use super::traits::ConfigSection;
use crate::error::TrackfitError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionSettings {
    pub population_size: usize,
    pub generations: usize,
    /// Fix for reproducible runs; omit to draw from entropy.
    pub seed: Option<u64>,
}

impl Default for EvolutionSettings {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 50,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionSettings {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), TrackfitError> {
        if self.population_size == 0 {
            return Err(TrackfitError::Configuration(format!(
                "[{}] population_size must be at least 1",
                Self::section_name()
            )));
        }
        if self.generations == 0 {
            return Err(TrackfitError::Configuration(format!(
                "[{}] generations must be at least 1",
                Self::section_name()
            )));
        }
        Ok(())
    }
}
