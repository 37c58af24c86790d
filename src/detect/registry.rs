use super::precomputed::PrecomputedSource;
use super::synthetic::SyntheticSource;
use super::traits::TrackSource;
use crate::error::{Result, TrackfitError};
use std::{collections::HashMap, sync::Arc};

/// Name-keyed lookup of the available track sources.
///
/// Names are validated when resolved, so a configured source that does not
/// exist fails with the list of ones that do.
pub struct SourceRegistry {
    sources: HashMap<String, Arc<dyn TrackSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            sources: HashMap::new(),
        };
        registry.register_builtin_sources();
        registry
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn TrackSource>> {
        self.sources.get(name).cloned().ok_or_else(|| {
            TrackfitError::Validation(format!(
                "unknown track source '{}', available: {}",
                name,
                self.aliases().join(", ")
            ))
        })
    }

    pub fn aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    fn register_builtin_sources(&mut self) {
        let sources: Vec<Arc<dyn TrackSource>> = vec![
            Arc::new(PrecomputedSource),
            Arc::new(SyntheticSource::new(60)),
        ];

        for source in sources {
            self.sources.insert(source.alias().to_string(), source);
        }
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
