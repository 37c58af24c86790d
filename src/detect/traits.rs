use crate::data::TrackedPath;
use crate::error::Result;
use std::path::Path;

/// Base trait for anything that can produce tracked trajectories.
pub trait TrackSource: Send + Sync + std::fmt::Debug {
    /// Registry key
    fn alias(&self) -> &'static str;

    /// One-line description for listings
    fn describe(&self) -> &'static str;

    /// Produce one path per tracked instance.
    ///
    /// `input` points at whatever the source reads from; sources that
    /// generate their data ignore it.
    fn extract(&self, input: Option<&Path>) -> Result<Vec<TrackedPath>>;
}
