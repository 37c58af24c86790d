use super::traits::TrackSource;
use crate::data::{tracks_from_frames, TrackedPath};
use crate::error::{Result, TrackfitError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Detections exported by an external vision tool.
///
/// `frames[f]` holds the (row, col) positions detected in frame `f`, in a
/// stable detection order.
#[derive(Debug, Deserialize)]
struct DetectionFile {
    frames: Vec<Vec<(f64, f64)>>,
}

#[derive(Debug)]
pub struct PrecomputedSource;

impl TrackSource for PrecomputedSource {
    fn alias(&self) -> &'static str {
        "precomputed"
    }

    fn describe(&self) -> &'static str {
        "per-frame detections exported by an external tracker (JSON)"
    }

    fn extract(&self, input: Option<&Path>) -> Result<Vec<TrackedPath>> {
        let path = input.ok_or_else(|| {
            TrackfitError::Validation(
                "the precomputed source requires an input file".to_string(),
            )
        })?;

        let text = fs::read_to_string(path).map_err(|e| {
            TrackfitError::DataLoading(format!("failed to read {}: {}", path.display(), e))
        })?;
        let file: DetectionFile = serde_json::from_str(&text).map_err(|e| {
            TrackfitError::DataLoading(format!("failed to parse {}: {}", path.display(), e))
        })?;

        let tracks = tracks_from_frames(&file.frames)?;
        if tracks.is_empty() {
            return Err(TrackfitError::DataLoading(format!(
                "{} contains no usable tracks",
                path.display()
            )));
        }

        log::info!(
            "loaded {} tracked instance(s) over {} frames from {}",
            tracks.len(),
            file.frames.len(),
            path.display()
        );
        Ok(tracks)
    }
}
