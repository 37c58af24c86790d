// src/data/series.rs
use crate::error::{Result, TrackfitError};
use crate::types::Dimension;

/// A fitting target: paired time/value arrays of equal, non-zero length.
#[derive(Debug, Clone)]
pub struct SampleSeries {
    time: Vec<f64>,
    values: Vec<f64>,
}

impl SampleSeries {
    pub fn new(time: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if time.is_empty() || values.is_empty() {
            return Err(TrackfitError::Validation(
                "sample series must not be empty".to_string(),
            ));
        }
        if time.len() != values.len() {
            return Err(TrackfitError::Validation(format!(
                "sample series length mismatch: {} time points vs {} values",
                time.len(),
                values.len()
            )));
        }
        Ok(SampleSeries { time, values })
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Per-frame (row, col) positions of one tracked instance.
#[derive(Debug, Clone)]
pub struct TrackedPath {
    rows: Vec<f64>,
    cols: Vec<f64>,
}

impl TrackedPath {
    pub fn new(rows: Vec<f64>, cols: Vec<f64>) -> Result<Self> {
        if rows.is_empty() || cols.is_empty() {
            return Err(TrackfitError::Validation(
                "tracked paths must cover at least one frame".to_string(),
            ));
        }
        if rows.len() != cols.len() {
            return Err(TrackfitError::Validation(format!(
                "tracked path length mismatch: {} rows vs {} cols",
                rows.len(),
                cols.len()
            )));
        }
        Ok(TrackedPath { rows, cols })
    }

    /// Number of frames the path covers.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One coordinate of the path as a fitting target, with 0-based frame
    /// indices as the time axis.
    pub fn series(&self, dimension: Dimension) -> Result<SampleSeries> {
        let time = (0..self.len()).map(|i| i as f64).collect();
        let values = match dimension {
            Dimension::Row => self.rows.clone(),
            Dimension::Col => self.cols.clone(),
        };
        SampleSeries::new(time, values)
    }
}

/// Regroup frame-major detections into one path per tracked instance.
///
/// `frames[f][i]` is the (row, col) of detection `i` in frame `f`. Instances
/// are paired by detection order, so the instance count is the minimum
/// detection count across frames; frames that saw more detections have the
/// extras dropped. Returns an empty vec when any frame saw nothing.
pub fn tracks_from_frames(frames: &[Vec<(f64, f64)>]) -> Result<Vec<TrackedPath>> {
    let instances = frames.iter().map(Vec::len).min().unwrap_or(0);
    let widest = frames.iter().map(Vec::len).max().unwrap_or(0);
    if widest > instances {
        log::warn!(
            "uneven detection counts across frames: keeping {} instance(s), widest frame saw {}",
            instances,
            widest
        );
    }
    let mut tracks = Vec::with_capacity(instances);
    for i in 0..instances {
        let rows = frames.iter().map(|frame| frame[i].0).collect();
        let cols = frames.iter().map(|frame| frame[i].1).collect();
        tracks.push(TrackedPath::new(rows, cols)?);
    }
    Ok(tracks)
}
