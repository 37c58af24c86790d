use super::traits::TrackSource;
use crate::data::TrackedPath;
use crate::error::Result;
use std::path::Path;

/// Generated ballistic trajectory, in pixel units per frame: the row
/// coordinate falls with constant acceleration while the column drifts at
/// constant speed. Useful for exercising the engine without a tracker.
#[derive(Debug)]
pub struct SyntheticSource {
    frames: usize,
    row_start: f64,
    row_velocity: f64,
    gravity: f64,
    col_start: f64,
    col_velocity: f64,
}

impl SyntheticSource {
    pub fn new(frames: usize) -> Self {
        Self {
            frames,
            row_start: 10.0,
            row_velocity: 2.0,
            gravity: 0.5,
            col_start: 5.0,
            col_velocity: 3.0,
        }
    }
}

impl TrackSource for SyntheticSource {
    fn alias(&self) -> &'static str {
        "synthetic"
    }

    fn describe(&self) -> &'static str {
        "generated ballistic trajectory (ignores the input path)"
    }

    fn extract(&self, _input: Option<&Path>) -> Result<Vec<TrackedPath>> {
        let mut rows = Vec::with_capacity(self.frames);
        let mut cols = Vec::with_capacity(self.frames);
        for frame in 0..self.frames {
            let t = frame as f64;
            rows.push(self.row_start + self.row_velocity * t + 0.5 * self.gravity * t * t);
            cols.push(self.col_start + self.col_velocity * t);
        }
        Ok(vec![TrackedPath::new(rows, cols)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimension;

    #[test]
    fn generates_one_ballistic_instance() {
        let tracks = SyntheticSource::new(4).extract(None).unwrap();
        assert_eq!(tracks.len(), 1);
        let rows = tracks[0].series(Dimension::Row).unwrap();
        assert_eq!(rows.values(), &[10.0, 12.25, 15.0, 18.25]);
        let cols = tracks[0].series(Dimension::Col).unwrap();
        assert_eq!(cols.values(), &[5.0, 8.0, 11.0, 14.0]);
    }

    #[test]
    fn zero_frames_cannot_form_a_path() {
        assert!(SyntheticSource::new(0).extract(None).is_err());
    }
}
