pub mod series;

pub use series::{tracks_from_frames, SampleSeries, TrackedPath};
