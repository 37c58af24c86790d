pub mod traits;
pub mod registry;
pub mod precomputed;
pub mod synthetic;

pub use precomputed::PrecomputedSource;
pub use registry::SourceRegistry;
pub use synthetic::SyntheticSource;
pub use traits::TrackSource;
