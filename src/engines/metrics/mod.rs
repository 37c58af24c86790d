pub mod similarity;

pub use similarity::{SimilarityMetrics, SimilarityReport};
