// src/engines/metrics/similarity.rs
use crate::error::{Result, TrackfitError};

/// Similarity of a predicted series to an observed one.
///
/// `score` is 1 / (1 + RMSE), so it lives in (0, 1] with 1 meaning a perfect
/// fit. `mae` is carried for reporting and never drives selection.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityReport {
    pub score: f64,
    pub rmse: f64,
    pub mae: f64,
}

pub struct SimilarityMetrics;

impl SimilarityMetrics {
    /// Compare two equal-length series.
    ///
    /// NaN anywhere in `predicted` makes rmse and score NaN rather than
    /// erroring; candidates that diverged stay comparable as "worst".
    pub fn evaluate(predicted: &[f64], actual: &[f64]) -> Result<SimilarityReport> {
        if predicted.is_empty() || actual.is_empty() {
            return Err(TrackfitError::Validation(
                "similarity requires non-empty series".to_string(),
            ));
        }
        if predicted.len() != actual.len() {
            return Err(TrackfitError::Validation(format!(
                "series length mismatch: predicted {} vs actual {}",
                predicted.len(),
                actual.len()
            )));
        }

        let n = actual.len() as f64;
        let mut squared = 0.0;
        let mut absolute = 0.0;
        for (p, a) in predicted.iter().zip(actual.iter()) {
            let diff = p - a;
            squared += diff * diff;
            absolute += diff.abs();
        }

        let rmse = (squared / n).sqrt();
        let mae = absolute / n;
        let score = 1.0 / (1.0 + rmse);

        Ok(SimilarityReport { score, rmse, mae })
    }
}
