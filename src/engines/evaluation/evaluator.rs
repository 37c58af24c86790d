// src/engines/evaluation/evaluator.rs
use crate::data::SampleSeries;
use crate::engines::generation::InstructionSequence;
use crate::error::Result;

/// Scores candidates against one fitting target.
///
/// Holds the series for a whole run so every candidate in every generation
/// sees the same time axis and target values.
pub struct Evaluator {
    series: SampleSeries,
}

impl Evaluator {
    pub fn new(series: SampleSeries) -> Self {
        Self { series }
    }

    /// Run the candidate over the series' time axis and score the predictions
    /// against its values. The score and report land on the candidate; the
    /// score is also returned.
    pub fn score(&self, candidate: &mut InstructionSequence) -> Result<f64> {
        let predicted = candidate.evaluate(self.series.time());
        candidate.similarity(&predicted, self.series.values())
    }

    pub fn series(&self) -> &SampleSeries {
        &self.series
    }
}
