use trackfit::data::SampleSeries;
use trackfit::engines::evaluation::Evaluator;
use trackfit::engines::generation::{
    EvolutionConfig, EvolutionEngine, InstructionSequence, ProgressCallback,
    SilentProgressCallback,
};
use trackfit::error::TrackfitError;
use trackfit::types::Dimension;

/// Progress callback that records per-generation best scores
struct TestProgressCallback {
    starts: usize,
    best_scores: Vec<f64>,
}

impl TestProgressCallback {
    fn new() -> Self {
        Self {
            starts: 0,
            best_scores: Vec::new(),
        }
    }
}

impl ProgressCallback for &mut TestProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {
        self.starts += 1;
    }

    fn on_generation_complete(&mut self, _generation: usize, best_score: f64) {
        self.best_scores.push(best_score);
    }
}

/// Linear trajectory, an easy target for the catalog's arithmetic ops
fn linear_series(n: usize) -> SampleSeries {
    let time: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let values: Vec<f64> = time.iter().map(|t| t * 2.0 + 1.0).collect();
    SampleSeries::new(time, values).unwrap()
}

fn test_engine(series: SampleSeries, seed: u64) -> EvolutionEngine {
    let config = EvolutionConfig {
        population_size: 40,
        generations: 15,
        seed: Some(seed),
    };
    EvolutionEngine::new(config, Evaluator::new(series))
}

#[test]
fn evolution_produces_a_well_formed_fit() {
    let mut engine = test_engine(linear_series(25), 1234);
    let fit = engine.run(Dimension::Row, SilentProgressCallback).unwrap();

    println!("fit: {} (score {:.4})", fit.expression, fit.score);

    assert_eq!(fit.dimension, Dimension::Row);
    assert!(!fit.expression.is_empty());
    assert!(fit.score > 0.0 && fit.score <= 1.0);
    assert!(fit.rmse >= 0.0);
    assert!(fit.mae >= 0.0);
    assert!((1.0 / (1.0 + fit.rmse) - fit.score).abs() < 1e-12);

    // The instruction list is the program: it re-parses to the same function.
    assert_eq!(fit.instructions[0], "y = x");
    let reparsed = InstructionSequence::from_text(&fit.instructions.join(", ")).unwrap();
    assert_eq!(reparsed.expression(), fit.expression);
}

#[test]
fn fixed_seeds_reproduce_runs_exactly() {
    let first = test_engine(linear_series(25), 77)
        .run(Dimension::Row, SilentProgressCallback)
        .unwrap();
    let second = test_engine(linear_series(25), 77)
        .run(Dimension::Row, SilentProgressCallback)
        .unwrap();

    assert_eq!(first.expression, second.expression);
    assert_eq!(first.instructions, second.instructions);
    assert_eq!(first.score, second.score);
    assert_eq!(first.rmse, second.rmse);
    assert_eq!(first.mae, second.mae);
}

#[test]
fn callback_observes_every_generation() {
    let mut callback = TestProgressCallback::new();
    let mut engine = test_engine(linear_series(20), 5);
    engine.run(Dimension::Col, &mut callback).unwrap();

    assert_eq!(callback.starts, 15);
    assert_eq!(callback.best_scores.len(), 15);
    for score in &callback.best_scores {
        assert!(score.is_nan() || (*score > 0.0 && *score <= 1.0));
    }
}

#[test]
fn negative_valued_targets_still_evolve() {
    // ln draws poison candidates on this target; the engine must keep going.
    let time: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let values: Vec<f64> = time.iter().map(|t| -5.0 * t).collect();
    let series = SampleSeries::new(time, values).unwrap();

    let fit = test_engine(series, 9)
        .run(Dimension::Row, SilentProgressCallback)
        .unwrap();
    assert!(fit.score > 0.0 && fit.score <= 1.0);
}

#[test]
fn zero_population_size_is_rejected() {
    let config = EvolutionConfig {
        population_size: 0,
        generations: 5,
        seed: Some(1),
    };
    let mut engine = EvolutionEngine::new(config, Evaluator::new(linear_series(10)));
    let err = engine.run(Dimension::Row, SilentProgressCallback).unwrap_err();
    assert!(matches!(err, TrackfitError::Validation(_)));
}

#[test]
fn zero_generations_are_rejected() {
    let config = EvolutionConfig {
        population_size: 10,
        generations: 0,
        seed: Some(1),
    };
    let mut engine = EvolutionEngine::new(config, Evaluator::new(linear_series(10)));
    let err = engine.run(Dimension::Row, SilentProgressCallback).unwrap_err();
    assert!(matches!(err, TrackfitError::Validation(_)));
}

#[test]
fn single_member_populations_die_out_at_selection() {
    // floor(1 / 2) = 0 survivors, so the final population is empty and the
    // engine reports it rather than panicking.
    let config = EvolutionConfig {
        population_size: 1,
        generations: 1,
        seed: Some(1),
    };
    let mut engine = EvolutionEngine::new(config, Evaluator::new(linear_series(10)));
    let err = engine.run(Dimension::Row, SilentProgressCallback).unwrap_err();
    assert!(matches!(err, TrackfitError::Validation(_)));
}
