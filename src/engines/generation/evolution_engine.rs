// src/engines/generation/evolution_engine.rs
use crate::engines::evaluation::Evaluator;
use crate::engines::generation::population::Population;
use crate::engines::metrics::SimilarityMetrics;
use crate::error::{Result, TrackfitError};
use crate::types::{Dimension, FittedFunction};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    /// Fixed seed for reproducible runs; None draws from entropy.
    pub seed: Option<u64>,
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_score: f64);
}

/// Generate-evaluate-select-mutate search over instruction sequences.
///
/// One `StdRng` drives seeding and mutation; evaluation draws nothing, so a
/// fixed seed reproduces a run exactly.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    evaluator: Evaluator,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig, evaluator: Evaluator) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            evaluator,
            rng,
        }
    }

    /// Run the full evolution and report the best candidate found.
    ///
    /// Every generation is evaluate, select, mutate, in that order, with no
    /// early stop. Mutation runs in the final round too, so the winner can be
    /// an unevaluated clone carrying its parent's score; the finalizer
    /// re-scores it against the series so the report is always fresh.
    pub fn run<C: ProgressCallback>(
        &mut self,
        dimension: Dimension,
        mut callback: C,
    ) -> Result<FittedFunction> {
        if self.config.population_size == 0 {
            return Err(TrackfitError::Validation(
                "population size must be at least 1".to_string(),
            ));
        }
        if self.config.generations == 0 {
            return Err(TrackfitError::Validation(
                "generation count must be at least 1".to_string(),
            ));
        }

        log::info!(
            "evolving {} dimension: population {}, {} generations",
            dimension,
            self.config.population_size,
            self.config.generations
        );

        let mut population = Population::seed(self.config.population_size, &mut self.rng)?;

        for generation in 0..self.config.generations {
            callback.on_generation_start(generation);

            population.evaluate_all(&self.evaluator)?;
            let best_score = population.best()?.score();
            log::debug!("generation {}: best score {:.6}", generation, best_score);
            callback.on_generation_complete(generation, best_score);

            population.select_survivors();
            population.mutate_and_repopulate(&mut self.rng)?;
        }

        let mut best = population.best()?.clone();
        let predicted = best.evaluate(self.evaluator.series().time());
        let metrics = SimilarityMetrics::evaluate(&predicted, self.evaluator.series().values())?;

        log::info!(
            "{} fit: {} (score {:.6})",
            dimension,
            best.expression(),
            metrics.score
        );

        Ok(FittedFunction {
            dimension,
            expression: best.expression().to_string(),
            instructions: best.instruction_texts(),
            score: metrics.score,
            rmse: metrics.rmse,
            mae: metrics.mae,
        })
    }
}
