// Evolves symbolic fits for both coordinates of a generated ballistic
// trajectory and prints what it found.
//
// Run with: cargo run --example fit_track

use anyhow::Result;
use trackfit::detect::{SourceRegistry, TrackSource};
use trackfit::engines::evaluation::Evaluator;
use trackfit::engines::generation::{
    ConsoleProgressCallback, EvolutionConfig, EvolutionEngine, InstructionSequence,
};
use trackfit::types::Dimension;

fn main() -> Result<()> {
    env_logger::init();

    let registry = SourceRegistry::new();
    let source = registry.get("synthetic")?;
    let tracks = source.extract(None)?;
    let track = &tracks[0];

    println!("=== Fitting a {}-frame ballistic trajectory ===", track.len());

    for (dimension, seed) in [(Dimension::Row, 11), (Dimension::Col, 12)] {
        println!("\n--- {} coordinate ---", dimension);

        let series = track.series(dimension)?;
        let config = EvolutionConfig {
            population_size: 60,
            generations: 25,
            seed: Some(seed),
        };
        let mut engine = EvolutionEngine::new(config, Evaluator::new(series.clone()));
        let fit = engine.run(dimension, ConsoleProgressCallback)?;

        println!("\nbest fit: {}", fit.expression);
        println!("program:  {}", fit.instructions.join(", "));
        println!(
            "score {:.4}  rmse {:.4}  mae {:.4}",
            fit.score, fit.rmse, fit.mae
        );

        // Spot-check the fit against the real trajectory.
        let mut program = InstructionSequence::from_text(&fit.instructions.join(", "))?;
        let predicted = program.evaluate(series.time());
        println!("frame  actual     predicted");
        for frame in (0..series.len()).step_by(15) {
            println!(
                "{:>5}  {:>9.2}  {:>9.2}",
                frame,
                series.values()[frame],
                predicted[frame]
            );
        }
    }

    Ok(())
}
