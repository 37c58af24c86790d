use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use trackfit::config::{ConfigManager, EvolutionSettings};
use trackfit::data::TrackedPath;
use trackfit::detect::{SourceRegistry, TrackSource};
use trackfit::engines::evaluation::Evaluator;
use trackfit::engines::generation::{ConsoleProgressCallback, EvolutionConfig, EvolutionEngine};
use trackfit::types::{Dimension, FittedFunction, TrackReport};

/// Usage: trackfit [config.toml] [report.json]
fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let config_path = args.next();
    let report_path: Option<PathBuf> = args.next().map(PathBuf::from);

    let manager = ConfigManager::new();
    if let Some(path) = &config_path {
        manager
            .load_from_file(path)
            .with_context(|| format!("loading config from {}", path))?;
    }
    let config = manager.get();

    let registry = SourceRegistry::new();
    let source = registry.get(&config.detection.source)?;
    log::info!(
        "track source '{}': {}",
        source.alias(),
        source.describe()
    );

    let tracks = source.extract(config.detection.input.as_deref())?;
    println!(
        "Tracked {} instance(s) from source '{}'",
        tracks.len(),
        source.alias()
    );

    let mut reports = Vec::with_capacity(tracks.len());
    for (instance, track) in tracks.iter().enumerate() {
        println!("\nInstance {} ({} frames)", instance, track.len());

        let base = config.evolution.seed;
        let row_seed = base.map(|s| s.wrapping_add(instance as u64 * 2));
        let col_seed = base.map(|s| s.wrapping_add(instance as u64 * 2 + 1));

        let row = fit_dimension(track, Dimension::Row, &config.evolution, row_seed)?;
        let col = fit_dimension(track, Dimension::Col, &config.evolution, col_seed)?;

        reports.push(TrackReport { instance, row, col });
    }

    if let Some(path) = report_path {
        let json = serde_json::to_string_pretty(&reports)?;
        fs::write(&path, json)
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

fn fit_dimension(
    track: &TrackedPath,
    dimension: Dimension,
    settings: &EvolutionSettings,
    seed: Option<u64>,
) -> Result<FittedFunction> {
    let series = track.series(dimension)?;
    let engine_config = EvolutionConfig {
        population_size: settings.population_size,
        generations: settings.generations,
        seed,
    };
    let mut engine = EvolutionEngine::new(engine_config, Evaluator::new(series));
    let fit = engine.run(dimension, ConsoleProgressCallback)?;

    println!("  {}: {}", fit.dimension, fit.expression);
    println!(
        "       score {:.4}  rmse {:.4}  mae {:.4}",
        fit.score, fit.rmse, fit.mae
    );
    println!("       instructions: {}", fit.instructions.join(", "));
    Ok(fit)
}
