//! trackfit - evolutionary symbolic fitting of tracked trajectories.
//!
//! This crate evolves compact, human-readable functions y = f(x) that
//! approximate a target time series, such as one coordinate of an object
//! tracked across video frames. Candidates are short instruction programs
//! ("y = x, y = y * 2, y = y + 1") refined by a generate-evaluate-select-
//! mutate loop; there is no crossover.
//!
//! # Architecture
//!
//! - `engines::generation`: instruction sequences, the mutation catalog,
//!   population mechanics, and the evolution engine
//! - `engines::evaluation`: scoring candidates against a fitting target
//! - `engines::metrics`: RMSE/MAE similarity
//! - `detect`: pluggable sources of tracked trajectories
//! - `data`: sample series and frame-to-instance transforms
//! - `config`: TOML-backed application configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use trackfit::data::SampleSeries;
//! use trackfit::engines::evaluation::Evaluator;
//! use trackfit::engines::generation::{
//!     EvolutionConfig, EvolutionEngine, SilentProgressCallback,
//! };
//! use trackfit::types::Dimension;
//!
//! // Fit y = 0.5 * x^2 + 3 sampled over 30 frames.
//! let time: Vec<f64> = (0..30).map(|i| i as f64).collect();
//! let values: Vec<f64> = time.iter().map(|t| t * t * 0.5 + 3.0).collect();
//! let series = SampleSeries::new(time, values).unwrap();
//!
//! let config = EvolutionConfig {
//!     population_size: 100,
//!     generations: 40,
//!     seed: Some(7),
//! };
//! let mut engine = EvolutionEngine::new(config, Evaluator::new(series));
//! let fit = engine.run(Dimension::Row, SilentProgressCallback).unwrap();
//! println!("{} (score {:.4})", fit.expression, fit.score);
//! ```

pub mod config;
pub mod data;
pub mod detect;
pub mod engines;
pub mod error;
pub mod types;

pub use error::{Result, TrackfitError};
pub use types::{Dimension, FittedFunction, Instruction, TrackReport};
