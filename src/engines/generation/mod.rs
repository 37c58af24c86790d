pub mod sequence;
pub mod vocabulary;
pub mod population;
pub mod evolution_engine;
pub mod progress;

pub use sequence::InstructionSequence;
pub use population::Population;
pub use evolution_engine::{EvolutionConfig, EvolutionEngine, ProgressCallback};
pub use progress::{ConsoleProgressCallback, SilentProgressCallback};
pub use vocabulary::{random_chain, random_instruction, MUTATION_OPS};
