// Fri Oct 16 2026 - Alex

pub mod engine;

pub use engine::GenerationEngine;

use crate::config::Config;
use crate::random::RandomStream;
use crate::structure::{ClassId, Registry};

/// A finished generation pass: the classes plus the order the harness tests them in.
#[derive(Debug, Clone)]
pub struct Program {
    pub registry: Registry,
    pub test_order: Vec<ClassId>,
}

/// Generates every class, then draws the harness test order from the same stream.
pub fn generate(config: &Config, rng: &mut RandomStream) -> Program {
    let mut engine = GenerationEngine::new(config, rng);
    engine.run();
    let registry = engine.into_registry();

    let test_order = rng.permutation(registry.len()).into_iter().map(ClassId::new).collect();

    Program { registry, test_order }
}

/// Seeds a fresh stream from `config.seed` and generates.
pub fn generate_seeded(config: &Config) -> Program {
    let mut rng = RandomStream::new(config.seed);
    generate(config, &mut rng)
}
