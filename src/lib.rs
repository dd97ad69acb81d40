// Fri Oct 16 2026 - Alex

pub mod config;
pub mod generator;
pub mod output;
pub mod random;
pub mod structure;
pub mod ui;
pub mod utils;

pub use config::{Config, Dialect};
pub use generator::{generate, Program};
pub use output::{CppSource, GenerationSummary, OutputManager};
pub use random::RandomStream;
pub use structure::{Class, ClassId, Field, HierarchyStats, Registry};
