// Fri Oct 16 2026 - Alex

pub mod emitter;
pub mod harness;
pub mod manager;
pub mod summary;

pub use emitter::{offset_report, ClassDefinition, CppSource};
pub use manager::OutputManager;
pub use summary::{ClassSummary, GenerationSummary};

use crate::config::Config;
use crate::generator::Program;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Renders the whole program as C++ source text.
pub fn emit(program: &Program, config: &Config) -> String {
    CppSource::new(program, config).to_string()
}
