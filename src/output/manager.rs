// Fri Oct 16 2026 - Alex

use crate::config::Config;
use crate::generator::Program;
use crate::output::{emit, CppSource, GenerationSummary, OutputError, OutputResult};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the generated program and its optional summary to their destinations.
pub struct OutputManager<'a> {
    program: &'a Program,
    config: &'a Config,
    output_path: Option<PathBuf>,
    summary_path: Option<PathBuf>,
}

impl<'a> OutputManager<'a> {
    pub fn new(program: &'a Program, config: &'a Config) -> Self {
        Self {
            program,
            config,
            output_path: None,
            summary_path: None,
        }
    }

    pub fn with_output_path(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }

    pub fn with_summary_path(mut self, path: Option<PathBuf>) -> Self {
        self.summary_path = path;
        self
    }

    pub fn render(&self) -> String {
        emit(self.program, self.config)
    }

    /// Streams the program to `writer`.
    pub fn write_program_to<W: Write>(&self, writer: &mut W) -> OutputResult<()> {
        write!(writer, "{}", CppSource::new(self.program, self.config))?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the program to the output path, or stdout when none is set.
    pub fn write_program(&self) -> OutputResult<()> {
        match &self.output_path {
            Some(path) => {
                let file = create_file(path)?;
                let mut writer = BufWriter::new(file);
                self.write_program_to(&mut writer)?;
                log::info!("Program written to {}", path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut writer = BufWriter::new(stdout.lock());
                self.write_program_to(&mut writer)?;
            }
        }
        Ok(())
    }

    pub fn summary(&self) -> GenerationSummary {
        GenerationSummary::new(self.program, self.config)
    }

    /// Writes the JSON summary if a summary path was configured.
    pub fn write_summary(&self) -> OutputResult<Option<&Path>> {
        let Some(path) = self.summary_path.as_deref() else {
            return Ok(None);
        };
        let json = self.summary().to_json()?;
        let mut file = create_file(path)?;
        file.write_all(json.as_bytes())?;
        log::info!("Summary written to {}", path.display());
        Ok(Some(path))
    }
}

fn create_file(path: &Path) -> OutputResult<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::Create {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })
}
