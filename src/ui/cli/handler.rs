// Fri Oct 16 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::generator::{self, Program};
use crate::output::OutputManager;
use crate::random::RandomStream;
use crate::structure::HierarchyStats;
use crate::utils::{pluralize, scoped_timer, LoggingUtils};
use anyhow::Context;
use colored::Colorize;

pub struct CommandHandler {
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn execute(&mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;
        self.setup_logging(&args)?;

        let config = self.resolve_config(&args)?;
        let program = self.generate(&config);
        self.write(&args, &program, &config)
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = LoggingUtils::level_from_str(&args.log_level)
            .with_context(|| format!("Unknown log level '{}'", args.log_level))?;
        let level = if self.quiet { log::LevelFilter::Error.min(level) } else { level };
        LoggingUtils::init_logger(level);
        Ok(())
    }

    fn resolve_config(&self, args: &Args) -> anyhow::Result<Config> {
        let base = match &args.config {
            Some(path) => {
                self.status(&format!("Loading config: {}", path.display()));
                Config::load(path).with_context(|| format!("Failed to load config {}", path.display()))?
            }
            None => Config::default(),
        };
        let config = args.apply(base);
        config.validate().context("Invalid configuration")?;
        log::debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    fn generate(&self, config: &Config) -> Program {
        let _timer = scoped_timer("generation");
        self.status(&format!(
            "Generating {} (seed {}, {:?} dialect)",
            pluralize(config.num_classes, "class", "classes"),
            config.seed,
            config.dialect
        ));

        let mut rng = RandomStream::new(config.seed);
        let program = generator::generate(config, &mut rng);

        let stats = HierarchyStats::from_registry(&program.registry);
        log::info!("{}", stats);
        self.success(&format!(
            "Generated {} with {}",
            pluralize(stats.total_classes, "class", "classes"),
            pluralize(stats.total_fields, "field", "fields")
        ));
        program
    }

    fn write(&self, args: &Args, program: &Program, config: &Config) -> anyhow::Result<()> {
        let _timer = scoped_timer("emission");
        let manager = OutputManager::new(program, config)
            .with_output_path(args.output.clone())
            .with_summary_path(args.summary.clone());

        manager.write_program().context("Failed to write program")?;
        if let Some(path) = &args.output {
            self.success(&format!("Program written to: {}", path.display()));
        }
        if let Some(path) = manager.write_summary().context("Failed to write summary")? {
            self.success(&format!("Summary written to: {}", path.display()));
        }
        Ok(())
    }

    fn status(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "[*]".blue(), message);
        }
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "[+]".green(), message);
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
