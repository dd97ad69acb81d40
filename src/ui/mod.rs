// Fri Oct 16 2026 - Alex

pub mod cli;

pub use cli::{Args, CommandHandler};

pub fn print_error(error: &anyhow::Error) {
    use colored::Colorize;
    eprintln!("{} {}", "[!]".red(), error);
    for cause in error.chain().skip(1) {
        eprintln!("    {} {}", "caused by:".dimmed(), cause);
    }
}
