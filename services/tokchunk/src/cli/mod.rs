//! CLI adapter for tokchunk
//!
//! Provides the command-line interface over the chunking core.
//! The CLI owns everything the core treats as external: reading
//! corpus files, resolving configuration and writing results.
//!
//! ```text
//! +------------------+      +------------------+
//! |      cli/        | ---> |     core/        |
//! | (clap adapter)   |      |  (domain logic)  |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// tokchunk - chunk tokenized corpora
///
/// Splits each document of a tokenized corpus into fixed-size,
/// optionally overlapping windows and records the source
/// document of every chunk.
#[derive(Parser, Debug)]
#[command(name = "tokchunk")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Fixed-window chunking of tokenized corpora", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split every document of a corpus into token windows
    Chunk(commands::ChunkArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  tokchunk completions bash > ~/.local/share/bash-completion/completions/tokchunk
    ///   zsh:   tokchunk completions zsh > ~/.zfunc/_tokchunk
    ///   fish:  tokchunk completions fish > ~/.config/fish/completions/tokchunk.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    config.log_config();

    match cli.command {
        Commands::Chunk(args) => commands::chunk::execute(args, &config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
