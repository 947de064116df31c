//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::{Config, ParallelConfig};
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the config file is looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    pub chunking: ChunkingView,
    pub parallel: ParallelConfig,
}

#[derive(Debug, Serialize)]
pub struct ChunkingView {
    pub size: usize,
    pub overlap: usize,
    /// `None` when overlap is not smaller than size
    pub step: Option<usize>,
}

/// Build the response shown by `show-config`
pub fn describe(config: &Config, all: bool) -> ConfigResponse {
    let config_file = all.then(|| XdgDirs::new().config_file().to_string_lossy().into_owned());
    let step = config.chunking.window().ok().map(|w| w.step());

    ConfigResponse {
        config_file,
        chunking: ChunkingView {
            size: config.chunking.size,
            overlap: config.chunking.overlap,
            step,
        },
        parallel: config.parallel.clone(),
    }
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = describe(config, args.all);

    match format {
        OutputFormat::Human => {
            crate::cli::output::print_header("Configuration:");
            if let Some(path) = &response.config_file {
                println!("  config_file: {path}");
            }
            println!("  chunking:");
            println!("    size: {}", response.chunking.size);
            println!("    overlap: {}", response.chunking.overlap);
            match response.chunking.step {
                Some(step) => println!("    step: {step}"),
                None => println!("    step: invalid (overlap must be less than size)"),
            }
            println!("  parallel:");
            println!("    enabled: {}", response.parallel.enabled);
            println!("    threads: {}", response.parallel.threads);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
