//! tokchunk CLI - chunk tokenized corpora from the command line
//!
//! # Examples
//!
//! ```bash
//! # 128-token windows, 16 tokens shared between neighbours
//! tokchunk chunk corpus.json --size 128 --overlap 16 --output chunks.json
//!
//! # Read from stdin, single-threaded
//! cat corpus.json | tokchunk chunk - --size 2 --sequential
//!
//! # Show configuration
//! tokchunk show-config --all
//! ```

use clap::Parser;
use tokchunk::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_env("TOKCHUNK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("tokchunk=warn"));

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // stdout carries chunk output
        .with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(false).compact().init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
