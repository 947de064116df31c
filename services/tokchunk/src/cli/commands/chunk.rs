//! Chunk command - split a corpus file into token windows

use crate::cli::output::{colors, format_count, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::chunker::{ChunkingPipeline, WindowConfig};
use crate::core::config::{ChunkingConfig, Config, ParallelConfig};
use crate::core::error::Result as CoreResult;
use crate::core::corpus::{ChunkedDocument, Corpus};
use crate::core::types::{ChunkStats, ExecutionMode};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the chunk command
#[derive(Args, Debug)]
pub struct ChunkArgs {
    /// Corpus JSON file (`-` reads stdin)
    pub input: PathBuf,

    /// Tokens per chunk [default: from config]
    #[arg(long, short = 's', allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Tokens per chunk that repeat in the next chunk [default: from config]
    #[arg(long, short = 'o', allow_negative_numbers = true)]
    pub overlap: Option<i64>,

    /// Worker threads (0 = one per core)
    #[arg(long, short = 't', conflicts_with = "sequential")]
    pub threads: Option<usize>,

    /// Process one document at a time
    #[arg(long)]
    pub sequential: bool,

    /// Write chunks to this file instead of stdout
    #[arg(long, short = 'w')]
    pub output: Option<PathBuf>,

    /// Pretty-print the chunk JSON
    #[arg(long)]
    pub pretty: bool,

    /// Suppress the summary on stderr
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Chunking result summary
#[derive(Debug, Serialize)]
pub struct ChunkResponse {
    pub input: String,
    pub output: Option<String>,
    pub size: usize,
    pub overlap: usize,
    pub mode: ExecutionMode,
    pub documents: usize,
    pub empty_documents: usize,
    pub chunks_created: usize,
    pub tokens_in: usize,
    pub tokens_out: usize,
    pub duration_secs: f64,
}

/// Parallel settings after applying `--sequential` and `--threads`
pub fn effective_parallel(args: &ChunkArgs, config: &Config) -> ParallelConfig {
    let mut parallel = config.parallel.clone();

    if args.sequential {
        parallel.enabled = false;
    } else if let Some(threads) = args.threads {
        parallel.enabled = true;
        parallel.threads = threads;
    }

    parallel
}

/// Configuration after applying the command-line flags.
///
/// Flag values are signed so that negative input reaches window
/// validation instead of failing in the parser.
pub fn effective_config(args: &ChunkArgs, config: &Config) -> CoreResult<Config> {
    let size = args.size.unwrap_or_else(|| signed(config.chunking.size));
    let overlap = args.overlap.unwrap_or_else(|| signed(config.chunking.overlap));
    let window = WindowConfig::from_signed(size, overlap)?;

    Ok(Config {
        chunking: ChunkingConfig {
            size: window.size(),
            overlap: window.overlap(),
        },
        parallel: effective_parallel(args, config),
    })
}

fn signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Execute the chunk command
pub fn execute(
    args: ChunkArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate before touching the corpus
    let effective = effective_config(&args, config)?;
    let pipeline = ChunkingPipeline::new(&effective)?;

    let corpus = Corpus::from_file(&args.input)?;

    let (output, stats) = pipeline.run(corpus.documents());

    let document = ChunkedDocument::new(&corpus, output);
    document.write(args.output.as_deref(), args.pretty)?;

    if args.quiet {
        return Ok(());
    }

    if stats.chunks_created == 0 && stats.documents > 0 {
        print_warning(&format!(
            "all {} documents are empty, no chunks were produced",
            stats.documents
        ));
    }

    let response = summarize(&args, pipeline.window(), &stats);

    match format {
        OutputFormat::Human => {
            eprintln!(
                "{} {} documents into {} chunks ({} empty skipped) in {}",
                colors::success("Chunked"),
                colors::number(&format_count(response.documents)),
                colors::number(&format_count(response.chunks_created)),
                colors::number(&format_count(response.empty_documents)),
                colors::number(&format_duration(response.duration_secs))
            );
            eprintln!(
                "{} size={} overlap={} mode={}",
                colors::dim("Window:"),
                response.size,
                response.overlap,
                response.mode
            );
            if let Some(path) = &response.output {
                eprintln!("{} {}", colors::dim("Written to"), colors::file_path(path));
            }
        }
        OutputFormat::Json => {
            eprintln!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn summarize(args: &ChunkArgs, window: &WindowConfig, stats: &ChunkStats) -> ChunkResponse {
    ChunkResponse {
        input: args.input.to_string_lossy().into_owned(),
        output: args
            .output
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        size: window.size(),
        overlap: window.overlap(),
        mode: stats.mode,
        documents: stats.documents,
        empty_documents: stats.empty_documents,
        chunks_created: stats.chunks_created,
        tokens_in: stats.tokens_in,
        tokens_out: stats.tokens_out,
        duration_secs: stats.duration_ms as f64 / 1000.0,
    }
}
