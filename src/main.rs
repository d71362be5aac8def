//! # md-compose
//!
//! Command-line wrapper around the `md_compose` library: composes one
//! markdown document and writes the result to stdout or a file.

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

/// Resolve `[[[file.md]]]` include directives into a single document
#[derive(Parser, Debug)]
#[command(name = "md-compose")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Markdown document to compose
    input: PathBuf,

    /// Write the composed document here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Read documents with blocking I/O instead of the async runtime
    #[arg(long)]
    sync: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let composed = if cli.sync {
        md_compose::process_includes_sync(&cli.input)?
    } else {
        let runtime = tokio::runtime::Runtime::new().into_diagnostic()?;
        runtime.block_on(md_compose::process_includes(&cli.input))?
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, composed).into_diagnostic()?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{composed}"),
    }
    Ok(())
}
