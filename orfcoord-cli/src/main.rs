//! # orfcoord
//!
//! Builds an ORF coordinate table from a GenBank file.
//!
//! ```bash
//! orfcoord --input_file genomes.gb --orf_map_file orf_map.csv
//! # writes genomes_orf.txt
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use cli::{ArgCheck, Args};

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .unwrap_or_else(|e| eprintln!("failed to initialize logger: {e}"));

    let args = Args::parse();
    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    run(&args).unwrap_or_else(|e| {
        error!("{:#}", e);
        std::process::exit(1);
    });
}

fn run(args: &Args) -> Result<()> {
    let summary = orfcoord_core::run(&args.input_file, &args.orf_map_file).with_context(|| {
        format!(
            "failed to extract ORF coordinates from {}",
            args.input_file.display()
        )
    })?;

    info!(
        "wrote {} record(s) to {} ({} feature anomalies)",
        summary.records,
        summary.output.display(),
        summary.anomalies.len()
    );
    Ok(())
}
