/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};
use clap::Parser;
use dsi_progress_logger::prelude::*;
use scc_dag_algo::batch::{find_datasets, process_datasets, write_csv, BatchConfig};
use scc_dag_algo::pipeline::{AnalysisRecord, PipelineConfig, Source};
use scc_dag_algo::utils::Threads;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "scc-dag",
    about = "Analyzes every JSON graph in a directory: strongly connected components, condensation, topological sort, and shortest and longest paths.",
    version
)]
struct Args {
    /// The directory containing the datasets.
    #[arg(default_value = "data")]
    data_dir: PathBuf,

    /// The CSV file to write the results to.
    #[arg(short, long, default_value = "results.csv")]
    output: PathBuf,

    /// The number of threads (defaults to the number of available cores).
    #[arg(short, long)]
    threads: Option<usize>,

    /// The source component of the shortest-path computation (defaults to
    /// the first component in topological order).
    #[arg(long)]
    source: Option<usize>,

    /// Increases the verbosity of the log (can be repeated).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(2 + args.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let datasets = find_datasets(&args.data_dir)?;
    if datasets.is_empty() {
        log::warn!("No JSON datasets found in {}", args.data_dir.display());
    }

    let pipeline = match args.source {
        Some(c) => PipelineConfig::new().source(Source::Component(c)),
        None => PipelineConfig::new(),
    };
    let config = BatchConfig {
        threads: Threads::from(args.threads),
        pipeline,
    };

    let mut main_pl = progress_logger![item_name = "dataset", display_memory = true];
    main_pl.start(format!("Analyzing {} datasets...", datasets.len()));

    let mut records = Vec::with_capacity(datasets.len());
    for (path, result) in datasets.iter().zip(process_datasets(&datasets, &config)?) {
        match result {
            Ok(record) => {
                log_summary(&record);
                records.push(record);
            }
            Err(err) => log::error!("Skipping {}: {:#}", path.display(), err),
        }
        main_pl.update();
    }
    main_pl.done();

    let file = File::create(&args.output)
        .with_context(|| format!("Cannot create {}", args.output.display()))?;
    write_csv(&records, BufWriter::new(file))?;
    log::info!(
        "Wrote {} records to {}",
        records.len(),
        args.output.display()
    );

    Ok(())
}

fn log_summary(record: &AnalysisRecord) {
    let summary: Vec<String> = record
        .iter()
        .skip(1)
        .map(|(column, field)| format!("{}={}", column, field))
        .collect();
    if let Some((_, label)) = record.iter().next() {
        log::info!("{}: {}", label, summary.join(", "));
    }
}
