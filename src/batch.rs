/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Batch analysis of datasets stored as JSON files.
//!
//! A dataset is a JSON object of the form
//!
//! ```json
//! { "vertices": 3, "edges": [[0, 1, 5], [1, 2, -2]] }
//! ```
//!
//! where each edge is a `[from, to, weight]` triple. Each dataset is
//! analyzed by an independent [pipeline run](crate::pipeline::analyze), and
//! the resulting [records](AnalysisRecord) are written as CSV.

use crate::graph::{Graph, Weight};
use crate::pipeline::{analyze, AnalysisRecord, PipelineConfig, COLUMNS};
use crate::utils::Threads;
use anyhow::{Context, Result};
use dsi_progress_logger::no_logging;
use rayon::prelude::*;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// The content of a dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphData {
    pub vertices: usize,
    pub edges: Vec<(usize, usize, Weight)>,
}

impl GraphData {
    /// Builds the graph, checking that all edges are in range.
    pub fn into_graph(self) -> Result<Graph> {
        Graph::from_edges(self.vertices, self.edges).with_context(|| "Invalid edge list")
    }
}

/// Configuration of a batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchConfig {
    pub threads: Threads,
    pub pipeline: PipelineConfig,
}

/// Reads and validates a dataset file.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let data: GraphData = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Cannot parse {}", path.display()))?;
    data.into_graph()
        .with_context(|| format!("Cannot build graph from {}", path.display()))
}

/// Returns the `.json` files (case-insensitive) in `dir`, sorted by name.
pub fn find_datasets(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut datasets = Vec::new();
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("Cannot read {}", dir.display()))?
    {
        let path = entry?.path();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json && path.is_file() {
            datasets.push(path);
        }
    }
    datasets.sort();
    Ok(datasets)
}

fn label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Loads and analyzes a single dataset.
pub fn process_dataset(path: impl AsRef<Path>, config: &PipelineConfig) -> Result<AnalysisRecord> {
    let path = path.as_ref();
    let graph = load_graph(path)?;
    let run = analyze(&graph, config, no_logging![])
        .with_context(|| format!("Cannot analyze {}", path.display()))?;
    Ok(AnalysisRecord::from_run(label(path), &graph, &run))
}

/// Analyzes all datasets, in parallel, returning one result per dataset in
/// the same order as `paths`.
///
/// Runs are completely independent: a dataset that cannot be loaded or
/// analyzed yields an error in its own slot and does not affect the others.
pub fn process_datasets(
    paths: &[PathBuf],
    config: &BatchConfig,
) -> Result<Vec<Result<AnalysisRecord>>> {
    let pool = config.threads.build()?;
    Ok(pool.install(|| {
        paths
            .par_iter()
            .map(|path| process_dataset(path, &config.pipeline))
            .collect()
    }))
}

/// Writes the records as CSV, with a header line.
pub fn write_csv<'a>(
    records: impl IntoIterator<Item = &'a AnalysisRecord>,
    mut writer: impl Write,
) -> Result<()> {
    writeln!(writer, "{}", COLUMNS.join(","))?;
    for record in records {
        let row: Vec<String> = record.fields().iter().map(ToString::to_string).collect();
        writeln!(writer, "{}", row.join(","))?;
    }
    writer.flush()?;
    Ok(())
}
