/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The full analysis of a graph.
//!
//! [`analyze`] chains the stages of the analysis:
//!
//! ```text
//! Graph
//!   ↓  kosaraju
//! Sccs
//!   ↓  Condensation::new
//! Condensation (DAG)
//!   ↓  top_sort
//! topological order, or CycleError
//!   ↓  shortest_paths / longest_paths
//! Distances, critical path length
//! ```
//!
//! Each stage runs with its own [`Instrumentation`], which is returned
//! together with the output of the stage. If the topological sort fails, the
//! path stages are skipped, and if the configured source is not a node of
//! the condensation, the shortest-path stage is skipped. In both cases the
//! run is still returned, and the [record](AnalysisRecord) built from it
//! marks the skipped fields as not available.

mod record;
pub use record::*;

use crate::{
    algo::{
        dag_paths::{longest_paths, shortest_paths, Distances, LongestPaths, PathError},
        sccs::{kosaraju, Condensation, Sccs},
        top_sort::{top_sort, CycleError},
    },
    graph::{Graph, Weight},
    utils::instrumentation::Instrumentation,
};
use dsi_progress_logger::ProgressLog;

/// How to choose the source component of the shortest-path stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Source {
    /// The first component of the topological order.
    #[default]
    FirstInOrder,
    /// A given component.
    Component(usize),
}

/// Configuration of [`analyze`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub source: Source,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source of the shortest-path stage.
    pub fn source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }
}

/// The output of a stage together with the instrumentation of its run.
#[derive(Debug, Clone)]
pub struct Stage<T> {
    pub output: T,
    pub stats: Instrumentation,
}

/// The output of the shortest-path stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    /// The source component, or `None` if the condensation is empty.
    pub source: Option<usize>,
    pub distances: Distances,
}

/// All the results of an [`analyze`] run.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub sccs: Stage<Sccs>,
    pub condensation: Condensation,
    pub top_sort: Stage<Result<Box<[usize]>, CycleError>>,
    /// `None` if the topological sort failed or the configured source is not
    /// a node of the condensation.
    pub shortest: Option<Stage<ShortestPaths>>,
    /// `None` if the topological sort failed.
    pub longest: Option<Stage<LongestPaths>>,
}

impl PipelineRun {
    /// The topological order of the condensation, if it exists.
    pub fn top_order(&self) -> Option<&[usize]> {
        self.top_sort.output.as_deref().ok()
    }

    /// The critical path length, if the longest-path stage has run.
    pub fn critical_path_length(&self) -> Option<Weight> {
        self.longest
            .as_ref()
            .map(|stage| stage.output.critical_path_length())
    }
}

/// Runs the whole analysis on `graph`.
///
/// The graph is never modified: the condensation is a new graph. A
/// [`Source::Component`] that is not a node of the condensation only skips
/// the shortest-path stage. Errors are possible only if a stage breaks the
/// preconditions of the next one.
///
/// # Arguments
/// * `graph`: the graph to analyze.
/// * `config`: the configuration of the analysis.
/// * `pl`: a progress logger, passed to each stage in turn.
pub fn analyze(
    graph: &Graph,
    config: &PipelineConfig,
    pl: &mut impl ProgressLog,
) -> Result<PipelineRun, PathError> {
    let mut stats = Instrumentation::new();
    let sccs = kosaraju(graph, &mut stats, pl);
    log::debug!(
        "Found {} strongly connected components in {:?}",
        sccs.num_components(),
        stats.elapsed()
    );
    let sccs = Stage {
        output: sccs,
        stats,
    };

    let condensation = Condensation::new(graph, &sccs.output, pl);
    let dag = condensation.graph();

    let mut stats = Instrumentation::new();
    let top_sort = Stage {
        output: top_sort(dag, &mut stats, pl),
        stats,
    };

    let (shortest, longest) = match &top_sort.output {
        Ok(order) => {
            let source = match config.source {
                Source::FirstInOrder => order.first().copied(),
                Source::Component(c) => Some(c),
            };

            let mut stats = Instrumentation::new();
            let distances = match source {
                Some(source) => match shortest_paths(dag, order, source, &mut stats, pl) {
                    Ok(distances) => Some(distances),
                    Err(err @ PathError::SourceOutOfRange { .. }) => {
                        log::warn!("Skipping shortest paths: {}", err);
                        None
                    }
                    Err(err) => return Err(err),
                },
                None => {
                    // Empty condensation: nothing to relax
                    stats.start();
                    stats.stop();
                    Some(Distances::default())
                }
            };
            let shortest = distances.map(|distances| Stage {
                output: ShortestPaths { source, distances },
                stats,
            });

            let mut stats = Instrumentation::new();
            let longest = Stage {
                output: longest_paths(dag, order, &mut stats, pl)?,
                stats,
            };
            log::debug!(
                "Critical path length: {}",
                longest.output.critical_path_length()
            );

            (shortest, Some(longest))
        }
        Err(err) => {
            log::warn!("Skipping path computations: {}", err);
            (None, None)
        }
    };

    Ok(PipelineRun {
        sccs,
        condensation,
        top_sort,
        shortest,
        longest,
    })
}
