/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components, condensation, topological sort, and
//! shortest and longest paths on the resulting directed acyclic graph, with
//! per-stage instrumentation.

pub mod algo;
pub mod batch;
pub mod graph;
pub mod pipeline;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
}

/// Use `use scc_dag_algo::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::dag_paths::{self, Distance, Distances};
    pub use algo::sccs;
    pub use algo::top_sort::{top_sort, CycleError};
    pub use algo::visits::depth_first;
    pub use graph::{Graph, Weight};
    pub use pipeline::{analyze, AnalysisRecord, PipelineConfig, PipelineRun, Source};
    pub use traits::*;
    pub use utils::instrumentation::Instrumentation;
    pub use utils::Threads;
}
