/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::PipelineRun;
use crate::graph::Graph;
use crate::utils::instrumentation::{
    Instrumentation, DFS_VISITS, QUEUE_POPS, QUEUE_PUSHES, RELAXATIONS, RELAXATIONS_LONGEST,
};
use std::fmt;

/// The columns of an [`AnalysisRecord`], in order.
pub const COLUMNS: [&str; 13] = [
    "Filename",
    "Vertices",
    "Edges",
    "Num_SCCs",
    "SCC_Time_ns",
    "SCC_DFS_Visits",
    "Topo_Sort_Time_ns",
    "Topo_Sort_Queue_Ops",
    "Shortest_Path_Time_ns",
    "Shortest_Path_Relaxations",
    "Critical_Path_Length",
    "Longest_Path_Time_ns",
    "Longest_Path_Relaxations",
];

/// The value of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Text(String),
    Count(u64),
    Int(i64),
    /// The value was not computed (e.g., because the topological sort
    /// failed).
    NotAvailable,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Count(c) => write!(f, "{}", c),
            Self::Int(i) => write!(f, "{}", i),
            Self::NotAvailable => f.write_str("N/A"),
        }
    }
}

fn count(n: usize) -> Field {
    Field::Count(n as u64)
}

fn nanos(stats: &Instrumentation) -> Field {
    Field::Count(u64::try_from(stats.elapsed().as_nanos()).unwrap_or(u64::MAX))
}

/// The summary of a [`PipelineRun`] as a fixed set of [columns](COLUMNS).
///
/// Fields that were not computed are [`Field::NotAvailable`] rather than
/// missing, so all records have the same columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRecord {
    fields: [Field; COLUMNS.len()],
}

impl AnalysisRecord {
    /// Builds the record of a run.
    ///
    /// # Arguments
    /// * `label`: the value of the `Filename` column.
    /// * `graph`: the graph that has been analyzed.
    /// * `run`: the results of the analysis of `graph`.
    pub fn from_run(label: impl Into<String>, graph: &Graph, run: &PipelineRun) -> Self {
        let mut record = Self::not_available(label);
        let fields = &mut record.fields;

        fields[1] = count(graph.num_nodes());
        fields[2] = count(graph.num_arcs());
        fields[3] = count(run.sccs.output.num_components());
        fields[4] = nanos(&run.sccs.stats);
        fields[5] = Field::Count(run.sccs.stats.operation(DFS_VISITS));

        if run.top_sort.output.is_ok() {
            let stats = &run.top_sort.stats;
            fields[6] = nanos(stats);
            fields[7] = Field::Count(stats.operation(QUEUE_PUSHES) + stats.operation(QUEUE_POPS));
        }

        if let Some(shortest) = &run.shortest {
            fields[8] = nanos(&shortest.stats);
            fields[9] = Field::Count(shortest.stats.operation(RELAXATIONS));
        }

        if let Some(longest) = &run.longest {
            fields[10] = Field::Int(longest.output.critical_path_length());
            fields[11] = nanos(&longest.stats);
            fields[12] = Field::Count(longest.stats.operation(RELAXATIONS_LONGEST));
        }

        record
    }

    /// A record in which every field but the label is not available.
    ///
    /// Used for inputs that could not be analyzed at all.
    pub fn not_available(label: impl Into<String>) -> Self {
        let mut fields: [Field; COLUMNS.len()] = std::array::from_fn(|_| Field::NotAvailable);
        fields[0] = Field::Text(label.into());
        Self { fields }
    }

    /// Returns the field of the given column, if the column exists.
    pub fn get(&self, column: &str) -> Option<&Field> {
        COLUMNS
            .iter()
            .position(|&c| c == column)
            .map(|index| &self.fields[index])
    }

    /// The fields, in the order of [`COLUMNS`].
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Iterates over `(column, field)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Field)> + '_ {
        COLUMNS.iter().copied().zip(self.fields.iter())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pipeline::{analyze, PipelineConfig, Source};
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_full_record() -> anyhow::Result<()> {
        let graph = Graph::from_edges(4, [(0, 1, 3), (1, 0, 1), (1, 2, 4), (2, 3, -2)])?;
        let run = analyze(&graph, &PipelineConfig::default(), no_logging![])?;
        let record = AnalysisRecord::from_run("g.json", &graph, &run);

        assert_eq!(record.get("Filename"), Some(&Field::Text("g.json".into())));
        assert_eq!(record.get("Vertices"), Some(&Field::Count(4)));
        assert_eq!(record.get("Edges"), Some(&Field::Count(4)));
        assert_eq!(record.get("Num_SCCs"), Some(&Field::Count(3)));
        assert_eq!(record.get("SCC_DFS_Visits"), Some(&Field::Count(8)));
        // Three pushes and three pops on the chain {0, 1} -> 2 -> 3
        assert_eq!(record.get("Topo_Sort_Queue_Ops"), Some(&Field::Count(6)));
        assert_eq!(record.get("Shortest_Path_Relaxations"), Some(&Field::Count(2)));
        assert_eq!(record.get("Critical_Path_Length"), Some(&Field::Int(4)));
        assert_eq!(record.get("Longest_Path_Relaxations"), Some(&Field::Count(2)));
        assert!(record.fields().iter().all(|f| *f != Field::NotAvailable));
        assert_eq!(record.get("Nonexistent"), None);
        Ok(())
    }

    #[test]
    fn test_bad_source_record() -> anyhow::Result<()> {
        let graph = Graph::from_edges(3, [(0, 1, 1), (1, 2, 2)])?;
        let config = PipelineConfig::new().source(Source::Component(7));
        let run = analyze(&graph, &config, no_logging![])?;
        let record = AnalysisRecord::from_run("g.json", &graph, &run);

        assert_eq!(record.get("Num_SCCs"), Some(&Field::Count(3)));
        assert_eq!(record.get("Topo_Sort_Queue_Ops"), Some(&Field::Count(6)));
        assert_eq!(record.get("Shortest_Path_Time_ns"), Some(&Field::NotAvailable));
        assert_eq!(
            record.get("Shortest_Path_Relaxations"),
            Some(&Field::NotAvailable)
        );
        assert_eq!(record.get("Critical_Path_Length"), Some(&Field::Int(3)));
        assert_eq!(record.get("Longest_Path_Relaxations"), Some(&Field::Count(2)));
        Ok(())
    }

    #[test]
    fn test_not_available() {
        let record = AnalysisRecord::not_available("broken.json");
        let rendered: Vec<String> = record.fields().iter().map(ToString::to_string).collect();
        assert_eq!(rendered[0], "broken.json");
        assert!(rendered[1..].iter().all(|f| f == "N/A"));
        assert_eq!(record.iter().count(), COLUMNS.len());
    }
}
