/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::graph::Graph;
use dsi_progress_logger::ProgressLog;
use rustc_hash::FxHashSet;

/// The condensation of a graph: the DAG obtained by collapsing each strongly
/// connected component to a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condensation {
    graph: Graph,
    component: Box<[usize]>,
}

impl Condensation {
    /// Builds the condensation of `graph` with respect to `sccs`.
    ///
    /// Node `c` of the condensation is the component with index `c`. For
    /// each arc `u -> v` of `graph`, in the order returned by
    /// [`Graph::arcs`], an arc between the components of `u` and `v` is
    /// added unless the two components are the same or an arc between
    /// them (in the same direction) has already been added: the weight of
    /// the first arc seen wins.
    ///
    /// # Arguments
    /// * `graph`: the graph.
    /// * `sccs`: the strongly connected components of `graph`.
    /// * `pl`: a progress logger.
    pub fn new(graph: &Graph, sccs: &Sccs, pl: &mut impl ProgressLog) -> Self {
        let component: Box<[usize]> = sccs.component().into();
        assert_eq!(
            component.len(),
            graph.num_nodes(),
            "The components do not match the graph"
        );

        pl.item_name("node");
        pl.expected_updates(Some(graph.num_nodes()));
        pl.start("Computing the condensation graph...");

        let mut condensation = Graph::new(sccs.num_components());
        let mut added = FxHashSet::default();

        for node in 0..graph.num_nodes() {
            let node_component = component[node];
            for &(succ, weight) in graph.successors(node) {
                let succ_component = component[succ];
                if node_component != succ_component
                    && added.insert((node_component, succ_component))
                {
                    condensation.add_edge(node_component, succ_component, weight);
                }
            }
            pl.light_update();
        }

        pl.done();

        Self {
            graph: condensation,
            component,
        }
    }

    /// The condensation DAG.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The condensation node (i.e., component) of each node of the original
    /// graph.
    pub fn component(&self) -> &[usize] {
        &self.component
    }

    /// Consumes this instance, returning the condensation DAG.
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::sccs::kosaraju;
    use crate::utils::instrumentation::Instrumentation;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_first_weight_wins() {
        // Components {0, 1} and {2}; three arcs from the first to the second
        let graph = Graph::from_edges(
            3,
            [(0, 1, 1), (1, 0, 1), (0, 2, 7), (1, 2, 3), (0, 2, 9)],
        )
        .unwrap();
        let sccs = kosaraju(&graph, &mut Instrumentation::new(), no_logging![]);
        let condensation = Condensation::new(&graph, &sccs, no_logging![]);

        assert_eq!(condensation.graph().num_nodes(), 2);
        assert_eq!(condensation.graph().num_arcs(), 1);
        let from = condensation.component()[0];
        let to = condensation.component()[2];
        assert_eq!(condensation.graph().successors(from), &[(to, 7)]);
    }

    #[test]
    fn test_opposite_directions_are_distinct() {
        let sccs = Sccs::new(2, vec![vec![0], vec![1]]);
        // Not a real decomposition, but the builder must keep both directions
        let graph = Graph::from_edges(2, [(0, 1, 1), (1, 0, 2), (0, 1, 3)]).unwrap();
        let condensation = Condensation::new(&graph, &sccs, no_logging![]);
        assert_eq!(condensation.graph().successors(0), &[(1, 1)]);
        assert_eq!(condensation.graph().successors(1), &[(0, 2)]);
    }

    #[test]
    fn test_self_loops_are_dropped() {
        let graph = Graph::from_edges(2, [(0, 0, 5), (1, 1, 5), (0, 1, 2)]).unwrap();
        let sccs = kosaraju(&graph, &mut Instrumentation::new(), no_logging![]);
        let condensation = Condensation::new(&graph, &sccs, no_logging![]);
        assert_eq!(condensation.graph().num_arcs(), 1);
        assert_eq!(condensation.into_graph().arcs().next(), Some((0, 1, 2)));
    }
}
