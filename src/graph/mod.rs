/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Weighted directed graphs stored as adjacency lists.

use thiserror::Error;

/// The weight of an arc.
pub type Weight = i64;

/// Errors raised when building a graph from external input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("Arc #{index} ({from} -> {to}) references a node outside [0, {num_nodes})")]
    NodeOutOfRange {
        index: usize,
        from: usize,
        to: usize,
        num_nodes: usize,
    },
}

/// A weighted directed graph with nodes `0..num_nodes`.
///
/// The successors of each node are kept in insertion order, and parallel
/// arcs are retained. All algorithms of this crate visit successors in this
/// order, which makes their output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    successors: Vec<Vec<(usize, Weight)>>,
    num_arcs: usize,
}

impl Graph {
    /// Creates a graph with `num_nodes` nodes and no arcs.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            successors: vec![Vec::new(); num_nodes],
            num_arcs: 0,
        }
    }

    /// Creates a graph from a list of `(from, to, weight)` triples, checking
    /// that all nodes are in range.
    ///
    /// This is the constructor to use on input coming from outside the
    /// process.
    pub fn from_edges(
        num_nodes: usize,
        edges: impl IntoIterator<Item = (usize, usize, Weight)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(num_nodes);
        for (index, (from, to, weight)) in edges.into_iter().enumerate() {
            if from >= num_nodes || to >= num_nodes {
                return Err(GraphError::NodeOutOfRange {
                    index,
                    from,
                    to,
                    num_nodes,
                });
            }
            graph.add_edge(from, to, weight);
        }
        Ok(graph)
    }

    /// Adds the arc `from -> to` with the given weight.
    ///
    /// # Panics
    /// Panics if `from` or `to` are not nodes of the graph.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Weight) {
        let num_nodes = self.num_nodes();
        assert!(
            from < num_nodes && to < num_nodes,
            "Arc {} -> {} is out of range: graph has {} nodes",
            from,
            to,
            num_nodes
        );
        self.successors[from].push((to, weight));
        self.num_arcs += 1;
    }

    /// The number of nodes.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.successors.len()
    }

    /// The number of arcs, parallel arcs included.
    #[inline(always)]
    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    /// The successors of `node` with the associated weights, in insertion
    /// order.
    #[inline(always)]
    pub fn successors(&self, node: usize) -> &[(usize, Weight)] {
        &self.successors[node]
    }

    /// The number of successors of `node`.
    #[inline(always)]
    pub fn outdegree(&self, node: usize) -> usize {
        self.successors[node].len()
    }

    /// Iterates over all arcs as `(from, to, weight)` triples, by source
    /// node and then by insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(from, succ)| succ.iter().map(move |&(to, weight)| (from, to, weight)))
    }

    /// Returns the indegree of every node.
    pub fn in_degrees(&self) -> Box<[usize]> {
        let mut in_degree = vec![0; self.num_nodes()];
        for (_, to, _) in self.arcs() {
            in_degree[to] += 1;
        }
        in_degree.into_boxed_slice()
    }

    /// Returns a new graph with all arcs reversed and the same weights.
    ///
    /// Arcs are added in the order returned by [`arcs`](Self::arcs).
    pub fn transpose(&self) -> Self {
        let mut transpose = Self::new(self.num_nodes());
        for (from, to, weight) in self.arcs() {
            transpose.add_edge(to, from, weight);
        }
        transpose
    }
}
