/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Shortest and longest paths on directed acyclic graphs.
//!
//! Both computations relax the arcs of each node exactly once, taking nodes
//! in topological order, so they run in time linear in the size of the graph
//! and, unlike Dijkstra's algorithm, work with negative weights.

use crate::{
    graph::{Graph, Weight},
    utils::instrumentation::{Instrumentation, RELAXATIONS, RELAXATIONS_LONGEST},
};
use dsi_progress_logger::ProgressLog;
use std::fmt;
use std::ops::Index;
use thiserror::Error;

/// A path length, possibly infinite.
///
/// The derived order is the natural one: `−∞` is smaller than all finite
/// values, and `+∞` is larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    NegInfinity,
    Finite(Weight),
    PosInfinity,
}

impl Distance {
    /// Returns the value of a finite distance.
    pub fn finite(self) -> Option<Weight> {
        match self {
            Self::Finite(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegInfinity => f.write_str("-inf"),
            Self::Finite(d) => write!(f, "{}", d),
            Self::PosInfinity => f.write_str("inf"),
        }
    }
}

/// The distance of each node of a graph from a set of sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distances(Box<[Distance]>);

impl Distances {
    /// The number of nodes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Distance] {
        &self.0
    }

    /// Iterates over `(node, distance)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Distance)> + '_ {
        self.0.iter().copied().enumerate()
    }

    /// The largest finite distance, if any.
    pub fn max_finite(&self) -> Option<Weight> {
        self.0.iter().filter_map(|d| d.finite()).max()
    }
}

impl Index<usize> for Distances {
    type Output = Distance;

    fn index(&self, node: usize) -> &Distance {
        &self.0[node]
    }
}

impl From<Vec<Distance>> for Distances {
    fn from(distances: Vec<Distance>) -> Self {
        Self(distances.into_boxed_slice())
    }
}

/// Violations of the preconditions of the path computations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("The topological order has {order_len} nodes, but the graph has {num_nodes}")]
    OrderLengthMismatch { order_len: usize, num_nodes: usize },
    #[error("Source {node} is not a node of a graph with {num_nodes} nodes")]
    SourceOutOfRange { node: usize, num_nodes: usize },
}

fn check_order(dag: &Graph, top_order: &[usize]) -> Result<(), PathError> {
    if top_order.len() != dag.num_nodes() {
        return Err(PathError::OrderLengthMismatch {
            order_len: top_order.len(),
            num_nodes: dag.num_nodes(),
        });
    }
    Ok(())
}

/// Computes the length of the shortest path from `source` to every node of
/// a directed acyclic graph.
///
/// Nodes not reachable from `source` have distance
/// [`PosInfinity`](Distance::PosInfinity). The counter [`RELAXATIONS`] is
/// incremented each time a distance is improved. Sums saturate at the bounds
/// of [`Weight`].
///
/// The result is meaningful only if `top_order` is a topological order of
/// `dag`.
///
/// # Arguments
/// * `dag`: the graph.
/// * `top_order`: a topological order of `dag`.
/// * `source`: the source node.
/// * `tracker`: the instrumentation for this call; it is started and stopped
///   by this function.
/// * `pl`: a progress logger.
pub fn shortest_paths(
    dag: &Graph,
    top_order: &[usize],
    source: usize,
    tracker: &mut Instrumentation,
    pl: &mut impl ProgressLog,
) -> Result<Distances, PathError> {
    check_order(dag, top_order)?;
    let num_nodes = dag.num_nodes();
    if source >= num_nodes {
        return Err(PathError::SourceOutOfRange {
            node: source,
            num_nodes,
        });
    }

    tracker.start();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing shortest paths...");

    let mut dist = vec![Distance::PosInfinity; num_nodes];
    dist[source] = Distance::Finite(0);

    for &node in top_order {
        if let Distance::Finite(d) = dist[node] {
            for &(succ, weight) in dag.successors(node) {
                let candidate = Distance::Finite(d.saturating_add(weight));
                if candidate < dist[succ] {
                    dist[succ] = candidate;
                    tracker.increment_operation(RELAXATIONS);
                }
            }
        }
        pl.light_update();
    }

    pl.done();
    tracker.stop();
    Ok(dist.into())
}

/// The result of [`longest_paths`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestPaths {
    distances: Distances,
}

impl LongestPaths {
    /// The length of the longest path ending at each node and starting at a
    /// node with indegree zero.
    pub fn distances(&self) -> &Distances {
        &self.distances
    }

    /// The length of the critical path, that is, the largest finite
    /// distance, or zero if there is none.
    pub fn critical_path_length(&self) -> Weight {
        self.distances.max_finite().unwrap_or(0)
    }

    /// Consumes this instance, returning the distances.
    pub fn into_distances(self) -> Distances {
        self.distances
    }
}

/// Computes the length of the longest path ending at every node of a
/// directed acyclic graph and starting at a node with indegree zero.
///
/// All nodes with indegree zero have distance zero; all other nodes start at
/// [`NegInfinity`](Distance::NegInfinity) and keep it unless they are
/// reachable from a node with indegree zero. The counter
/// [`RELAXATIONS_LONGEST`] is incremented each time a distance is improved.
/// Sums saturate at the bounds of [`Weight`].
///
/// The result is meaningful only if `top_order` is a topological order of
/// `dag`.
///
/// # Arguments
/// * `dag`: the graph.
/// * `top_order`: a topological order of `dag`.
/// * `tracker`: the instrumentation for this call; it is started and stopped
///   by this function.
/// * `pl`: a progress logger.
pub fn longest_paths(
    dag: &Graph,
    top_order: &[usize],
    tracker: &mut Instrumentation,
    pl: &mut impl ProgressLog,
) -> Result<LongestPaths, PathError> {
    check_order(dag, top_order)?;
    let num_nodes = dag.num_nodes();

    tracker.start();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing longest paths...");

    let mut dist: Vec<Distance> = dag
        .in_degrees()
        .iter()
        .map(|&d| {
            if d == 0 {
                Distance::Finite(0)
            } else {
                Distance::NegInfinity
            }
        })
        .collect();

    for &node in top_order {
        if let Distance::Finite(d) = dist[node] {
            for &(succ, weight) in dag.successors(node) {
                let candidate = Distance::Finite(d.saturating_add(weight));
                if candidate > dist[succ] {
                    dist[succ] = candidate;
                    tracker.increment_operation(RELAXATIONS_LONGEST);
                }
            }
        }
        pl.light_update();
    }

    pl.done();
    tracker.stop();
    Ok(LongestPaths {
        distances: dist.into(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_distance_order() {
        assert!(Distance::NegInfinity < Distance::Finite(Weight::MIN));
        assert!(Distance::Finite(-3) < Distance::Finite(2));
        assert!(Distance::Finite(Weight::MAX) < Distance::PosInfinity);
        assert_eq!(Distance::PosInfinity.to_string(), "inf");
        assert_eq!(Distance::Finite(-4).to_string(), "-4");
    }

    #[test]
    fn test_unreachable() {
        let dag = Graph::from_edges(3, [(1, 2, 4)]).unwrap();
        let mut tracker = Instrumentation::new();
        let dist = shortest_paths(&dag, &[0, 1, 2], 0, &mut tracker, no_logging![]).unwrap();
        assert_eq!(
            dist.as_slice(),
            &[
                Distance::Finite(0),
                Distance::PosInfinity,
                Distance::PosInfinity
            ]
        );
        assert_eq!(tracker.operation(RELAXATIONS), 0);
    }

    #[test]
    fn test_saturation() {
        let dag = Graph::from_edges(3, [(0, 1, Weight::MAX), (1, 2, Weight::MAX)]).unwrap();
        let longest = longest_paths(&dag, &[0, 1, 2], &mut Instrumentation::new(), no_logging![])
            .unwrap();
        assert_eq!(longest.critical_path_length(), Weight::MAX);
    }

    #[test]
    fn test_preconditions() {
        let dag = Graph::from_edges(2, [(0, 1, 1)]).unwrap();
        assert_eq!(
            shortest_paths(&dag, &[0], 0, &mut Instrumentation::new(), no_logging![]),
            Err(PathError::OrderLengthMismatch {
                order_len: 1,
                num_nodes: 2
            })
        );
        assert_eq!(
            shortest_paths(&dag, &[0, 1], 2, &mut Instrumentation::new(), no_logging![]),
            Err(PathError::SourceOutOfRange {
                node: 2,
                num_nodes: 2
            })
        );
        assert!(longest_paths(&dag, &[], &mut Instrumentation::new(), no_logging![]).is_err());
    }

    #[test]
    fn test_critical_path_of_empty_graph() {
        let longest =
            longest_paths(&Graph::new(0), &[], &mut Instrumentation::new(), no_logging![])
                .unwrap();
        assert!(longest.distances().is_empty());
        assert_eq!(longest.critical_path_length(), 0);
    }
}
