/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{
    graph::Graph,
    utils::instrumentation::{Instrumentation, QUEUE_POPS, QUEUE_PUSHES},
};
use dsi_progress_logger::ProgressLog;
use std::collections::VecDeque;
use thiserror::Error;

/// The graph passed to [`top_sort`] is not acyclic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The graph contains a cycle: only {emitted} of {num_nodes} nodes could be sorted")]
pub struct CycleError {
    /// The number of nodes emitted before the queue ran dry.
    pub emitted: usize,
    /// The number of nodes of the graph.
    pub num_nodes: usize,
}

/// Returns a topological sort of `graph` computed with Kahn's algorithm.
///
/// Nodes with indegree zero are enqueued in increasing order; then, nodes
/// are dequeued in FIFO order, and each successor whose indegree drops to
/// zero is enqueued. The counters [`QUEUE_PUSHES`] and [`QUEUE_POPS`] are
/// incremented at each enqueue and dequeue.
///
/// If the graph contains a cycle, the nodes on the cycle (and all the nodes
/// reachable from it) never reach indegree zero, and a [`CycleError`] is
/// returned instead: callers should skip any computation depending on the
/// order.
///
/// # Arguments
/// * `graph`: the graph.
/// * `tracker`: the instrumentation for this call; it is started and stopped
///   by this function.
/// * `pl`: a progress logger.
pub fn top_sort(
    graph: &Graph,
    tracker: &mut Instrumentation,
    pl: &mut impl ProgressLog,
) -> Result<Box<[usize]>, CycleError> {
    tracker.start();
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing topological sort...");

    let mut in_degree = graph.in_degrees();
    let mut queue = VecDeque::new();

    for node in 0..num_nodes {
        if in_degree[node] == 0 {
            queue.push_back(node);
            tracker.increment_operation(QUEUE_PUSHES);
        }
    }

    let mut top_sort = Vec::with_capacity(num_nodes);

    while let Some(node) = queue.pop_front() {
        tracker.increment_operation(QUEUE_POPS);
        top_sort.push(node);

        for &(succ, _) in graph.successors(node) {
            in_degree[succ] -= 1;
            if in_degree[succ] == 0 {
                queue.push_back(succ);
                tracker.increment_operation(QUEUE_PUSHES);
            }
        }
        pl.light_update();
    }

    pl.done();
    tracker.stop();

    if top_sort.len() != num_nodes {
        log::warn!(
            "Graph contains a cycle: topological sort stopped after {} of {} nodes",
            top_sort.len(),
            num_nodes
        );
        return Err(CycleError {
            emitted: top_sort.len(),
            num_nodes,
        });
    }

    Ok(top_sort.into_boxed_slice())
}
