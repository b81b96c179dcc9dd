/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first::EventPred, Sequential};
use crate::graph::{Graph, Weight};
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// A sequential depth-first visit which keeps track of predecessors.
///
/// This is an iterative implementation that does not need a large stack
/// size: the visit path is stored on the heap as a stack of iterators on
/// the successors of each node, paired with the parent of the node. Nodes are
/// discovered and completed in exactly the same order as the textbook
/// recursive visit that enumerates successors in adjacency-list order.
///
/// The visit uses one bit per node to remember known nodes.
///
/// The progress logger will be [invoked](ProgressLog::light_update) after
/// completion of each postvisit.
///
/// # Examples
///
/// Let us compute the finishing order of a visit:
///
/// ```
/// use std::ops::ControlFlow::{self, Continue};
/// use dsi_progress_logger::no_logging;
/// use no_break::{NoBreak, Unbreakable};
/// use scc_dag_algo::algo::visits::{depth_first::*, Sequential};
/// use scc_dag_algo::graph::Graph;
///
/// let graph = Graph::from_edges(4, [(0, 1, 1), (1, 2, 1), (1, 3, 1), (0, 3, 1)]).unwrap();
/// let mut visit = SeqPred::new(&graph);
/// let mut finishing = Vec::new();
///
/// visit
///     .visit_all(
///         |event| -> ControlFlow<Unbreakable> {
///             if let EventPred::Postvisit { curr, .. } = event {
///                 finishing.push(curr);
///             }
///             Continue(())
///         },
///         no_logging![],
///     )
///     .continue_value_no_break();
///
/// assert_eq!(finishing, vec![2, 3, 1, 0]);
/// ```
pub struct SeqPred<'a> {
    graph: &'a Graph,
    /// Entries on this stack represent the iterator on the successors of a
    /// node and the parent of the node. This approach makes it possible to
    /// avoid storing both the current and the parent node in the stack.
    stack: Vec<(std::slice::Iter<'a, (usize, Weight)>, usize)>,
    known: BitVec,
}

impl<'a> SeqPred<'a> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            stack: Vec::with_capacity(16),
            known: BitVec::new(graph.num_nodes()),
        }
    }

    /// Returns whether `node` has been discovered by some visit since the
    /// last reset.
    pub fn known(&self, node: usize) -> bool {
        self.known[node]
    }
}

impl<'a> Sequential<EventPred> for SeqPred<'a> {
    fn visit<B, C: FnMut(EventPred) -> ControlFlow<B, ()>>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()> {
        let graph = self.graph;

        if self.known[root] {
            // Already discovered by a previous visit
            return Continue(());
        }

        callback(EventPred::Init { root })?;

        self.known.set(root, true);

        callback(EventPred::Previsit {
            curr: root,
            pred: root,
            root,
            depth: 0,
        })?;

        self.stack.push((graph.successors(root).iter(), root));

        // This variable keeps track of the current node being visited; the
        // parent node is derived at each iteration of the 'recurse loop.
        let mut current_node = root;

        'recurse: loop {
            let depth = self.stack.len();
            let Some((iter, parent)) = self.stack.last_mut() else {
                callback(EventPred::Done { root })?;
                return Continue(());
            };

            for &(succ, _) in iter {
                if self.known[succ] {
                    callback(EventPred::Revisit {
                        curr: succ,
                        pred: current_node,
                        root,
                        depth,
                    })?;
                } else {
                    self.known.set(succ, true);

                    callback(EventPred::Previsit {
                        curr: succ,
                        pred: current_node,
                        root,
                        depth,
                    })?;
                    // current_node is the parent of succ
                    self.stack
                        .push((graph.successors(succ).iter(), current_node));

                    // At the next iteration, succ will be the current node
                    current_node = succ;

                    continue 'recurse;
                }
            }

            callback(EventPred::Postvisit {
                curr: current_node,
                pred: *parent,
                root,
                depth: depth - 1,
            })?;

            pl.light_update();

            // We're going up one stack level, so the next current_node
            // is the current parent.
            current_node = *parent;
            self.stack.pop();
        }
    }

    fn visit_all<B, C: FnMut(EventPred) -> ControlFlow<B, ()>>(
        &mut self,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()> {
        for node in 0..self.graph.num_nodes() {
            self.visit(node, &mut callback, pl)?;
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.known = BitVec::new(self.graph.num_nodes());
    }
}
