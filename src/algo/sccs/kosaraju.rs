/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::{
    algo::visits::{depth_first::*, Sequential},
    graph::Graph,
    utils::instrumentation::{Instrumentation, DFS_VISITS},
};
use dsi_progress_logger::ProgressLog;
use no_break::{NoBreak, Unbreakable};
use std::ops::ControlFlow::{self, Continue};

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm.
///
/// A first depth-first visit of `graph` computes the finishing order of the
/// nodes; then, nodes are taken in reverse finishing order and each one
/// that has not been reached yet starts a visit of the transpose, which
/// discovers exactly one component. Components are thus emitted in
/// topological order of the condensation (sources first).
///
/// The counter [`DFS_VISITS`] is incremented once per node discovered, in
/// both visits.
///
/// # Arguments
/// * `graph`: the graph.
/// * `tracker`: the instrumentation for this call; it is started and stopped
///   by this function.
/// * `pl`: a progress logger.
pub fn kosaraju(
    graph: &Graph,
    tracker: &mut Instrumentation,
    pl: &mut impl ProgressLog,
) -> Sccs {
    tracker.start();
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(2 * num_nodes));
    pl.start("Computing strongly connected components...");

    let mut finishing = Vec::with_capacity(num_nodes);
    let mut visit = SeqPred::new(graph);

    visit
        .visit_all(
            |event| -> ControlFlow<Unbreakable> {
                match event {
                    EventPred::Previsit { .. } => tracker.increment_operation(DFS_VISITS),
                    EventPred::Postvisit { curr, .. } => finishing.push(curr),
                    _ => (),
                }
                Continue(())
            },
            pl,
        )
        .continue_value_no_break();

    let transpose = graph.transpose();
    let mut visit = SeqPred::new(&transpose);
    let mut members = Vec::new();
    let mut current = Vec::new();

    for &node in finishing.iter().rev() {
        visit
            .visit(
                node,
                |event| -> ControlFlow<Unbreakable> {
                    match event {
                        EventPred::Previsit { curr, .. } => {
                            tracker.increment_operation(DFS_VISITS);
                            current.push(curr);
                        }
                        EventPred::Done { .. } => {
                            members.push(std::mem::take(&mut current));
                        }
                        _ => (),
                    }
                    Continue(())
                },
                pl,
            )
            .continue_value_no_break();
    }

    pl.done();
    tracker.stop();

    Sccs::new(num_nodes, members)
}
