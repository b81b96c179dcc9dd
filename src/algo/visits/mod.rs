/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on weighted graphs.
//!
//! Visits are driven by a callback that receives an event for each step of
//! the visit and returns a [`ControlFlow`]: returning
//! [`Break`](ControlFlow::Break) stops the visit immediately, and the value
//! is passed back to the caller. Visits that cannot be interrupted use
//! [`Unbreakable`](no_break::Unbreakable) as break type, and the result can
//! be unwrapped with [`NoBreak`](no_break::NoBreak).

pub mod depth_first;

use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow;

/// A sequential visit.
///
/// Implementations must provide the [`visit`](Sequential::visit) method,
/// which performs a visit of the graph starting from a given node, and the
/// [`visit_all`](Sequential::visit_all) method, which visits the whole graph
/// by starting a visit from each node in increasing order. Nodes discovered
/// by a visit are not rediscovered by subsequent visits until
/// [`reset`](Sequential::reset) is called.
pub trait Sequential<A> {
    /// Visits the graph from the specified node.
    ///
    /// # Arguments
    /// * `root`: the node to start the visit from.
    /// * `callback`: the callback function.
    /// * `pl`: a progress logger.
    fn visit<B, C: FnMut(A) -> ControlFlow<B, ()>>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()>;

    /// Visits the whole graph.
    ///
    /// See [`visit`](Sequential::visit) for more details.
    fn visit_all<B, C: FnMut(A) -> ControlFlow<B, ()>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()>;

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
