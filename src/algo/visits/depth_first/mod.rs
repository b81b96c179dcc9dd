/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations must call the callback at the [start of a
//! visit](EventPred::Init), [every time a new node is
//! discovered](EventPred::Previsit), [every time a node is
//! revisited](EventPred::Revisit), [every time the enumeration of the
//! successors of a node is completed](EventPred::Postvisit), and [at the end
//! of a visit](EventPred::Done).
//!
//! Since events contain the predecessor of the visited node, all events but
//! [`Init`](EventPred::Init) and [`Done`](EventPred::Done) can be interpreted
//! as arc events. The only exception are the previsit and postvisit events
//! of the root, for which the predecessor is the root itself.

mod seq;
pub use seq::*;

/// Types of callback events generated during a depth-first visit keeping
/// track of parent nodes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// Initialization: a new visit is starting from `root`.
    Init {
        /// The root of the current visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all fields are equal to the root.
    Previsit {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`EventPred::Previsit::curr`) in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the root to `curr`.
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The node from which `curr` has been reached.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth at which `curr` has been reached.
        depth: usize,
    },
    /// The enumeration of the successors of the node has been completed: we
    /// are retreating from a tree arc, unless all fields are equal to the
    /// root.
    Postvisit {
        /// The current node.
        curr: usize,
        /// The parent of `curr` in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of `curr`.
        depth: usize,
    },
    /// The visit from `root` has been completed.
    Done {
        /// The root of the completed visit tree.
        root: usize,
    },
}
