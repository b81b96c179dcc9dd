/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms used to compute and work with strongly connected components.

mod kosaraju;
pub use kosaraju::*;

mod condensation;
pub use condensation::*;

/// The strongly connected components of a graph.
///
/// Components are numbered from zero in the order in which they have been
/// emitted by the algorithm that computed them. Each component stores its
/// members in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    component: Box<[usize]>,
    members: Vec<Vec<usize>>,
}

impl Sccs {
    /// Creates a new instance from the list of members of each component.
    ///
    /// # Panics
    /// Panics if `members` is not a partition of `0..num_nodes`.
    pub fn new(num_nodes: usize, members: Vec<Vec<usize>>) -> Self {
        let mut component = vec![usize::MAX; num_nodes].into_boxed_slice();
        for (index, scc) in members.iter().enumerate() {
            for &node in scc {
                assert!(
                    component[node] == usize::MAX,
                    "Node {} belongs to components {} and {}",
                    node,
                    component[node],
                    index
                );
                component[node] = index;
            }
        }
        if let Some(node) = component.iter().position(|&c| c == usize::MAX) {
            panic!("Node {} does not belong to any component", node);
        }
        Self { component, members }
    }

    /// The number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.members.len()
    }

    /// The component index of each node.
    pub fn component(&self) -> &[usize] {
        &self.component
    }

    /// The members of each component, in discovery order.
    pub fn components(&self) -> &[Vec<usize>] {
        &self.members
    }

    /// The members of the component with index `index`.
    pub fn members(&self, index: usize) -> &[usize] {
        &self.members[index]
    }

    /// Returns the size array for this set of strongly connected components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        self.members.iter().map(Vec::len).collect()
    }

    /// Consumes this instance, returning the members of each component.
    pub fn into_components(self) -> Vec<Vec<usize>> {
        self.members
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_compute_sizes() {
        let sccs = Sccs::new(6, vec![vec![4, 0], vec![1, 2, 3], vec![5]]);
        assert_eq!(sccs.num_components(), 3);
        assert_eq!(sccs.compute_sizes().as_ref(), &[2, 3, 1]);
        assert_eq!(sccs.component(), &[0, 1, 1, 1, 0, 2]);
        assert_eq!(sccs.members(1), &[1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn test_not_a_partition() {
        Sccs::new(3, vec![vec![0, 1], vec![1, 2]]);
    }

    #[test]
    #[should_panic]
    fn test_missing_node() {
        Sccs::new(3, vec![vec![0, 1]]);
    }
}
