/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Module containing all algorithm implementations.

pub mod visits;

pub mod sccs;

pub mod top_sort;

pub mod dag_paths;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    pub use super::visits::Sequential;
}
