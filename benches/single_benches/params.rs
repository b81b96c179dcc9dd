/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// The number of nodes of the random graphs.
pub const NUM_NODES: [usize; 3] = [1_000, 10_000, 100_000];
/// The average outdegree of the random graphs.
pub const AVG_DEGREE: usize = 4;
pub const NUM_SAMPLES: usize = 10;
pub const SEED: u64 = 0;
