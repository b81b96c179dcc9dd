/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};

/// The number of threads of a [`rayon::ThreadPool`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Threads {
    /// Let rayon decide (usually, the number of logical CPUs).
    #[default]
    Default,
    NumThreads(usize),
}

impl Threads {
    pub fn build(self) -> Result<rayon::ThreadPool> {
        match self {
            Self::Default => rayon::ThreadPoolBuilder::new()
                .build()
                .with_context(|| "Cannot build default threadpool"),
            Self::NumThreads(num_threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .with_context(|| format!("Cannot build threadpool with {} threads", num_threads)),
        }
    }
}

impl From<Option<usize>> for Threads {
    fn from(num_threads: Option<usize>) -> Self {
        match num_threads {
            Some(n) => Self::NumThreads(n),
            None => Self::Default,
        }
    }
}
