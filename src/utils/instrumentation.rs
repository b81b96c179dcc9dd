/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Counter incremented once per node discovered by a depth-first visit.
pub const DFS_VISITS: &str = "dfs_visits";
/// Counter incremented once per node enqueued by Kahn's algorithm.
pub const QUEUE_PUSHES: &str = "queue_pushes";
/// Counter incremented once per node dequeued by Kahn's algorithm.
pub const QUEUE_POPS: &str = "queue_pops";
/// Counter incremented once per improving shortest-path relaxation.
pub const RELAXATIONS: &str = "relaxations";
/// Counter incremented once per improving longest-path relaxation.
pub const RELAXATIONS_LONGEST: &str = "relaxations_longest";

/// Named operation counters and wall-clock time of a single algorithm call.
///
/// The lifecycle is [`start`](Self::start), any number of
/// [`increment_operation`](Self::increment_operation), and
/// [`stop`](Self::stop). Counters that were never incremented read as zero.
///
/// A fresh instance should be used for each call: [`start`](Self::start)
/// clears the counters of the previous run.
#[derive(Debug, Clone, Default)]
pub struct Instrumentation {
    start: Option<Instant>,
    stop: Option<Instant>,
    operations: BTreeMap<&'static str, u64>,
}

impl Instrumentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all counters and records the start time.
    pub fn start(&mut self) {
        self.operations.clear();
        self.stop = None;
        self.start = Some(Instant::now());
    }

    /// Records the stop time.
    pub fn stop(&mut self) {
        self.stop = Some(Instant::now());
    }

    /// Adds one to the counter `name`.
    #[inline(always)]
    pub fn increment_operation(&mut self, name: &'static str) {
        *self.operations.entry(name).or_insert(0) += 1;
    }

    /// The time between [`start`](Self::start) and [`stop`](Self::stop), or
    /// zero if the call has not been both started and stopped.
    pub fn elapsed(&self) -> Duration {
        match (self.start, self.stop) {
            (Some(start), Some(stop)) => stop.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    /// The value of the counter `name`.
    pub fn operation(&self, name: &str) -> u64 {
        self.operations.get(name).copied().unwrap_or(0)
    }

    /// All counters incremented during the last call.
    pub fn operations(&self) -> &BTreeMap<&'static str, u64> {
        &self.operations
    }
}
