/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod single_benches;

use criterion::{criterion_group, criterion_main};
use single_benches::bench_pipeline::{bench_pipeline, bench_stages};

criterion_group!(benches, bench_stages, bench_pipeline);
criterion_main!(benches);
