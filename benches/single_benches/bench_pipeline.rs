/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::params::*;
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::no_logging;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scc_dag_algo::algo::dag_paths::{longest_paths, shortest_paths};
use scc_dag_algo::prelude::*;

fn random_graph(num_nodes: usize, rng: &mut StdRng) -> Graph {
    let mut graph = Graph::new(num_nodes);
    for _ in 0..num_nodes * AVG_DEGREE {
        graph.add_edge(
            rng.random_range(0..num_nodes),
            rng.random_range(0..num_nodes),
            rng.random_range(-100..100),
        );
    }
    graph
}

pub fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stages");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);
    let mut rng = StdRng::seed_from_u64(SEED);

    for num_nodes in NUM_NODES {
        let graph = random_graph(num_nodes, &mut rng);
        let sccs = sccs::kosaraju(&graph, &mut Instrumentation::new(), no_logging![]);
        let dag = sccs::Condensation::new(&graph, &sccs, no_logging![]).into_graph();
        let Ok(order) = top_sort(&dag, &mut Instrumentation::new(), no_logging![]) else {
            panic!("The condensation of a graph must be acyclic");
        };
        group.throughput(Throughput::Elements(graph.num_arcs() as u64));

        group.bench_with_input(BenchmarkId::new("kosaraju", num_nodes), &graph, |b, g| {
            b.iter(|| black_box(sccs::kosaraju(g, &mut Instrumentation::new(), no_logging![])))
        });
        group.bench_with_input(BenchmarkId::new("condensation", num_nodes), &graph, |b, g| {
            b.iter(|| black_box(sccs::Condensation::new(g, &sccs, no_logging![])))
        });
        group.bench_with_input(BenchmarkId::new("top_sort", num_nodes), &dag, |b, d| {
            b.iter(|| black_box(top_sort(d, &mut Instrumentation::new(), no_logging![])))
        });
        group.bench_with_input(BenchmarkId::new("shortest_paths", num_nodes), &dag, |b, d| {
            b.iter(|| {
                black_box(shortest_paths(
                    d,
                    &order,
                    order[0],
                    &mut Instrumentation::new(),
                    no_logging![],
                ))
            })
        });
        group.bench_with_input(BenchmarkId::new("longest_paths", num_nodes), &dag, |b, d| {
            b.iter(|| black_box(longest_paths(d, &order, &mut Instrumentation::new(), no_logging![])))
        });
    }

    group.finish();
}

pub fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pipeline");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);
    let mut rng = StdRng::seed_from_u64(SEED);

    for num_nodes in NUM_NODES {
        let graph = random_graph(num_nodes, &mut rng);
        group.throughput(Throughput::Elements(graph.num_arcs() as u64));
        group.bench_with_input(BenchmarkId::new("analyze", num_nodes), &graph, |b, g| {
            b.iter(|| black_box(analyze(g, &PipelineConfig::default(), no_logging![])))
        });
    }

    group.finish();
}
