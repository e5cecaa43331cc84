// ReadBench - Readability Engine Benchmark Harness
//
// Copyright (c) 2025 ReadBench contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Benchmarks for the statistics and comparison hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use readbench::{Comparison, ResultSet, SampleStats};

fn synthetic_samples(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * 7919) % 1000) as f64 / 10.0).collect()
}

fn synthetic_results(cases: usize, mean: f64) -> ResultSet {
    let mut results = ResultSet::default();
    for i in 0..cases {
        let stats = SampleStats::from_samples(vec![mean, mean * 1.1, mean * 0.9]);
        let record = readbench::BenchmarkRecord::from_stats(&stats, 1024 * (i + 1), 3);
        results.single.insert(format!("case-{:03}", i), record);
    }
    results
}

fn bench_sample_stats(c: &mut Criterion) {
    let samples = synthetic_samples(1000);

    c.bench_function("sample_stats_1000", |b| {
        b.iter(|| SampleStats::from_samples(black_box(samples.clone())))
    });
}

fn bench_comparison_build(c: &mut Criterion) {
    let a = synthetic_results(200, 10.0);
    let b = synthetic_results(200, 15.0);

    c.bench_function("comparison_build_200_cases", |bench| {
        bench.iter(|| Comparison::build(black_box(&a), black_box(&b), "a", "b"))
    });
}

criterion_group!(benches, bench_sample_stats, bench_comparison_build);
criterion_main!(benches);
