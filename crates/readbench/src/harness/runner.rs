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

//! Warmup and timed execution of an opaque operation.
//!
//! Execution is strictly sequential: the full measurement of one operation
//! completes before the next begins, so wall-clock samples are never
//! distorted by scheduler contention from concurrent measurements.

use crate::error::{BenchError, Result};
use crate::harness::stats::SampleStats;
use std::time::Instant;

/// Number of discarded warmup invocations before the timed loop.
pub const WARMUP_RUNS: usize = 3;

/// Measures an operation `iterations` times and reduces the wall-clock
/// samples to summary statistics.
///
/// The operation runs [`WARMUP_RUNS`] times first; those invocations are
/// discarded. Each subsequent call is timed individually with
/// sub-millisecond resolution and recorded in milliseconds.
///
/// An error from the operation, during warmup or the timed loop, propagates
/// immediately: the harness never retries or suppresses a failure. The
/// caller decides whether the surrounding test case is skipped.
///
/// # Arguments
///
/// * `op` - The operation to measure
/// * `iterations` - Number of timed invocations, must be at least 1
///
/// # Example
///
/// ```
/// use readbench::harness::run;
///
/// let stats = run(|| Ok::<_, readbench::BenchError>(2 + 2), 10).unwrap();
/// assert_eq!(stats.len(), 10);
/// ```
pub fn run<T, F>(mut op: F, iterations: usize) -> Result<SampleStats>
where
    F: FnMut() -> Result<T>,
{
    if iterations == 0 {
        return Err(BenchError::EmptySamples);
    }

    for _ in 0..WARMUP_RUNS {
        op()?;
    }

    let mut samples = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let start = Instant::now();
        op()?;
        samples.push(start.elapsed().as_secs_f64() * 1000.0);
    }

    Ok(SampleStats::from_samples(samples))
}
