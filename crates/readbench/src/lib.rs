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

//! ReadBench Benchmark Framework
//!
//! Measures and compares the performance of two interchangeable
//! readability-engine implementations, producing reproducible timing
//! statistics and a human-readable comparison report.
//!
//! ## Pipeline
//!
//! - **Timing harness** ([`harness`]): warmup plus timed execution of an
//!   opaque parse operation, reduced to summary statistics
//! - **Results store** ([`store`]): atomic JSON snapshots of a full run,
//!   tolerant of producer schema drift on load
//! - **Comparison engine** ([`compare`]): per-test-case speedup rows and
//!   size-bucketed summary averages over two result sets
//! - **Report generator** ([`report`]): Markdown rendering plus the single
//!   console/filesystem side-effect boundary
//!
//! Each engine runs its suite independently ([`suite`]) and persists one
//! [`ResultSet`]; the comparison step reads both.

pub mod compare;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod report;
pub mod store;
pub mod suite;

// Re-export key types for convenience
pub use compare::{
    compare, compare_batch, speedup_label, summarize, BatchComparison, Comparison, ComparisonRow,
    Summary, SIZE_BUCKET_THRESHOLD,
};
pub use error::{BenchError, Result};
pub use harness::{run, SampleStats, WARMUP_RUNS};
pub use report::{emit, format_bytes, format_ms, render};
pub use store::{
    load, save, BenchmarkRecord, Category, ResultSet, DEFAULT_BATCH_DOCUMENTS,
};
pub use suite::{run_suite, Engine, SuiteConfig};
