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

//! Comparison engine for two independently produced result sets.
//!
//! Reconciles the result sets of two engines into per-test-case comparison
//! rows and size-bucketed summary averages. Rows exist only for test cases
//! present on both sides; one-sided cases are dropped silently. All output
//! is ephemeral: nothing here is cached or persisted.

use crate::store::{BenchmarkRecord, Category, ResultSet, DEFAULT_BATCH_DOCUMENTS};

/// Byte-size threshold separating the two summary buckets (150 KiB).
pub const SIZE_BUCKET_THRESHOLD: usize = 150 * 1024;

/// Comparison of one test case across both engines.
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    /// Test-case identifier.
    pub name: String,
    /// Input size in bytes.
    pub size: usize,
    /// Record from the first engine.
    pub a: BenchmarkRecord,
    /// Record from the second engine.
    pub b: BenchmarkRecord,
    /// Ratio of the second engine's mean to the first engine's mean.
    /// Values above 1.0 mean the first engine is faster.
    pub speedup: f64,
    /// Human-readable direction label.
    pub label: String,
}

/// Comparison of the batch aggregates of both engines.
#[derive(Debug, Clone)]
pub struct BatchComparison {
    /// Batch record from the first engine.
    pub a: BenchmarkRecord,
    /// Batch record from the second engine.
    pub b: BenchmarkRecord,
    /// Speedup of the combined totals.
    pub speedup: f64,
    /// Direction label for the combined totals.
    pub label: String,
    /// Mean time per document for the first engine, in milliseconds.
    pub per_doc_a: f64,
    /// Mean time per document for the second engine, in milliseconds.
    pub per_doc_b: f64,
    /// Speedup of the per-document averages.
    pub per_doc_speedup: f64,
    /// Direction label for the per-document averages.
    pub per_doc_label: String,
}

/// Size-bucketed summary over all matched single and large rows.
///
/// A bucket with no matched rows has no valid average; that case is an
/// explicit `None`, reported as "no data" rather than a number.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Unweighted mean speedup for documents below the size threshold.
    pub small_avg: Option<f64>,
    /// Unweighted mean speedup for documents at or above the threshold.
    pub large_avg: Option<f64>,
    /// Number of rows in the small bucket.
    pub small_count: usize,
    /// Number of rows in the large bucket.
    pub large_count: usize,
}

/// Renders the direction label for a speedup ratio.
///
/// Ratios are always framed as a value of at least 1: a speedup below 1.0
/// is rendered as "slower" with the reciprocal, never as a fraction.
pub fn speedup_label(speedup: f64, a_name: &str, b_name: &str) -> String {
    if speedup >= 1.0 {
        format!("{} is {:.1}x faster than {}", a_name, speedup, b_name)
    } else {
        format!("{} is {:.1}x slower than {}", a_name, 1.0 / speedup, b_name)
    }
}

/// Compares one keyed category of two result sets.
///
/// Emits one row per test-case identifier present in **both** sets, with
/// `speedup = b.mean / a.mean`. Identifiers present on only one side are
/// dropped. Rows are ordered lexicographically by identifier, independent
/// of magnitude or insertion order.
pub fn compare(
    a: &ResultSet,
    b: &ResultSet,
    category: Category,
    a_name: &str,
    b_name: &str,
) -> Vec<ComparisonRow> {
    a.section(category)
        .iter()
        .filter_map(|(name, ra)| {
            b.section(category).get(name).map(|rb| {
                let speedup = rb.mean / ra.mean;
                ComparisonRow {
                    name: name.clone(),
                    size: ra.size,
                    a: ra.clone(),
                    b: rb.clone(),
                    speedup,
                    label: speedup_label(speedup, a_name, b_name),
                }
            })
        })
        .collect()
}

/// Compares the batch aggregates of two result sets.
///
/// Returns `None` unless both sides carry a batch record; an absent side
/// means the batch section is simply omitted from the report. The combined
/// totals are compared directly, and the per-document averages are compared
/// as `mean / document_count` for each side.
pub fn compare_batch(
    a: &ResultSet,
    b: &ResultSet,
    a_name: &str,
    b_name: &str,
) -> Option<BatchComparison> {
    let ra = a.batch.as_ref()?;
    let rb = b.batch.as_ref()?;

    let speedup = rb.mean / ra.mean;
    let per_doc_a = ra.mean / ra.document_count.unwrap_or(DEFAULT_BATCH_DOCUMENTS) as f64;
    let per_doc_b = rb.mean / rb.document_count.unwrap_or(DEFAULT_BATCH_DOCUMENTS) as f64;
    let per_doc_speedup = per_doc_b / per_doc_a;

    Some(BatchComparison {
        a: ra.clone(),
        b: rb.clone(),
        speedup,
        label: speedup_label(speedup, a_name, b_name),
        per_doc_a,
        per_doc_b,
        per_doc_speedup,
        per_doc_label: speedup_label(per_doc_speedup, a_name, b_name),
    })
}

/// Summarizes matched rows into two size buckets.
///
/// The bucket average is the unweighted arithmetic mean of the `speedup`
/// field: a mean of ratios, not a pooled estimate. The batch aggregate is
/// excluded; callers pass the single and large rows only.
pub fn summarize(rows: &[ComparisonRow]) -> Summary {
    let (small, large): (Vec<_>, Vec<_>) = rows.iter().partition(|r| r.size < SIZE_BUCKET_THRESHOLD);

    Summary {
        small_avg: bucket_average(&small),
        large_avg: bucket_average(&large),
        small_count: small.len(),
        large_count: large.len(),
    }
}

fn bucket_average(rows: &[&ComparisonRow]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    Some(rows.iter().map(|r| r.speedup).sum::<f64>() / rows.len() as f64)
}

/// Full comparison output for one invocation, consumed by the report.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Name of the first engine.
    pub a_name: String,
    /// Name of the second engine.
    pub b_name: String,
    /// Matched rows for individually timed documents.
    pub single: Vec<ComparisonRow>,
    /// Matched rows for large documents.
    pub large: Vec<ComparisonRow>,
    /// Batch comparison, when both sides have batch data.
    pub batch: Option<BatchComparison>,
    /// Size-bucketed summary over the single and large rows.
    pub summary: Summary,
}

impl Comparison {
    /// Builds the full comparison of two result sets.
    pub fn build(a: &ResultSet, b: &ResultSet, a_name: &str, b_name: &str) -> Self {
        let single = compare(a, b, Category::Single, a_name, b_name);
        let large = compare(a, b, Category::Large, a_name, b_name);
        let batch = compare_batch(a, b, a_name, b_name);

        let mut matched: Vec<ComparisonRow> = single.clone();
        matched.extend(large.iter().cloned());
        let summary = summarize(&matched);

        Self {
            a_name: a_name.to_string(),
            b_name: b_name.to_string(),
            single,
            large,
            batch,
            summary,
        }
    }
}
