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

//! Report rendering for comparison results.
//!
//! Renders the comparison engine's output as a Markdown document, one table
//! per category followed by a narrative summary. Rendering is a pure
//! function of its input; the console and filesystem side effects live
//! behind [`emit`] alone.

use crate::compare::{BatchComparison, Comparison, ComparisonRow, SIZE_BUCKET_THRESHOLD};
use crate::error::{BenchError, Result};
use std::fs;
use std::path::Path;

/// Formats a duration in milliseconds.
///
/// Values below one millisecond render in microseconds; both tiers use two
/// decimal digits.
pub fn format_ms(ms: f64) -> String {
    if ms < 1.0 {
        format!("{:.2} µs", ms * 1000.0)
    } else {
        format!("{:.2} ms", ms)
    }
}

/// Formats a byte count in three magnitude tiers.
///
/// Raw bytes below 1024, one decimal in KB up to 1024², two decimals in MB
/// above that.
pub fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Renders the full comparison document.
pub fn render(comparison: &Comparison) -> String {
    let mut doc = String::new();

    doc.push_str(&format!(
        "# Benchmark Comparison: {} vs {}\n\n",
        comparison.a_name, comparison.b_name
    ));

    if !comparison.single.is_empty() {
        doc.push_str("## Single Document Parsing\n\n");
        doc.push_str(&render_table(
            &comparison.single,
            &comparison.a_name,
            &comparison.b_name,
        ));
    }

    if !comparison.large.is_empty() {
        doc.push_str("## Large Document Parsing\n\n");
        doc.push_str(&render_table(
            &comparison.large,
            &comparison.a_name,
            &comparison.b_name,
        ));
    }

    if let Some(batch) = &comparison.batch {
        doc.push_str(&render_batch(batch, comparison));
    }

    doc.push_str(&render_summary(comparison));

    doc
}

fn render_table(rows: &[ComparisonRow], a_name: &str, b_name: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "| Test Case | Size | {} | {} | Speedup |\n",
        a_name, b_name
    ));
    out.push_str("|-----------|------|------|------|---------|\n");

    for row in rows {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            row.name,
            format_bytes(row.size),
            format_ms(row.a.mean),
            format_ms(row.b.mean),
            row.label
        ));
    }
    out.push('\n');

    out
}

fn render_batch(batch: &BatchComparison, comparison: &Comparison) -> String {
    let mut out = String::new();
    let documents = batch.a.document_count.unwrap_or_default();

    out.push_str(&format!("## Batch Processing ({} documents)\n\n", documents));
    out.push_str(&format!(
        "| Metric | {} | {} | Speedup |\n",
        comparison.a_name, comparison.b_name
    ));
    out.push_str("|--------|------|------|---------|\n");
    out.push_str(&format!(
        "| Combined total | {} | {} | {} |\n",
        format_ms(batch.a.mean),
        format_ms(batch.b.mean),
        batch.label
    ));
    out.push_str(&format!(
        "| Per-document average | {} | {} | {} |\n\n",
        format_ms(batch.per_doc_a),
        format_ms(batch.per_doc_b),
        batch.per_doc_label
    ));

    out
}

fn render_summary(comparison: &Comparison) -> String {
    let mut out = String::new();
    let summary = &comparison.summary;
    let threshold = format_bytes(SIZE_BUCKET_THRESHOLD);

    out.push_str("## Summary\n\n");

    match summary.small_avg {
        Some(avg) => out.push_str(&format!(
            "Documents under {}: average speedup {:.2}x across {} test cases.\n",
            threshold, avg, summary.small_count
        )),
        None => out.push_str(&format!(
            "Documents under {}: no data for this bucket.\n",
            threshold
        )),
    }

    match summary.large_avg {
        Some(avg) => out.push_str(&format!(
            "Documents {} and over: average speedup {:.2}x across {} test cases.\n",
            threshold, avg, summary.large_count
        )),
        None => out.push_str(&format!(
            "Documents {} and over: no data for this bucket.\n",
            threshold
        )),
    }

    out.push_str(&format!(
        "\nSpeedup is the ratio of {}'s mean time to {}'s mean time; values \
         above 1.0 mean {} is faster. Bucket averages are unweighted means of \
         per-case speedups, not pooled estimates.\n",
        comparison.b_name, comparison.a_name, comparison.a_name
    ));

    out
}

/// Prints the rendered document to the console and persists it to `path`.
///
/// This is the single side-effect boundary of the reporting pipeline, so
/// everything upstream stays testable as pure functions.
pub fn emit(document: &str, path: &Path) -> Result<()> {
    print!("{}", document);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BenchError::io_error(parent, e))?;
    }
    fs::write(path, document).map_err(|e| BenchError::io_error(path, e))?;

    Ok(())
}
