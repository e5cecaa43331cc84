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

//! Full benchmark suite execution for one engine.
//!
//! Runs every configured test case through the timing harness, strictly
//! sequentially, and accumulates a [`ResultSet`]. Missing pages and engine
//! failures skip the affected test case and continue with the remainder of
//! the suite; the skip is reported on the console.

use crate::error::Result;
use crate::fixtures::load_test_case;
use crate::harness;
use crate::report::{format_bytes, format_ms};
use crate::store::{BenchmarkRecord, ResultSet};
use std::path::PathBuf;

/// The opaque parse operation under test.
///
/// The engine's internal algorithm is out of scope here: it receives the
/// document content and an optional base URL, and either returns extracted
/// content or `None` when the document has no extractable article.
pub trait Engine {
    /// Engine label used in progress output and reports.
    fn name(&self) -> &str;

    /// Parses one document.
    fn parse(&self, html: &str, base_url: Option<&str>) -> Result<Option<String>>;
}

/// Configuration for one full suite run.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Directory holding `{case}/source.html` test pages.
    pub pages_dir: PathBuf,
    /// Small individually timed cases.
    pub small_cases: Vec<String>,
    /// Medium individually timed cases.
    pub medium_cases: Vec<String>,
    /// Large individually timed cases.
    pub large_cases: Vec<String>,
    /// Cases processed sequentially as one batch aggregate.
    pub batch_cases: Vec<String>,
    /// Timed iterations for small and medium cases.
    pub single_iterations: usize,
    /// Timed iterations for large cases.
    pub large_iterations: usize,
    /// Timed iterations for the batch aggregate.
    pub batch_iterations: usize,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        let owned = |cases: &[&str]| cases.iter().map(|s| s.to_string()).collect();

        Self {
            pages_dir: PathBuf::from("tests/test-pages"),
            small_cases: owned(&["001", "002", "aclu"]),
            medium_cases: owned(&["medium-1", "nytimes-1", "ars-1"]),
            large_cases: owned(&["guardian-1", "yahoo-2"]),
            batch_cases: owned(&[
                "001",
                "002",
                "aclu",
                "ars-1",
                "bbc-1",
                "buzzfeed-1",
                "cnet",
                "cnn",
                "ehow-1",
                "herald-sun-1",
            ]),
            single_iterations: 100,
            large_iterations: 20,
            batch_iterations: 50,
        }
    }
}

/// Runs the full suite for one engine and returns the accumulated results.
///
/// Test cases are measured one at a time; the full measurement of a case
/// (warmup plus timed loop) completes before the next begins. A missing
/// page or a failing engine skips that case with a console notice and the
/// suite continues.
pub fn run_suite(engine: &dyn Engine, config: &SuiteConfig) -> ResultSet {
    let mut results = ResultSet::default();

    println!("{}", "=".repeat(70));
    println!("Benchmark suite: {}", engine.name());
    println!("{}", "=".repeat(70));
    println!();

    println!("Single Document Parsing");
    println!("{}", "-".repeat(70));

    let categories = [
        ("small", &config.small_cases, config.single_iterations, false),
        ("medium", &config.medium_cases, config.single_iterations, false),
        ("large", &config.large_cases, config.large_iterations, true),
    ];

    for (category, cases, iterations, is_large) in categories {
        for case in cases {
            let html = match load_test_case(&config.pages_dir, case) {
                Some(html) => html,
                None => {
                    println!("Skipping {}: file not found", case);
                    continue;
                }
            };

            let stats = match harness::run(|| engine.parse(&html, None), iterations) {
                Ok(stats) => stats,
                Err(e) => {
                    println!("Skipping {}: {}", case, e);
                    continue;
                }
            };

            let record = BenchmarkRecord::from_stats(&stats, html.len(), iterations)
                .with_category(category);

            println!(
                "{:20} ({:>10}) | mean: {:>12} | median: {:>12} | p95: {:>12}",
                case,
                format_bytes(html.len()),
                format_ms(record.mean),
                format_ms(record.median),
                format_ms(record.p95)
            );

            if is_large {
                results.large.insert(case.clone(), record);
            } else {
                results.single.insert(case.clone(), record);
            }
        }
    }

    println!();

    if let Some(batch) = run_batch(engine, config) {
        results.batch = Some(batch);
    }

    println!("{}", "=".repeat(70));

    results
}

fn run_batch(engine: &dyn Engine, config: &SuiteConfig) -> Option<BenchmarkRecord> {
    let docs: Vec<String> = config
        .batch_cases
        .iter()
        .filter_map(|case| load_test_case(&config.pages_dir, case))
        .collect();

    if docs.is_empty() {
        return None;
    }

    println!("Batch Processing ({} documents)", docs.len());
    println!("{}", "-".repeat(70));

    let total_size: usize = docs.iter().map(|html| html.len()).sum();

    let stats = match harness::run(
        || {
            for html in &docs {
                engine.parse(html, None)?;
            }
            Ok(())
        },
        config.batch_iterations,
    ) {
        Ok(stats) => stats,
        Err(e) => {
            println!("Skipping batch: {}", e);
            println!();
            return None;
        }
    };

    let record = BenchmarkRecord::from_stats(&stats, total_size, config.batch_iterations)
        .with_batch(docs.len(), total_size);

    println!(
        "{} documents ({} total) | mean: {} | per-doc avg: {}",
        docs.len(),
        format_bytes(total_size),
        format_ms(record.mean),
        format_ms(record.mean / docs.len() as f64)
    );
    println!();

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;
    use std::fs;

    struct StubEngine {
        fail_on: Option<&'static str>,
    }

    impl Engine for StubEngine {
        fn name(&self) -> &str {
            "stub"
        }

        fn parse(&self, html: &str, _base_url: Option<&str>) -> Result<Option<String>> {
            if let Some(marker) = self.fail_on {
                if html.contains(marker) {
                    return Err(BenchError::engine("stub", "induced failure"));
                }
            }
            Ok(Some(html.trim().to_string()))
        }
    }

    fn config_with_pages(cases: &[(&str, &str)]) -> (tempfile::TempDir, SuiteConfig) {
        let dir = tempfile::tempdir().unwrap();
        for (name, html) in cases {
            let case_dir = dir.path().join(name);
            fs::create_dir_all(&case_dir).unwrap();
            fs::write(case_dir.join("source.html"), html).unwrap();
        }

        let owned = |cases: &[&str]| cases.iter().map(|s| s.to_string()).collect();
        let config = SuiteConfig {
            pages_dir: dir.path().to_path_buf(),
            small_cases: owned(&["one", "two"]),
            medium_cases: owned(&[]),
            large_cases: owned(&["big"]),
            batch_cases: owned(&["one", "two"]),
            single_iterations: 5,
            large_iterations: 3,
            batch_iterations: 4,
        };
        (dir, config)
    }

    #[test]
    fn test_suite_populates_all_sections() {
        let (_dir, config) = config_with_pages(&[
            ("one", "<html>one</html>"),
            ("two", "<html>two</html>"),
            ("big", "<html>big</html>"),
        ]);
        let engine = StubEngine { fail_on: None };

        let results = run_suite(&engine, &config);

        assert_eq!(results.single.len(), 2);
        assert_eq!(results.large.len(), 1);
        let batch = results.batch.unwrap();
        assert_eq!(batch.document_count, Some(2));
        assert_eq!(batch.iterations, 4);
        assert_eq!(results.single["one"].size_category.as_deref(), Some("small"));
        assert_eq!(results.large["big"].size_category.as_deref(), Some("large"));
    }

    #[test]
    fn test_missing_page_is_skipped() {
        let (_dir, config) = config_with_pages(&[("one", "<html>one</html>")]);
        let engine = StubEngine { fail_on: None };

        let results = run_suite(&engine, &config);

        assert!(results.single.contains_key("one"));
        assert!(!results.single.contains_key("two"));
        assert!(results.large.is_empty());
    }

    #[test]
    fn test_engine_failure_skips_case_and_continues() {
        let (_dir, config) = config_with_pages(&[
            ("one", "<html>poison</html>"),
            ("two", "<html>two</html>"),
        ]);
        let engine = StubEngine {
            fail_on: Some("poison"),
        };

        let results = run_suite(&engine, &config);

        assert!(!results.single.contains_key("one"));
        assert!(results.single.contains_key("two"));
        // The failing document is also in the batch list, so the batch
        // aggregate is dropped as a whole.
        assert!(results.batch.is_none());
    }

    #[test]
    fn test_record_sizes_match_inputs() {
        let (_dir, config) = config_with_pages(&[
            ("one", "<html>one</html>"),
            ("two", "<html>second</html>"),
        ]);
        let engine = StubEngine { fail_on: None };

        let results = run_suite(&engine, &config);

        assert_eq!(results.single["one"].size, "<html>one</html>".len());
        let batch = results.batch.unwrap();
        assert_eq!(
            batch.total_size,
            Some("<html>one</html>".len() + "<html>second</html>".len())
        );
    }
}
