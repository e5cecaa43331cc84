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

//! Persistence of benchmark result sets.
//!
//! A [`ResultSet`] is written once per full benchmark run per engine, as an
//! atomic snapshot; it is never partially updated. Loading is tolerant of
//! producers with a different schema spelling for the batch document count
//! and returns an explicit `None` rather than raising when the file is
//! missing or structurally invalid.

use crate::error::{BenchError, Result};
use crate::harness::SampleStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Document count assumed for a batch record that carries none.
pub const DEFAULT_BATCH_DOCUMENTS: usize = 10;

/// Timing summary for one test case (or one batch run).
///
/// Statistics are deterministic functions of the sorted sample sequence and
/// the record is immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Arithmetic mean in milliseconds.
    pub mean: f64,
    /// Median in milliseconds (upper middle for even sample counts).
    pub median: f64,
    /// Fastest sample in milliseconds.
    pub min: f64,
    /// Slowest sample in milliseconds.
    pub max: f64,
    /// 95th percentile in milliseconds.
    pub p95: f64,
    /// Number of timed iterations.
    pub iterations: usize,
    /// Input size in bytes (total size for batch records).
    pub size: usize,
    /// Raw duration samples in milliseconds, sorted ascending.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<f64>,
    /// Size category label ("small", "medium", "large").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_category: Option<String>,
    /// Number of documents in a batch record. Producers may spell this
    /// `documentCount`; it is normalized to this field at load time.
    #[serde(alias = "documentCount", skip_serializing_if = "Option::is_none")]
    pub document_count: Option<usize>,
    /// Combined byte size of all batch documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_size: Option<usize>,
}

impl BenchmarkRecord {
    /// Builds a record from harness statistics and the input size.
    pub fn from_stats(stats: &SampleStats, size: usize, iterations: usize) -> Self {
        Self {
            mean: stats.mean,
            median: stats.median,
            min: stats.min,
            max: stats.max,
            p95: stats.p95,
            iterations,
            size,
            samples: stats.samples().to_vec(),
            size_category: None,
            document_count: None,
            total_size: None,
        }
    }

    /// Sets the size category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.size_category = Some(category.into());
        self
    }

    /// Marks the record as a batch aggregate over `documents` inputs.
    pub fn with_batch(mut self, documents: usize, total_size: usize) -> Self {
        self.document_count = Some(documents);
        self.total_size = Some(total_size);
        self
    }
}

/// Category of individually keyed records in a [`ResultSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Individually timed documents.
    Single,
    /// Documents above the large-size threshold.
    Large,
}

impl Category {
    /// Returns the category name used in report headings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Single => "single",
            Category::Large => "large",
        }
    }
}

/// Full set of results from one benchmark run of one engine.
///
/// The maps are ordered by test-case identifier so that downstream
/// comparison output is reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Individually timed documents, keyed by test-case identifier.
    pub single: BTreeMap<String, BenchmarkRecord>,
    /// One aggregate record for sequential processing of several documents.
    pub batch: Option<BenchmarkRecord>,
    /// Documents above the large-size threshold.
    pub large: BTreeMap<String, BenchmarkRecord>,
}

impl ResultSet {
    /// Returns the records for a keyed category.
    pub fn section(&self, category: Category) -> &BTreeMap<String, BenchmarkRecord> {
        match category {
            Category::Single => &self.single,
            Category::Large => &self.large,
        }
    }

    /// Returns whether the set contains no records at all.
    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.large.is_empty() && self.batch.is_none()
    }
}

/// Writes a result set to `path` as pretty-printed JSON, atomically.
///
/// The JSON is staged in a temporary file in the target directory and
/// renamed into place, so readers never observe a partial snapshot.
pub fn save(set: &ResultSet, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BenchError::io_error(parent, e))?;
    }

    let json = serde_json::to_string_pretty(set)?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| BenchError::io_error(dir, e))?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| BenchError::io_error(path, e))?;
    tmp.persist(path)
        .map_err(|e| BenchError::io_error(path, e.error))?;

    Ok(())
}

/// Loads a result set from `path`.
///
/// Returns `None` when the file is missing, unreadable, or structurally
/// invalid, so callers can report "no data" instead of crashing. A batch
/// record without a document count is normalized to
/// [`DEFAULT_BATCH_DOCUMENTS`] here, in one place, rather than at each
/// use site.
pub fn load(path: &Path) -> Option<ResultSet> {
    let contents = fs::read_to_string(path).ok()?;
    let mut set: ResultSet = serde_json::from_str(&contents).ok()?;

    if let Some(batch) = set.batch.as_mut() {
        batch.document_count.get_or_insert(DEFAULT_BATCH_DOCUMENTS);
    }

    Some(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mean: f64, size: usize) -> BenchmarkRecord {
        let stats = SampleStats::from_samples(vec![mean]);
        BenchmarkRecord::from_stats(&stats, size, 1)
    }

    #[test]
    fn test_from_stats_copies_statistics() {
        let stats = SampleStats::from_samples(vec![2.0, 1.0, 3.0]);
        let rec = BenchmarkRecord::from_stats(&stats, 4096, 3);
        assert_eq!(rec.mean, 2.0);
        assert_eq!(rec.median, 2.0);
        assert_eq!(rec.min, 1.0);
        assert_eq!(rec.max, 3.0);
        assert_eq!(rec.samples, vec![1.0, 2.0, 3.0]);
        assert_eq!(rec.size, 4096);
        assert_eq!(rec.iterations, 3);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        assert!(load(Path::new("/nonexistent/results.json")).is_none());
    }

    #[test]
    fn test_load_malformed_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load(&path).is_none());

        fs::write(&path, r#"{"single": 42}"#).unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_round_trip() {
        let mut set = ResultSet::default();
        set.single
            .insert("001".into(), record(1.5, 2048).with_category("small"));
        set.large
            .insert("guardian-1".into(), record(40.0, 800_000).with_category("large"));
        set.batch = Some(record(120.0, 500_000).with_batch(10, 500_000));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        save(&set, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn test_camel_case_document_count_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(
            &path,
            r#"{
                "single": {},
                "large": {},
                "batch": {
                    "mean": 10.0, "median": 10.0, "min": 9.0, "max": 11.0,
                    "p95": 11.0, "iterations": 50, "size": 1000,
                    "documentCount": 7
                }
            }"#,
        )
        .unwrap();

        let set = load(&path).unwrap();
        assert_eq!(set.batch.unwrap().document_count, Some(7));
    }

    #[test]
    fn test_missing_document_count_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(
            &path,
            r#"{
                "single": {},
                "large": {},
                "batch": {
                    "mean": 10.0, "median": 10.0, "min": 9.0, "max": 11.0,
                    "p95": 11.0, "iterations": 50, "size": 1000
                }
            }"#,
        )
        .unwrap();

        let set = load(&path).unwrap();
        assert_eq!(
            set.batch.unwrap().document_count,
            Some(DEFAULT_BATCH_DOCUMENTS)
        );
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/benchmark/results.json");
        save(&ResultSet::default(), &path).unwrap();
        assert!(load(&path).is_some());
    }

    #[test]
    fn test_section_lookup() {
        let mut set = ResultSet::default();
        set.single.insert("x".into(), record(1.0, 10));
        assert_eq!(set.section(Category::Single).len(), 1);
        assert!(set.section(Category::Large).is_empty());
    }
}
