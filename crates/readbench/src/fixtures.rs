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

//! Test-page loading utilities.
//!
//! Test pages follow the layout `{pages_dir}/{case}/source.html`, one
//! directory per named test case.

use std::fs;
use std::path::Path;

/// Loads the source document for a test case.
///
/// Returns `None` when the page is missing or unreadable, so suites can
/// skip absent cases and continue.
pub fn load_test_case(pages_dir: &Path, name: &str) -> Option<String> {
    let path = pages_dir.join(name).join("source.html");
    fs::read_to_string(&path).ok()
}

/// Lists the test cases available under a pages directory.
pub fn list_test_cases(pages_dir: &Path) -> Vec<String> {
    let mut names = Vec::new();

    if let Ok(entries) = fs::read_dir(pages_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.join("source.html").is_file() {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
    }

    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages_with(cases: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, html) in cases {
            let case_dir = dir.path().join(name);
            fs::create_dir_all(&case_dir).unwrap();
            fs::write(case_dir.join("source.html"), html).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_test_case() {
        let dir = pages_with(&[("001", "<html>one</html>")]);
        let html = load_test_case(dir.path(), "001").unwrap();
        assert_eq!(html, "<html>one</html>");
    }

    #[test]
    fn test_missing_case_is_none() {
        let dir = pages_with(&[]);
        assert!(load_test_case(dir.path(), "absent").is_none());
    }

    #[test]
    fn test_list_test_cases_sorted() {
        let dir = pages_with(&[("b-case", "<p/>"), ("a-case", "<p/>")]);
        assert_eq!(list_test_cases(dir.path()), vec!["a-case", "b-case"]);
    }
}
