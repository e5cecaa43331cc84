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

//! Structured error types for benchmark operations.
//!
//! All fallible operations in this crate return `Result<T, BenchError>`.
//! Failures of the engine under test are wrapped, never retried or
//! suppressed; the suite layer decides whether a failing test case is
//! skipped.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while running or persisting benchmarks.
#[derive(Error, Debug)]
pub enum BenchError {
    /// I/O operation failed (file read, write, or rename).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The engine under test failed while parsing a document.
    ///
    /// The harness propagates this uncaught; whether the test case is
    /// skipped is the caller's decision.
    #[error("engine failure on '{case}': {message}")]
    Engine {
        /// Test case being measured when the engine failed.
        case: String,
        /// The engine's error message.
        message: String,
    },

    /// A measurement was requested with zero iterations.
    #[error("at least one timed iteration is required")]
    EmptySamples,
}

impl BenchError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an engine failure error for a test case.
    pub fn engine(case: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Engine {
            case: case.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = BenchError::io_error(
            "results.json",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("results.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_engine_error_display() {
        let err = BenchError::engine("nytimes-1", "stack exhausted");
        assert_eq!(
            err.to_string(),
            "engine failure on 'nytimes-1': stack exhausted"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: BenchError = json_err.into();
        assert!(matches!(err, BenchError::Json(_)));
    }
}
