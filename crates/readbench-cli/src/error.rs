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

//! Structured error types for the ReadBench CLI.
//!
//! All CLI operations return `Result<T, CliError>` so the binary entry
//! point can map every failure to a message and an exit status.

use readbench::BenchError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for ReadBench CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// A required results file is absent or could not be decoded.
    ///
    /// The distinction between "never written" and "written but garbled"
    /// does not matter to the operator; both mean the benchmark run that
    /// should have produced this file has to be repeated.
    #[error("no usable benchmark results at '{path}'")]
    MissingResults {
        /// The results file that was requested
        path: PathBuf,
    },

    /// An underlying benchmark-framework error (report I/O, JSON).
    #[error(transparent)]
    Bench(#[from] BenchError),
}

impl CliError {
    /// Creates a missing-results error for `path`.
    pub fn missing_results(path: impl Into<PathBuf>) -> Self {
        CliError::MissingResults { path: path.into() }
    }

    /// Exit status for this error.
    ///
    /// Missing or malformed input is distinguished (status 2) so callers
    /// can tell "rerun the benchmarks" apart from other failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::MissingResults { .. } => 2,
            CliError::Bench(_) => 1,
        }
    }

    /// Remediation guidance printed after the error message, when any.
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::MissingResults { path } => Some(format!(
                "To produce it:\n  \
                 1. run the benchmark suite for that engine (e.g. `cargo run --release --example run_suite`)\n  \
                 2. save its results to '{}' and rerun this comparison",
                path.display()
            )),
            CliError::Bench(_) => None,
        }
    }
}
