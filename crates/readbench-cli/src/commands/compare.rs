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

//! Compare command implementation.

use crate::cli::CompareArgs;
use crate::error::CliError;
use readbench::{emit, render, store, Comparison};

/// Loads both result sets, builds the comparison, and emits the report.
///
/// Both inputs must load cleanly before any output is produced; a missing
/// or malformed input aborts with no report written.
pub fn compare(args: &CompareArgs) -> Result<(), CliError> {
    let a = store::load(&args.a).ok_or_else(|| CliError::missing_results(&args.a))?;
    let b = store::load(&args.b).ok_or_else(|| CliError::missing_results(&args.b))?;

    let comparison = Comparison::build(&a, &b, &args.a_name, &args.b_name);
    let document = render(&comparison);
    emit(&document, &args.output)?;

    Ok(())
}
