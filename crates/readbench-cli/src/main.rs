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

//! ReadBench Command Line Interface

use clap::Parser;
use readbench_cli::cli::Commands;
use std::process::ExitCode;

/// ReadBench - readability engine benchmark toolkit
///
/// Compares timing results from two interchangeable readability
/// implementations and produces a Markdown report.
///
/// # Examples
///
/// ```bash
/// # Compare two result sets with the default paths
/// readbench compare
///
/// # Name the engines and pick a report location
/// readbench compare --a rust.json --b js.json \
///     --a-name rust --b-name readability.js --output report.md
/// ```
#[derive(Parser)]
#[command(name = "readbench")]
#[command(author, version, about = "ReadBench - readability engine benchmark toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("{}", hint);
            }
            ExitCode::from(e.exit_code())
        }
    }
}
