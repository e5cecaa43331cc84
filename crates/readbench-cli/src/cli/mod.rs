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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compare two persisted benchmark result sets and emit a report
    Compare(CompareArgs),
}

/// Arguments for the `compare` subcommand.
#[derive(Args)]
pub struct CompareArgs {
    /// Results file for the first engine (the comparison subject)
    #[arg(long, default_value = "benchmark/a-results.json")]
    pub a: PathBuf,

    /// Results file for the second engine (the baseline)
    #[arg(long, default_value = "benchmark/b-results.json")]
    pub b: PathBuf,

    /// Display name for the first engine
    #[arg(long, default_value = "A")]
    pub a_name: String,

    /// Display name for the second engine
    #[arg(long, default_value = "B")]
    pub b_name: String,

    /// Where to persist the rendered report
    #[arg(long, default_value = "benchmark/comparison.md")]
    pub output: PathBuf,
}

impl Commands {
    /// Execute the command with the provided arguments.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Compare(args) => commands::compare(&args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_compare_defaults() {
        let cli = Cli::parse_from(["readbench", "compare"]);
        let Commands::Compare(args) = cli.command;
        assert_eq!(args.a, PathBuf::from("benchmark/a-results.json"));
        assert_eq!(args.b, PathBuf::from("benchmark/b-results.json"));
        assert_eq!(args.a_name, "A");
        assert_eq!(args.b_name, "B");
        assert_eq!(args.output, PathBuf::from("benchmark/comparison.md"));
    }

    #[test]
    fn test_compare_overrides() {
        let cli = Cli::parse_from([
            "readbench",
            "compare",
            "--a",
            "rust.json",
            "--b",
            "js.json",
            "--a-name",
            "rust",
            "--b-name",
            "readability.js",
            "--output",
            "out.md",
        ]);
        let Commands::Compare(args) = cli.command;
        assert_eq!(args.a, PathBuf::from("rust.json"));
        assert_eq!(args.b_name, "readability.js");
        assert_eq!(args.output, PathBuf::from("out.md"));
    }
}
