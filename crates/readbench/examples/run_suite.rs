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

//! Runs the full benchmark suite with a toy engine and persists the results.
//!
//! Replace `WhitespaceEngine` with a binding to a real readability
//! implementation to produce results worth comparing:
//!
//! ```bash
//! cargo run --release --example run_suite -- tests/test-pages benchmark/a-results.json
//! ```

use readbench::{run_suite, store, Engine, Result, SuiteConfig};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Stand-in engine: strips tags naively and collapses whitespace.
struct WhitespaceEngine;

impl Engine for WhitespaceEngine {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn parse(&self, html: &str, _base_url: Option<&str>) -> Result<Option<String>> {
        let mut text = String::with_capacity(html.len());
        let mut in_tag = false;
        for ch in html.chars() {
            match ch {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => text.push(ch),
                _ => {}
            }
        }

        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(collapsed))
        }
    }
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let config = SuiteConfig {
        pages_dir: args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("tests/test-pages")),
        ..SuiteConfig::default()
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("benchmark/whitespace-results.json"));

    let results = run_suite(&WhitespaceEngine, &config);

    if results.is_empty() {
        eprintln!("no test pages found under {}", config.pages_dir.display());
        return ExitCode::FAILURE;
    }

    match store::save(&results, &output) {
        Ok(()) => {
            println!("Results saved to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to save results: {}", e);
            ExitCode::FAILURE
        }
    }
}
