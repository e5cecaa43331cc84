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

//! Timing harness for repeated measurement of an opaque operation.
//!
//! # Modules
//!
//! - `runner`: warmup and timed execution of a fallible operation
//! - `stats`: reduction of duration samples to a statistical summary

pub mod runner;
pub mod stats;

pub use runner::{run, WARMUP_RUNS};
pub use stats::SampleStats;
