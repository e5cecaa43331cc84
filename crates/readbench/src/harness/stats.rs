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

//! Statistical reduction of duration samples.
//!
//! All statistics are deterministic functions of the sorted sample
//! sequence; a `SampleStats` is immutable once computed.

/// Summary statistics over a set of duration samples in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStats {
    samples: Vec<f64>,
    /// Arithmetic mean.
    pub mean: f64,
    /// Element at index ⌊n/2⌋ of the sorted samples (upper middle for even n).
    pub median: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Element at index ⌊n × 0.95⌋ of the sorted samples.
    pub p95: f64,
}

impl SampleStats {
    /// Computes statistics from raw duration samples in milliseconds.
    ///
    /// The samples are sorted ascending before any statistic is taken.
    /// An empty input yields all-zero statistics.
    pub fn from_samples(mut samples: Vec<f64>) -> Self {
        if samples.is_empty() {
            return Self {
                samples,
                mean: 0.0,
                median: 0.0,
                min: 0.0,
                max: 0.0,
                p95: 0.0,
            };
        }

        samples.sort_by(f64::total_cmp);

        let n = samples.len();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let median = samples[n / 2];
        let p95 = samples[(n as f64 * 0.95) as usize];
        let min = samples[0];
        let max = samples[n - 1];

        Self {
            samples,
            mean,
            median,
            min,
            max,
            p95,
        }
    }

    /// Returns the sorted samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_hold() {
        let stats = SampleStats::from_samples(vec![3.0, 1.0, 4.0, 1.5, 9.2, 2.6]);
        assert!(stats.min <= stats.median && stats.median <= stats.max);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }

    #[test]
    fn test_median_upper_middle_for_even_n() {
        // Sorted [1,2,3,4]: index 4/2 = 2, so the median is 3, not 2.5.
        let stats = SampleStats::from_samples(vec![4.0, 2.0, 1.0, 3.0]);
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn test_p95_index_selection() {
        // 100 sorted samples 0..100: ⌊100 × 0.95⌋ = index 95 exactly.
        let samples: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let stats = SampleStats::from_samples(samples);
        assert_eq!(stats.p95, 95.0);
    }

    #[test]
    fn test_single_sample() {
        let stats = SampleStats::from_samples(vec![7.5]);
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.min, 7.5);
        assert_eq!(stats.max, 7.5);
        assert_eq!(stats.p95, 7.5);
    }

    #[test]
    fn test_samples_are_sorted() {
        let stats = SampleStats::from_samples(vec![5.0, 1.0, 3.0]);
        assert_eq!(stats.samples(), &[1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_empty_is_zeroed() {
        let stats = SampleStats::from_samples(Vec::new());
        assert!(stats.is_empty());
        assert_eq!(stats.mean, 0.0);
    }
}
