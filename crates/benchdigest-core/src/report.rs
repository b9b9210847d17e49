// Dweve Benchdigest - Benchmark transcript analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! Digest report model.
//!
//! Walks the configured dimensions over a [`ResultSet`] and collects the
//! three report sections: timings per size, the fastest strategy per
//! (size, format) and scaling per (format, strategy). Combinations without
//! data are left out.

use crate::config::Dimensions;
use crate::results::{Ranking, ResultSet, ScalingRecord};
use serde::{Deserialize, Serialize};

/// Mid estimate of one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyTiming {
    /// Strategy name.
    pub strategy: String,
    /// Mid estimate in microseconds.
    pub micros: f64,
}

/// Timings of one format at one size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatTimings {
    /// Format name.
    pub format: String,
    /// Strategies with data, in dimension order.
    pub timings: Vec<StrategyTiming>,
}

/// All timings at one size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeSummary {
    /// Input size in megabytes.
    pub size: u64,
    /// Formats with data, in dimension order.
    pub formats: Vec<FormatTimings>,
}

/// Fastest strategies at one size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeWinners {
    /// Input size in megabytes.
    pub size: u64,
    /// One ranking per format with data.
    pub winners: Vec<Ranking>,
}

/// Complete digest of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestReport {
    /// Report title.
    pub title: String,
    /// Benchmark group the report covers.
    pub group: String,
    /// Number of records in the result set.
    pub record_count: usize,
    /// Timings by size.
    pub summary: Vec<SizeSummary>,
    /// Fastest strategy by size and format.
    pub winners: Vec<SizeWinners>,
    /// Scaling per (format, strategy).
    pub scaling: Vec<ScalingRecord>,
    /// Additional notes.
    pub notes: Vec<String>,
}

impl DigestReport {
    /// Builds a report over `dims`.
    ///
    /// # Example
    ///
    /// ```
    /// use benchdigest_core::{fixtures::SAMPLE_TRANSCRIPT, DigestReport, Dimensions, ResultSet};
    ///
    /// let results = ResultSet::build(SAMPLE_TRANSCRIPT);
    /// let report = DigestReport::build("Large file viewing", &results, &Dimensions::default());
    /// assert_eq!(report.summary.len(), 5);
    /// ```
    pub fn build(title: impl Into<String>, results: &ResultSet, dims: &Dimensions) -> Self {
        let summary = dims
            .sizes()
            .iter()
            .filter_map(|&size| {
                let formats: Vec<FormatTimings> = dims
                    .formats()
                    .iter()
                    .filter_map(|format| format_timings(results, dims, format, size))
                    .collect();
                (!formats.is_empty()).then_some(SizeSummary { size, formats })
            })
            .collect();

        let winners = dims
            .sizes()
            .iter()
            .filter_map(|&size| {
                let winners: Vec<Ranking> = dims
                    .formats()
                    .iter()
                    .filter_map(|format| results.best_strategy(dims, format, size))
                    .collect();
                (!winners.is_empty()).then_some(SizeWinners { size, winners })
            })
            .collect();

        let scaling = dims
            .formats()
            .iter()
            .flat_map(|format| {
                dims.strategies()
                    .iter()
                    .filter_map(move |strategy| results.scaling(dims, format, strategy))
            })
            .collect();

        Self {
            title: title.into(),
            group: dims.group().to_string(),
            record_count: results.len(),
            summary,
            winners,
            scaling,
            notes: Vec::new(),
        }
    }

    /// Adds a note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Whether no section has any data.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.winners.is_empty() && self.scaling.is_empty()
    }
}

fn format_timings(
    results: &ResultSet,
    dims: &Dimensions,
    format: &str,
    size: u64,
) -> Option<FormatTimings> {
    let timings: Vec<StrategyTiming> = dims
        .strategies()
        .iter()
        .filter_map(|strategy| {
            results
                .lookup(dims, format, strategy, size)
                .map(|micros| StrategyTiming {
                    strategy: strategy.clone(),
                    micros,
                })
        })
        .collect();

    (!timings.is_empty()).then(|| FormatTimings {
        format: format.to_string(),
        timings,
    })
}
