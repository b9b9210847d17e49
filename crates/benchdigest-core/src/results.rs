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

//! Parsed benchmark results and the queries over them.
//!
//! A [`ResultSet`] maps raw key text to its estimates. It is built once and
//! only read afterwards. Keys are decomposed on demand, against the format
//! set of the [`Dimensions`] passed to each query.

use crate::config::Dimensions;
use crate::key::ConfigKey;
use crate::transcript::{parse_transcript, BenchmarkTriple, ParseMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Benchmark records keyed by raw key text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    records: BTreeMap<String, BenchmarkTriple>,
}

/// Fastest strategy for one (format, size) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Format queried.
    pub format: String,
    /// Winning strategy.
    pub strategy: String,
    /// Its mid estimate in microseconds.
    pub micros: f64,
}

impl Ranking {
    /// Key variant of the winner, e.g. `json_auto`.
    pub fn variant(&self) -> String {
        format!("{}_{}", self.format, self.strategy)
    }
}

/// One (size, duration) sample in a scaling series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingPoint {
    /// Input size in megabytes.
    pub size: u64,
    /// Mid estimate in microseconds.
    pub micros: f64,
}

/// How one (format, strategy) pair scales from its smallest to its largest
/// measured size.
///
/// `efficiency` is `size_ratio / time_ratio`; it is `None` when
/// `time_ratio` is zero. No target value is implied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingRecord {
    /// Format.
    pub format: String,
    /// Strategy.
    pub strategy: String,
    /// Samples present, ascending by size.
    pub points: Vec<ScalingPoint>,
    /// Last size over first size.
    pub size_ratio: f64,
    /// Last duration over first duration.
    pub time_ratio: f64,
    /// `size_ratio / time_ratio`.
    pub efficiency: Option<f64>,
}

impl ScalingRecord {
    /// First sample, `None` for a record with no points.
    pub fn first(&self) -> Option<ScalingPoint> {
        self.points.first().copied()
    }

    /// Last sample.
    pub fn last(&self) -> Option<ScalingPoint> {
        self.points.last().copied()
    }
}

impl ResultSet {
    /// Builds a result set from a transcript, skipping unusable lines.
    ///
    /// Unparseable duration literals are stored as `0.0`. Use
    /// [`parse_transcript`] with [`ParseMode::Strict`] to drop such records
    /// and see why lines were rejected.
    pub fn build(transcript: &str) -> Self {
        parse_transcript(transcript, ParseMode::Lenient).results
    }

    pub(crate) fn insert(&mut self, key: String, triple: BenchmarkTriple) {
        self.records.insert(key, triple);
    }

    /// Mid estimate for a key, in microseconds.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.records.get(key).map(|t| t.mid)
    }

    /// Full triple for a key.
    pub fn triple(&self, key: &str) -> Option<&BenchmarkTriple> {
        self.records.get(key)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Raw key texts, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// `(key, mid)` pairs, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.records.iter().map(|(k, t)| (k.as_str(), t.mid))
    }

    /// Records whose key decomposes against `dims`' formats.
    pub fn entries(&self, dims: &Dimensions) -> Vec<(ConfigKey, f64)> {
        self.records
            .iter()
            .filter_map(|(text, triple)| {
                ConfigKey::parse(text, dims.formats()).map(|key| (key, triple.mid))
            })
            .collect()
    }

    /// Mid estimate for one configuration of `dims`' group.
    pub fn lookup(&self, dims: &Dimensions, format: &str, strategy: &str, size: u64) -> Option<f64> {
        let key = ConfigKey::new(dims.group(), format, strategy, size);
        self.get(&key.to_key_text())
    }

    /// Fastest strategy for a format at one size.
    ///
    /// Strategies are scanned in `dims` order and ties keep the earlier one.
    /// Returns `None` when no strategy has data for the combination.
    pub fn best_strategy(&self, dims: &Dimensions, format: &str, size: u64) -> Option<Ranking> {
        let mut best: Option<(&str, f64)> = None;
        for strategy in dims.strategies() {
            let Some(micros) = self.lookup(dims, format, strategy, size) else {
                continue;
            };
            if best.map_or(true, |(_, current)| micros < current) {
                best = Some((strategy.as_str(), micros));
            }
        }

        best.map(|(strategy, micros)| Ranking {
            format: format.to_string(),
            strategy: strategy.to_string(),
            micros,
        })
    }

    /// Scaling of a (format, strategy) pair across `dims`' sizes.
    ///
    /// Endpoints are the smallest and largest sizes that have data. Returns
    /// `None` with fewer than two such sizes, or when the first duration is
    /// zero and no ratio can be formed.
    pub fn scaling(&self, dims: &Dimensions, format: &str, strategy: &str) -> Option<ScalingRecord> {
        let points: Vec<ScalingPoint> = dims
            .sizes()
            .iter()
            .filter_map(|&size| {
                self.lookup(dims, format, strategy, size)
                    .map(|micros| ScalingPoint { size, micros })
            })
            .collect();

        if points.len() < 2 {
            return None;
        }

        let first = points[0];
        let last = points[points.len() - 1];
        if first.micros == 0.0 {
            tracing::debug!(format, strategy, "first duration is zero; no time ratio");
            return None;
        }

        let size_ratio = last.size as f64 / first.size as f64;
        let time_ratio = last.micros / first.micros;
        let efficiency = (time_ratio != 0.0).then(|| size_ratio / time_ratio);

        Some(ScalingRecord {
            format: format.to_string(),
            strategy: strategy.to_string(),
            points,
            size_ratio,
            time_ratio,
            efficiency,
        })
    }
}

impl FromIterator<(String, BenchmarkTriple)> for ResultSet {
    fn from_iter<I: IntoIterator<Item = (String, BenchmarkTriple)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
