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

//! Benchmark key decomposition.
//!
//! Keys have the shape `<group>/<format>_<strategy>/<size>`. Strategies such
//! as `memory_mapped` contain underscores themselves, so the variant segment
//! is split using the known format names as anchors instead of on an
//! arbitrary underscore.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decomposed identity of one benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConfigKey {
    /// Benchmark group; may itself contain `/`.
    pub group: String,
    /// File format, e.g. `csv`.
    pub format: String,
    /// Access strategy, e.g. `memory_mapped`.
    pub strategy: String,
    /// Input size in megabytes.
    pub size: u64,
}

impl ConfigKey {
    /// Creates a key from its parts.
    pub fn new(
        group: impl Into<String>,
        format: impl Into<String>,
        strategy: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            group: group.into(),
            format: format.into(),
            strategy: strategy.into(),
            size,
        }
    }

    /// Decomposes raw key text.
    ///
    /// The size is the last `/` segment, the variant the one before it and
    /// the group everything else. The variant must start with one of
    /// `formats` followed by `_`; when several match, the longest wins.
    /// Returns `None` for text that does not fit this shape.
    ///
    /// # Example
    ///
    /// ```
    /// use benchdigest_core::ConfigKey;
    ///
    /// let key = ConfigKey::parse(
    ///     "large_file_viewing/csv_memory_mapped/500",
    ///     &["json", "csv", "text"],
    /// )
    /// .unwrap();
    /// assert_eq!(key.format, "csv");
    /// assert_eq!(key.strategy, "memory_mapped");
    /// assert_eq!(key.size, 500);
    /// ```
    pub fn parse<S: AsRef<str>>(text: &str, formats: &[S]) -> Option<Self> {
        let (head, size) = text.trim().rsplit_once('/')?;
        let size: u64 = size.parse().ok().filter(|s| *s > 0)?;
        let (group, variant) = head.rsplit_once('/')?;
        if group.is_empty() {
            return None;
        }

        let (format, strategy) = formats
            .iter()
            .filter_map(|format| {
                let format: &str = format.as_ref();
                let strategy = variant.strip_prefix(format)?.strip_prefix('_')?;
                (!strategy.is_empty()).then_some((format, strategy))
            })
            .max_by_key(|(format, _)| format.len())?;

        Some(Self::new(group, format, strategy, size))
    }

    /// Variant segment, `<format>_<strategy>`.
    pub fn variant(&self) -> String {
        format!("{}_{}", self.format, self.strategy)
    }

    /// Reassembles the raw key text.
    pub fn to_key_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}_{}/{}",
            self.group, self.format, self.strategy, self.size
        )
    }
}
