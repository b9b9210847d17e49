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

//! Report dimensions.
//!
//! The sizes, formats and strategies a report walks over are passed
//! explicitly to every query. [`Dimensions::default`] reproduces the
//! large-file-viewing benchmark layout; other suites supply their own.

use crate::error::{DigestError, Result};
use crate::key::ConfigKey;
use crate::results::ResultSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default benchmark group.
pub const DEFAULT_GROUP: &str = "large_file_viewing";

/// Default input sizes in megabytes, ascending.
pub const DEFAULT_SIZES: &[u64] = &[1, 10, 50, 100, 500];

/// Default file formats.
pub const DEFAULT_FORMATS: &[&str] = &["json", "csv", "text"];

/// Default access strategies, in tie-break order.
pub const DEFAULT_STRATEGIES: &[&str] = &["auto", "memory_mapped", "streaming"];

/// The enumerations a report iterates over.
///
/// Sizes are kept sorted ascending and free of duplicates so scaling
/// queries can take the first and last present entries as endpoints.
/// Strategy order is significant: it breaks ties in
/// [`ResultSet::best_strategy`].
///
/// # Example
///
/// ```
/// use benchdigest_core::Dimensions;
///
/// let dims = Dimensions::default()
///     .with_group("parse_bench")
///     .with_sizes([100, 10, 1])
///     .with_formats(["json"]);
/// assert_eq!(dims.sizes(), &[1, 10, 100]);
/// assert!(dims.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    group: String,
    sizes: Vec<u64>,
    formats: Vec<String>,
    strategies: Vec<String>,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            group: DEFAULT_GROUP.to_string(),
            sizes: DEFAULT_SIZES.to_vec(),
            formats: DEFAULT_FORMATS.iter().map(|s| s.to_string()).collect(),
            strategies: DEFAULT_STRATEGIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Dimensions {
    /// Sets the benchmark group prefix.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the sizes; they are sorted and deduplicated.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = u64>) -> Self {
        let sorted: BTreeSet<u64> = sizes.into_iter().collect();
        self.sizes = sorted.into_iter().collect();
        self
    }

    /// Sets the formats.
    pub fn with_formats<S: Into<String>>(mut self, formats: impl IntoIterator<Item = S>) -> Self {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the strategies, in tie-break order.
    pub fn with_strategies<S: Into<String>>(
        mut self,
        strategies: impl IntoIterator<Item = S>,
    ) -> Self {
        self.strategies = strategies.into_iter().map(Into::into).collect();
        self
    }

    /// Benchmark group prefix.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Sizes, ascending.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Formats.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// Strategies, in tie-break order.
    pub fn strategies(&self) -> &[String] {
        &self.strategies
    }

    /// Checks that the dimensions can address benchmark keys.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InvalidConfig`] when the group is blank, a list
    /// is empty, a size is zero, or a name is blank or contains `/`.
    pub fn validate(&self) -> Result<()> {
        if self.group.trim().is_empty() {
            return Err(DigestError::invalid_config("group", "must not be empty"));
        }
        if self.sizes.is_empty() {
            return Err(DigestError::invalid_config("sizes", "must not be empty"));
        }
        if self.sizes.contains(&0) {
            return Err(DigestError::invalid_config("sizes", "must be positive"));
        }
        validate_names("formats", &self.formats)?;
        validate_names("strategies", &self.strategies)?;
        Ok(())
    }

    /// Derives dimensions from the keys present in a result set.
    ///
    /// `formats` anchors key decomposition. The group is taken from the
    /// first decodable key; sizes come out ascending and strategies in
    /// lexical order. Keys from other groups are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InvalidConfig`] if no key decodes against the
    /// given formats.
    pub fn infer<S: AsRef<str>>(results: &ResultSet, formats: &[S]) -> Result<Self> {
        let mut keys = results
            .keys()
            .filter_map(|text| ConfigKey::parse(text, formats));

        let first = keys.next().ok_or_else(|| {
            DigestError::invalid_config("formats", "no benchmark key matches the format set")
        })?;

        let mut sizes = BTreeSet::from([first.size]);
        let mut found_formats = BTreeSet::from([first.format.clone()]);
        let mut strategies = BTreeSet::from([first.strategy.clone()]);

        for key in keys {
            if key.group != first.group {
                tracing::debug!(key = %key, group = %first.group, "skipping key from another group");
                continue;
            }
            sizes.insert(key.size);
            found_formats.insert(key.format);
            strategies.insert(key.strategy);
        }

        // Keep the caller's format order, restricted to formats that occur.
        let ordered_formats: Vec<String> = formats
            .iter()
            .map(|f| f.as_ref().to_string())
            .filter(|f| found_formats.contains(f))
            .collect();

        Ok(Self {
            group: first.group,
            sizes: sizes.into_iter().collect(),
            formats: ordered_formats,
            strategies: strategies.into_iter().collect(),
        })
    }
}

fn validate_names(parameter: &str, names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Err(DigestError::invalid_config(parameter, "must not be empty"));
    }
    if let Some(bad) = names
        .iter()
        .find(|n| n.trim().is_empty() || n.contains('/'))
    {
        return Err(DigestError::invalid_config(
            parameter,
            format!("invalid name '{}'", bad),
        ));
    }
    Ok(())
}
