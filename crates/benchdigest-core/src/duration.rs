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

//! Duration literal parsing.
//!
//! Criterion prints durations as a decimal magnitude followed by a unit
//! suffix (`104.67 µs`, `1.9260 ms`, `5 ns`). Everything downstream works
//! in microseconds, so this module normalizes every literal to that unit.
//!
//! Two entry points are provided:
//!
//! - [`parse_duration`] fails with a [`DurationError`] when the literal
//!   cannot be read, so a real zero is distinguishable from garbage.
//! - [`parse_duration_lenient`] maps every failure to `0.0`, matching the
//!   best-effort behavior older report scripts relied on.

use crate::error::DurationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time unit recognized in a duration literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// `ns`
    Nanoseconds,
    /// `µs`, `μs` or `us`
    Microseconds,
    /// `ms`
    Milliseconds,
    /// `s`
    Seconds,
}

/// Suffix table, longest suffix first.
///
/// `ms`, `ns` and the micro forms all end in `s`, so bare `s` must be the
/// last candidate.
const SUFFIXES: &[(&str, TimeUnit)] = &[
    ("ns", TimeUnit::Nanoseconds),
    ("ms", TimeUnit::Milliseconds),
    ("\u{00b5}s", TimeUnit::Microseconds),
    ("\u{03bc}s", TimeUnit::Microseconds),
    ("us", TimeUnit::Microseconds),
    ("s", TimeUnit::Seconds),
];

impl TimeUnit {
    /// Resolves a unit token such as `ms` or `µs`.
    pub fn from_suffix(token: &str) -> Option<Self> {
        SUFFIXES
            .iter()
            .find(|(suffix, _)| *suffix == token)
            .map(|(_, unit)| *unit)
    }

    /// Canonical suffix used when printing.
    pub fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "\u{00b5}s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
        }
    }

    /// Converts a magnitude in this unit to microseconds.
    pub fn to_micros(&self, magnitude: f64) -> f64 {
        match self {
            // Divide rather than multiply by 0.001 so `5 ns` is exactly 0.005.
            TimeUnit::Nanoseconds => magnitude / 1_000.0,
            TimeUnit::Microseconds => magnitude,
            TimeUnit::Milliseconds => magnitude * 1_000.0,
            TimeUnit::Seconds => magnitude * 1_000_000.0,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Splits a literal into its numeric prefix and unit token.
fn split_literal(literal: &str) -> (&str, &str) {
    let end = literal
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map(|(i, _)| i)
        .unwrap_or(literal.len());
    let (magnitude, unit) = literal.split_at(end);
    (magnitude, unit.trim())
}

/// Parses a duration literal into microseconds.
///
/// Whitespace between the number and the unit is accepted, since criterion
/// separates them with a space.
///
/// # Errors
///
/// - [`DurationError::EmptyLiteral`] for blank input
/// - [`DurationError::UnrecognizedUnit`] when the suffix is missing or unknown
/// - [`DurationError::InvalidMagnitude`] when the number cannot be parsed
///
/// # Examples
///
/// ```
/// use benchdigest_core::duration::parse_duration;
///
/// assert_eq!(parse_duration("104.67 µs").unwrap(), 104.67);
/// assert_eq!(parse_duration("19.532 ms").unwrap(), 19_532.0);
/// assert!(parse_duration("3 parsecs").is_err());
/// ```
pub fn parse_duration(literal: &str) -> Result<f64, DurationError> {
    let literal = literal.trim();
    if literal.is_empty() {
        return Err(DurationError::EmptyLiteral);
    }

    let (magnitude, token) = split_literal(literal);
    let unit = TimeUnit::from_suffix(token).ok_or_else(|| DurationError::UnrecognizedUnit {
        literal: literal.to_string(),
    })?;

    let value: f64 = magnitude
        .parse()
        .map_err(|_| DurationError::InvalidMagnitude {
            literal: literal.to_string(),
        })?;

    Ok(unit.to_micros(value))
}

/// Parses a duration literal, returning `0.0` when it cannot be read.
///
/// Callers must treat `0.0` as "unparseable" rather than a measured zero.
/// Prefer [`parse_duration`] when the distinction matters.
pub fn parse_duration_lenient(literal: &str) -> f64 {
    match parse_duration(literal) {
        Ok(micros) => micros,
        Err(err) => {
            tracing::debug!(%err, "treating unparseable duration as zero");
            0.0
        }
    }
}

/// Formats a microsecond value as milliseconds with two decimals.
pub fn format_millis(micros: f64) -> String {
    format!("{:.2} ms", micros / 1_000.0)
}
