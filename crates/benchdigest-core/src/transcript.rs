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

//! Transcript scanning.
//!
//! A transcript is free-form text in which some lines carry a criterion
//! estimate:
//!
//! ```text
//! large_file_viewing/json_auto/1    time:   [103.01 µs 104.67 µs 105.79 µs]
//! ```
//!
//! Lines without the `time:` marker are skipped. Criterion wraps long
//! benchmark names onto their own line, so a candidate line with nothing
//! before the marker takes its key from the preceding non-blank line, as
//! long as that line is a single whitespace-free token.
//!
//! Problems are collected as [`LineIssue`]s instead of aborting the scan;
//! the [`ParseMode`] decides whether a record with a bad duration is still
//! stored.

use crate::duration::{parse_duration, parse_duration_lenient};
use crate::error::DurationError;
use crate::results::ResultSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker separating the key from the estimate.
pub const TIME_MARKER: &str = "time:";

/// A decimal number followed by an optional unit suffix.
static DURATION_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)\s*(?:(?:ns|ms|\x{b5}s|\x{3bc}s|us|s)\b)?")
        .expect("duration token regex is valid")
});

/// How strictly duration literals are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    /// Unparseable literals become `0.0` and the record is kept.
    #[default]
    Lenient,
    /// Records with an unparseable literal are not stored.
    Strict,
}

/// Low, mid and high estimates for one configuration, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkTriple {
    /// Lower bound of the confidence interval.
    pub low: f64,
    /// Point estimate.
    pub mid: f64,
    /// Upper bound of the confidence interval.
    pub high: f64,
}

impl BenchmarkTriple {
    /// Creates a triple.
    pub fn new(low: f64, mid: f64, high: f64) -> Self {
        Self { low, mid, high }
    }

    /// Whether `low <= mid <= high` holds.
    pub fn is_ordered(&self) -> bool {
        self.low <= self.mid && self.mid <= self.high
    }
}

/// What went wrong on a transcript line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IssueKind {
    /// Fewer than three duration tokens after the marker.
    MalformedLine {
        /// Number of tokens found
        found: usize,
    },
    /// Nothing before the marker and no preceding name line.
    MissingKey,
    /// A duration literal could not be parsed.
    InvalidDuration {
        /// The literal as it appeared
        literal: String,
        /// Why it was rejected
        reason: String,
    },
    /// The estimates violate `low <= mid <= high`.
    UnorderedTriple(BenchmarkTriple),
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::MalformedLine { found } => {
                write!(f, "expected 3 duration estimates, found {}", found)
            }
            IssueKind::MissingKey => write!(f, "no benchmark name before '{}'", TIME_MARKER),
            IssueKind::InvalidDuration { reason, .. } => write!(f, "{}", reason),
            IssueKind::UnorderedTriple(t) => write!(
                f,
                "estimates out of order: low {} / mid {} / high {} \u{b5}s",
                t.low, t.mid, t.high
            ),
        }
    }
}

/// A problem found on one transcript line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineIssue {
    /// 1-based line number in the transcript.
    pub line: usize,
    /// Benchmark key, empty when it could not be determined.
    pub key: String,
    /// What went wrong.
    pub kind: IssueKind,
}

impl fmt::Display for LineIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            write!(f, "line {}: {}", self.line, self.kind)
        } else {
            write!(f, "line {} ({}): {}", self.line, self.key, self.kind)
        }
    }
}

/// Outcome of scanning a transcript.
#[derive(Debug, Clone, Default)]
pub struct ParsedTranscript {
    /// Stored records.
    pub results: ResultSet,
    /// Problems encountered, in line order.
    pub issues: Vec<LineIssue>,
}

impl ParsedTranscript {
    /// Whether any issue was recorded.
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Returns every duration literal in `text`, in order of appearance.
pub fn duration_tokens(text: &str) -> Vec<&str> {
    DURATION_TOKEN
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .collect()
}

/// Scans a transcript.
///
/// Repeated keys overwrite earlier ones.
///
/// # Example
///
/// ```
/// use benchdigest_core::transcript::{parse_transcript, ParseMode};
///
/// let text = "suite/json_auto/1  time:   [1.0 ms 1.2 ms 1.4 ms]\n\
///             suite/json_streaming/1  time:   [1.0 ms]\n";
/// let parsed = parse_transcript(text, ParseMode::Lenient);
/// assert_eq!(parsed.results.get("suite/json_auto/1"), Some(1_200.0));
/// assert_eq!(parsed.issues.len(), 1);
/// ```
pub fn parse_transcript(text: &str, mode: ParseMode) -> ParsedTranscript {
    let mut parsed = ParsedTranscript::default();
    let mut pending_name: Option<&str> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;

        let Some((head, tail)) = line.split_once(TIME_MARKER) else {
            pending_name = is_wrapped_name(line).then_some(line);
            continue;
        };

        let key = match head.trim() {
            "" => match pending_name.take() {
                Some(name) => name,
                None => {
                    tracing::debug!(line = line_no, "candidate line without a benchmark name");
                    parsed.issues.push(LineIssue {
                        line: line_no,
                        key: String::new(),
                        kind: IssueKind::MissingKey,
                    });
                    continue;
                }
            },
            named => {
                pending_name = None;
                named
            }
        };

        if let Some(triple) = scan_estimates(key, tail, line_no, mode, &mut parsed.issues) {
            tracing::trace!(key, mid = triple.mid, "stored benchmark record");
            parsed.results.insert(key.to_string(), triple);
        }
    }

    parsed
}

/// Whether a line without the marker can be a wrapped benchmark name.
///
/// Criterion prints the bare id on its own line; status and outlier lines
/// contain whitespace.
fn is_wrapped_name(line: &str) -> bool {
    !line.contains(char::is_whitespace)
}

/// Extracts the triple from the text after the marker.
fn scan_estimates(
    key: &str,
    tail: &str,
    line_no: usize,
    mode: ParseMode,
    issues: &mut Vec<LineIssue>,
) -> Option<BenchmarkTriple> {
    let tokens = duration_tokens(tail);
    if tokens.len() < 3 {
        tracing::debug!(line = line_no, key, found = tokens.len(), "discarding malformed line");
        issues.push(LineIssue {
            line: line_no,
            key: key.to_string(),
            kind: IssueKind::MalformedLine {
                found: tokens.len(),
            },
        });
        return None;
    }
    if tokens.len() > 3 {
        tracing::debug!(line = line_no, key, found = tokens.len(), "ignoring extra estimates");
    }

    let mut values = [0.0; 3];
    let mut rejected = false;
    for (slot, literal) in values.iter_mut().zip(&tokens) {
        match parse_duration(literal) {
            Ok(micros) => *slot = micros,
            Err(err) => {
                issues.push(invalid_duration(key, line_no, literal, &err));
                rejected = true;
                *slot = parse_duration_lenient(literal);
            }
        }
    }
    if rejected && mode == ParseMode::Strict {
        return None;
    }

    let triple = BenchmarkTriple::new(values[0], values[1], values[2]);
    if !triple.is_ordered() {
        issues.push(LineIssue {
            line: line_no,
            key: key.to_string(),
            kind: IssueKind::UnorderedTriple(triple),
        });
    }
    Some(triple)
}

fn invalid_duration(key: &str, line_no: usize, literal: &str, err: &DurationError) -> LineIssue {
    LineIssue {
        line: line_no,
        key: key.to_string(),
        kind: IssueKind::InvalidDuration {
            literal: literal.to_string(),
            reason: err.to_string(),
        },
    }
}
