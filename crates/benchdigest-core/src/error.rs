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

//! Error types for transcript digestion.
//!
//! Missing data is never an error here: queries that find nothing return
//! `None`. [`DurationError`] reports an unparseable duration literal and
//! [`DigestError`] an unusable dimension set or a failed export.

use thiserror::Error;

/// Result type for digest operations
pub type Result<T> = std::result::Result<T, DigestError>;

/// Failure to turn a duration literal into microseconds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The literal was empty after trimming.
    #[error("empty duration literal")]
    EmptyLiteral,

    /// The unit suffix is not one of `ns`, `µs`/`us`, `ms` or `s`.
    #[error("unrecognized unit in duration literal '{literal}'")]
    UnrecognizedUnit {
        /// The offending literal
        literal: String,
    },

    /// The numeric part could not be read as a decimal number.
    #[error("invalid magnitude in duration literal '{literal}'")]
    InvalidMagnitude {
        /// The offending literal
        literal: String,
    },
}

/// Errors that can occur while digesting a transcript or rendering a report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DigestError {
    /// Invalid dimension configuration
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Serialization of a report failed.
    #[error("Export error: {0}")]
    Export(String),
}

impl DigestError {
    /// Create an invalid-configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for DigestError {
    fn from(source: serde_json::Error) -> Self {
        Self::Export(source.to_string())
    }
}

impl From<csv::Error> for DigestError {
    fn from(source: csv::Error) -> Self {
        Self::Export(source.to_string())
    }
}
