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

//! Structured error types for the benchdigest CLI.
//!
//! All commands return `Result<(), CliError>`; `main` prints the error and
//! exits with a failure code.

use benchdigest_core::DigestError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input exceeds the configured size limit.
    #[error("Input '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The input that exceeded the limit
        path: PathBuf,
        /// The actual size in bytes
        actual: u64,
        /// The maximum allowed size in bytes
        max: u64,
        /// The maximum allowed size in MB (for display)
        max_mb: u64,
    },

    /// Error raised by the digest library.
    #[error(transparent)]
    Digest(#[from] DigestError),

    /// The transcript contained problem lines and strict handling was requested.
    #[error("{count} transcript line(s) with issues; first: {first}")]
    TranscriptIssues {
        /// Number of issues
        count: usize,
        /// The first issue, formatted
        first: String,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::Digest(DigestError::from(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "bench.txt",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("bench.txt"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.txt", 200_000_000, 64 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.txt"));
        assert!(msg.contains("200000000 bytes"));
        assert!(msg.contains("64 MB"));
    }

    #[test]
    fn test_digest_error_is_transparent() {
        let err: CliError = DigestError::invalid_config("sizes", "must be positive").into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration parameter 'sizes': must be positive"
        );
    }

    #[test]
    fn test_transcript_issues_display() {
        let err = CliError::TranscriptIssues {
            count: 2,
            first: "line 3: expected 3 duration estimates, found 1".to_string(),
        };
        assert!(err.to_string().starts_with("2 transcript line(s) with issues"));
    }
}
