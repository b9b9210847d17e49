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

//! CLI command implementations

mod analyze;
mod check;
mod completion;

pub use analyze::{analyze, AnalyzeOptions};
pub use check::check;
pub use completion::generate_completion_for_command;

use crate::error::CliError;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Default maximum input size (64 MB).
/// Can be overridden via the BENCHDIGEST_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

fn get_max_file_size() -> u64 {
    std::env::var("BENCHDIGEST_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a transcript from a file, or from stdin when `path` is `-`.
///
/// Inputs larger than the configured maximum are rejected; for files the
/// size is checked before reading.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed or the file cannot be read
/// - The input exceeds the maximum size (`BENCHDIGEST_MAX_FILE_SIZE`)
/// - The input is not valid UTF-8
pub fn read_input(path: &str) -> Result<String, CliError> {
    let max_size = get_max_file_size();

    if path == STDIN_PATH {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .take(max_size + 1)
            .read_to_end(&mut buf)
            .map_err(|e| CliError::io_error("<stdin>", e))?;
        if buf.len() as u64 > max_size {
            return Err(CliError::file_too_large("<stdin>", buf.len() as u64, max_size));
        }
        return String::from_utf8(buf).map_err(|e| CliError::Io {
            path: "<stdin>".into(),
            message: e.to_string(),
        });
    }

    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_size));
    }

    tracing::debug!(path, bytes = metadata.len(), "reading transcript");
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write output to a file or stdout.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, content).map_err(|e| CliError::io_error(path, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}
