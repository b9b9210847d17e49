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

//! Check command - report transcript problems without building a digest

use super::read_input;
use crate::error::CliError;
use benchdigest_core::{parse_transcript, LineIssue, ParseMode};
use colored::Colorize;
use serde_json::json;

/// Scan a transcript strictly and list every problem line.
///
/// With `json`, a single JSON object with the record count and the issues
/// is printed instead of text. `color` applies to the text form only.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read, or if any issue was found.
pub fn check(input: &str, json: bool, color: bool) -> Result<(), CliError> {
    let text = read_input(input)?;
    let parsed = parse_transcript(&text, ParseMode::Strict);

    if json {
        let summary = json!({
            "input": input,
            "records": parsed.results.len(),
            "issues": parsed.issues,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_text(input, parsed.results.len(), &parsed.issues, color));
    }

    match parsed.issues.first() {
        None => Ok(()),
        Some(first) => Err(CliError::TranscriptIssues {
            count: parsed.issues.len(),
            first: first.to_string(),
        }),
    }
}

fn render_text(input: &str, records: usize, issues: &[LineIssue], color: bool) -> String {
    let marker = match (issues.is_empty(), color) {
        (true, true) => "✓".green().bold().to_string(),
        (true, false) => "✓".to_string(),
        (false, true) => "✗".red().bold().to_string(),
        (false, false) => "✗".to_string(),
    };

    if issues.is_empty() {
        return format!("{} {} ({} records)\n", marker, input, records);
    }

    let mut out = format!(
        "{} {} ({} records, {} issue(s))\n",
        marker,
        input,
        records,
        issues.len()
    );
    for issue in issues {
        out.push_str(&format!("  {}\n", issue));
    }
    out
}
