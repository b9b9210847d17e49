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

//! Console reporter for digest reports.

use crate::duration::format_millis;
use crate::report::DigestReport;
use crate::results::ScalingRecord;
use colored::Colorize;
use std::fmt::Write;

const WIDE: usize = 80;

/// Renders the full report as terminal text.
///
/// With `colored` set, headings are bold and winners green; otherwise the
/// output is plain ASCII apart from the unit symbols.
pub fn render_console(report: &DigestReport, colored: bool) -> String {
    let mut out = String::new();
    let heading = |text: &str| -> String {
        if colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    };

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", "=".repeat(WIDE));
    let _ = writeln!(out, "{}", heading(&format!("BENCHMARK DIGEST: {}", report.title)));
    let _ = writeln!(out, "{}", "=".repeat(WIDE));
    let _ = writeln!(out, "Group: {}", report.group);
    let _ = writeln!(out, "Records: {}", report.record_count);

    if !report.notes.is_empty() {
        let _ = writeln!(out, "\nNotes:");
        for note in &report.notes {
            let _ = writeln!(out, "  - {}", note);
        }
    }

    section(&mut out, &heading("PERFORMANCE BY FILE SIZE (MB):"));
    if report.summary.is_empty() {
        let _ = writeln!(out, "No data available.");
    }
    for size in &report.summary {
        let _ = writeln!(out, "\n{}MB files:", size.size);
        for format in &size.formats {
            let _ = writeln!(out, "  {}:", format.format.to_uppercase());
            for timing in &format.timings {
                let _ = writeln!(
                    out,
                    "    {:15}: {:>11}",
                    timing.strategy,
                    format_millis(timing.micros)
                );
            }
        }
    }

    section(&mut out, &heading("BEST STRATEGY BY CATEGORY:"));
    if report.winners.is_empty() {
        let _ = writeln!(out, "No data available.");
    }
    for size in &report.winners {
        let _ = writeln!(out, "\n{}MB files:", size.size);
        for ranking in &size.winners {
            let strategy = format!("{:15}", ranking.strategy);
            let strategy = if colored {
                strategy.as_str().green().to_string()
            } else {
                strategy
            };
            let _ = writeln!(
                out,
                "  {:4}: {} ({:>11})",
                ranking.format.to_uppercase(),
                strategy,
                format_millis(ranking.micros)
            );
        }
    }

    section(&mut out, &heading("SCALABILITY:"));
    if report.scaling.is_empty() {
        let _ = writeln!(out, "No data available.");
    }
    for record in &report.scaling {
        let _ = writeln!(out, "{}", scaling_line(record));
    }

    let _ = writeln!(out, "{}", "=".repeat(WIDE));
    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", "-".repeat(WIDE));
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(WIDE));
}

/// One scalability line, e.g.
/// `CSV memory_mapped  : 500x size ->    0.9x time (efficiency: 536.31)`.
pub fn scaling_line(record: &ScalingRecord) -> String {
    let efficiency = record
        .efficiency
        .map(|e| format!("{:.2}", e))
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "{} {:15}: {:3.0}x size -> {:6.1}x time (efficiency: {})",
        record.format.to_uppercase(),
        record.strategy,
        record.size_ratio,
        record.time_ratio,
        efficiency
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;
    use crate::fixtures::SAMPLE_TRANSCRIPT;
    use crate::results::ResultSet;

    fn sample_report() -> DigestReport {
        let results = ResultSet::build(SAMPLE_TRANSCRIPT);
        DigestReport::build("Large file viewing", &results, &Dimensions::default())
    }

    #[test]
    fn test_render_plain() {
        let text = render_console(&sample_report(), false);
        assert!(text.contains("BENCHMARK DIGEST: Large file viewing"));
        assert!(text.contains("Records: 35"));
        assert!(text.contains("PERFORMANCE BY FILE SIZE (MB):"));
        assert!(text.contains("500MB files:"));
        assert!(text.contains("176.64 ms"));
        assert!(text.contains("CSV memory_mapped  : 500x size ->    0.9x time (efficiency: 536.31)"));
    }

    #[test]
    fn test_render_empty_report() {
        let report = DigestReport::build("Empty", &ResultSet::default(), &Dimensions::default());
        let text = render_console(&report, false);
        assert_eq!(text.matches("No data available.").count(), 3);
    }

    #[test]
    fn test_scaling_line_without_efficiency() {
        let record = ScalingRecord {
            format: "json".to_string(),
            strategy: "auto".to_string(),
            points: Vec::new(),
            size_ratio: 10.0,
            time_ratio: 0.0,
            efficiency: None,
        };
        assert!(scaling_line(&record).ends_with("(efficiency: n/a)"));
    }
}
