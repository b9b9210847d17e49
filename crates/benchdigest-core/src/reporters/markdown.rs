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

//! Markdown export for digest reports.

use crate::duration::format_millis;
use crate::report::DigestReport;

/// Renders a report as Markdown tables.
pub fn render_markdown(report: &DigestReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", report.title));
    md.push_str(&format!("**Group:** `{}`  \n", report.group));
    md.push_str(&format!("**Records:** {}\n\n", report.record_count));

    if !report.notes.is_empty() {
        md.push_str("## Notes\n\n");
        for note in &report.notes {
            md.push_str(&format!("- {}\n", note));
        }
        md.push('\n');
    }

    md.push_str("## Performance by File Size\n\n");
    md.push_str("| Size (MB) | Format | Strategy | Time |\n");
    md.push_str("|-----------|--------|----------|------|\n");
    for size in &report.summary {
        for format in &size.formats {
            for timing in &format.timings {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    size.size,
                    format.format,
                    timing.strategy,
                    format_millis(timing.micros)
                ));
            }
        }
    }

    md.push_str("\n## Best Strategy\n\n");
    md.push_str("| Size (MB) | Format | Strategy | Time |\n");
    md.push_str("|-----------|--------|----------|------|\n");
    for size in &report.winners {
        for ranking in &size.winners {
            md.push_str(&format!(
                "| {} | {} | **{}** | {} |\n",
                size.size,
                ranking.format,
                ranking.strategy,
                format_millis(ranking.micros)
            ));
        }
    }

    md.push_str("\n## Scalability\n\n");
    md.push_str("| Format | Strategy | Sizes | Size ratio | Time ratio | Efficiency |\n");
    md.push_str("|--------|----------|-------|------------|------------|------------|\n");
    for record in &report.scaling {
        let efficiency = record
            .efficiency
            .map(|e| format!("{:.2}", e))
            .unwrap_or_else(|| "n/a".to_string());
        let sizes = match (record.first(), record.last()) {
            (Some(first), Some(last)) => format!("{}-{}", first.size, last.size),
            _ => "-".to_string(),
        };
        md.push_str(&format!(
            "| {} | {} | {} | {:.0}x | {:.1}x | {} |\n",
            record.format,
            record.strategy,
            sizes,
            record.size_ratio,
            record.time_ratio,
            efficiency
        ));
    }

    md
}
