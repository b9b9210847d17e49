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

//! CSV export: one row per measured configuration.

use crate::error::Result;
use crate::report::DigestReport;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct TimingRow<'a> {
    group: &'a str,
    size_mb: u64,
    format: &'a str,
    strategy: &'a str,
    micros: f64,
    best: bool,
}

/// Writes the timing summary as CSV with a header row.
///
/// The `best` column marks the fastest strategy of each (size, format).
pub fn write_csv<W: Write>(report: &DigestReport, writer: W) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);

    for size in &report.summary {
        let winners = report.winners.iter().find(|w| w.size == size.size);
        for format in &size.formats {
            let best = winners
                .and_then(|w| w.winners.iter().find(|r| r.format == format.format))
                .map(|r| r.strategy.as_str());
            for timing in &format.timings {
                wtr.serialize(TimingRow {
                    group: &report.group,
                    size_mb: size.size,
                    format: &format.format,
                    strategy: &timing.strategy,
                    micros: timing.micros,
                    best: best == Some(timing.strategy.as_str()),
                })?;
            }
        }
    }

    wtr.flush()
        .map_err(|e| crate::error::DigestError::Export(e.to_string()))?;
    Ok(())
}
