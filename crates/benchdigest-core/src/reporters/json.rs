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

//! JSON export for digest reports.

use crate::error::Result;
use crate::report::DigestReport;

/// Serializes a report as pretty-printed JSON.
pub fn to_json_string(report: &DigestReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;
    use crate::fixtures::SAMPLE_TRANSCRIPT;
    use crate::results::ResultSet;

    #[test]
    fn test_json_fields() {
        let results = ResultSet::build(SAMPLE_TRANSCRIPT);
        let report = DigestReport::build("Sample", &results, &Dimensions::default());

        let json = to_json_string(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Sample");
        assert_eq!(value["record_count"], 35);
        assert_eq!(value["winners"][0]["winners"][0]["strategy"], "auto");

        let back: DigestReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scaling.len(), report.scaling.len());
        assert_eq!(back.summary[4].size, 500);
    }
}
