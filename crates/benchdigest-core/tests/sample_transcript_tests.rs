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

//! End-to-end checks against the sample large-file-viewing transcript.

use benchdigest_core::fixtures::{SAMPLE_RECORD_COUNT, SAMPLE_TRANSCRIPT};
use benchdigest_core::transcript::IssueKind;
use benchdigest_core::{
    parse_duration, parse_transcript, ConfigKey, DigestReport, Dimensions, ParseMode, ResultSet,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// ============================================================================
// Duration literals
// ============================================================================

#[test]
fn test_reference_durations() {
    assert_close(parse_duration("104.67 µs").unwrap(), 104.67);
    assert_close(parse_duration("1.9260 ms").unwrap(), 1926.0);
    assert_close(parse_duration("176.64 ms").unwrap(), 176_640.0);
    assert_close(parse_duration("5 ns").unwrap(), 0.005);
}

#[test]
fn test_milliseconds_are_not_seconds() {
    assert_close(parse_duration("19.532 ms").unwrap(), 19_532.0);
}

// ============================================================================
// Building the result set
// ============================================================================

#[test]
fn test_sample_builds_every_record() {
    let parsed = parse_transcript(SAMPLE_TRANSCRIPT, ParseMode::Strict);
    assert!(parsed.issues.is_empty(), "unexpected issues: {:?}", parsed.issues);
    assert_eq!(parsed.results.len(), SAMPLE_RECORD_COUNT);
}

#[test]
fn test_sample_triples_are_ordered() {
    let results = ResultSet::build(SAMPLE_TRANSCRIPT);
    for key in results.keys() {
        let triple = results.triple(key).unwrap();
        assert!(triple.is_ordered(), "{} has unordered estimates", key);
    }
}

#[test]
fn test_build_is_idempotent() {
    let first = ResultSet::build(SAMPLE_TRANSCRIPT);
    let second = ResultSet::build(SAMPLE_TRANSCRIPT);
    assert_eq!(first, second);
    assert!(first.iter().eq(second.iter()));
}

#[test]
fn test_short_line_inserts_nothing() {
    let text = format!(
        "{}\nlarge_file_viewing/json_streaming/50 time: [17.701 ms 18.115 ms]\n",
        "large_file_viewing/json_auto/50 time: [18.462 ms 19.532 ms 20.207 ms]"
    );
    let parsed = parse_transcript(&text, ParseMode::Lenient);
    assert_eq!(parsed.results.len(), 1);
    assert_eq!(parsed.results.get("large_file_viewing/json_streaming/50"), None);
    assert_eq!(parsed.issues[0].line, 2);
    assert_eq!(parsed.issues[0].kind, IssueKind::MalformedLine { found: 2 });
}

#[test]
fn test_headers_and_noise_are_ignored() {
    let text = format!(
        "Benchmarking large_file_viewing/json_auto/1: Warming up for 3.0000 s\n\
         Gnuplot not found, using plotters backend\n{}\n\
         Found 4 outliers among 100 measurements (4.00%)\n",
        SAMPLE_TRANSCRIPT
    );
    let parsed = parse_transcript(&text, ParseMode::Strict);
    assert!(parsed.issues.is_empty());
    assert_eq!(parsed.results, ResultSet::build(SAMPLE_TRANSCRIPT));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_best_strategy_json_1mb() {
    let results = ResultSet::build(SAMPLE_TRANSCRIPT);
    let best = results
        .best_strategy(&Dimensions::default(), "json", 1)
        .unwrap();
    assert_eq!(best.variant(), "json_auto");
    assert_close(best.micros, 104.67);
}

#[test]
fn test_best_strategy_json_50mb_prefers_streaming() {
    let results = ResultSet::build(SAMPLE_TRANSCRIPT);
    let best = results
        .best_strategy(&Dimensions::default(), "json", 50)
        .unwrap();
    assert_eq!(best.strategy, "streaming");
    assert_close(best.micros, 18_115.0);
}

#[test]
fn test_best_strategy_missing_size() {
    let results = ResultSet::build(SAMPLE_TRANSCRIPT);
    let dims = Dimensions::default().with_sizes([1, 1000]);
    assert!(results.best_strategy(&dims, "csv", 1000).is_none());
}

#[test]
fn test_scaling_csv_memory_mapped() {
    let results = ResultSet::build(SAMPLE_TRANSCRIPT);
    let record = results
        .scaling(&Dimensions::default(), "csv", "memory_mapped")
        .unwrap();

    assert_eq!(record.first().unwrap().size, 1);
    assert_eq!(record.last().unwrap().size, 500);
    assert_eq!(record.points.len(), 5);
    assert_close(record.size_ratio, 500.0);
    assert_close(record.time_ratio, 60.100 / 64.464);
    assert_close(record.efficiency.unwrap(), 500.0 / (60.100 / 64.464));
}

#[test]
fn test_scaling_absent_for_unmeasured_strategy() {
    let results = ResultSet::build(SAMPLE_TRANSCRIPT);
    assert!(results
        .scaling(&Dimensions::default(), "csv", "streaming")
        .is_none());
}

#[test]
fn test_scaling_single_size_absent() {
    let results = ResultSet::build(
        "large_file_viewing/text_streaming/10 time: [1 ms 2 ms 3 ms]\n",
    );
    assert!(results
        .scaling(&Dimensions::default(), "text", "streaming")
        .is_none());
}

#[test]
fn test_scaling_endpoints_skip_missing_sizes() {
    let text = "\
        large_file_viewing/json_auto/10  time: [1 ms 2 ms 3 ms]\n\
        large_file_viewing/json_auto/100 time: [3 ms 4 ms 5 ms]\n";
    let results = ResultSet::build(text);
    let record = results
        .scaling(&Dimensions::default(), "json", "auto")
        .unwrap();
    assert_eq!(record.first().unwrap().size, 10);
    assert_eq!(record.last().unwrap().size, 100);
    assert_close(record.size_ratio, 10.0);
    assert_close(record.time_ratio, 2.0);
    assert_close(record.efficiency.unwrap(), 5.0);
}

#[test]
fn test_key_decomposition_with_underscored_strategy() {
    let key = ConfigKey::parse(
        "large_file_viewing/memory_mapped/csv_memory_mapped/500",
        Dimensions::default().formats(),
    )
    .unwrap();
    assert_eq!(key.format, "csv");
    assert_eq!(key.strategy, "memory_mapped");
    assert_eq!(key.size, 500);
}

#[test]
fn test_custom_dimensions() {
    let text = "\
        parse/yaml_serde/1   time: [10 µs 11 µs 12 µs]\n\
        parse/yaml_manual/1  time: [8 µs 9 µs 10 µs]\n\
        parse/yaml_serde/8   time: [80 µs 88 µs 96 µs]\n";
    let dims = Dimensions::default()
        .with_group("parse")
        .with_sizes([1, 8])
        .with_formats(["yaml"])
        .with_strategies(["serde", "manual"]);
    let results = ResultSet::build(text);

    let best = results.best_strategy(&dims, "yaml", 1).unwrap();
    assert_eq!(best.strategy, "manual");

    let record = results.scaling(&dims, "yaml", "serde").unwrap();
    assert_close(record.efficiency.unwrap(), 1.0);
}

#[test]
fn test_report_over_sample() {
    let results = ResultSet::build(SAMPLE_TRANSCRIPT);
    let report = DigestReport::build("Sample", &results, &Dimensions::default());
    assert_eq!(report.record_count, SAMPLE_RECORD_COUNT);
    assert_eq!(report.summary.len(), 5);
    assert_eq!(report.winners.len(), 5);
    assert_eq!(report.scaling.len(), 7);
}
