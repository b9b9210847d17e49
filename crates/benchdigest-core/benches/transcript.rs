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

//! Transcript parsing and report benchmarks.

use benchdigest_core::fixtures::SAMPLE_TRANSCRIPT;
use benchdigest_core::{
    parse_duration, parse_transcript, DigestReport, Dimensions, ParseMode, ResultSet,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Repeats the sample transcript under distinct group names.
fn scaled_transcript(copies: usize) -> String {
    (0..copies)
        .map(|i| SAMPLE_TRANSCRIPT.replace("large_file_viewing", &format!("suite_{}", i)))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Duration Literals
// ============================================================================

fn bench_parse_duration(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_duration");

    for literal in ["104.67 µs", "1.9260 ms", "5 ns", "2.5 s"] {
        group.bench_function(literal, |b| b.iter(|| parse_duration(black_box(literal))));
    }

    group.finish();
}

// ============================================================================
// Transcript Scanning
// ============================================================================

fn bench_parse_transcript(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_transcript");

    for copies in [1usize, 10, 100] {
        let text = scaled_transcript(copies);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("lenient", copies), &text, |b, text| {
            b.iter(|| parse_transcript(black_box(text), ParseMode::Lenient))
        });
        group.bench_with_input(BenchmarkId::new("strict", copies), &text, |b, text| {
            b.iter(|| parse_transcript(black_box(text), ParseMode::Strict))
        });
    }

    group.finish();
}

// ============================================================================
// Report Building
// ============================================================================

fn bench_build_report(c: &mut Criterion) {
    let results = ResultSet::build(SAMPLE_TRANSCRIPT);
    let dims = Dimensions::default();

    c.bench_function("build_report", |b| {
        b.iter(|| DigestReport::build("bench", black_box(&results), black_box(&dims)))
    });
}

criterion_group!(
    benches,
    bench_parse_duration,
    bench_parse_transcript,
    bench_build_report
);
criterion_main!(benches);
