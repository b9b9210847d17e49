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

//! Analyze command - digest a benchmark transcript into a report

use super::{read_input, write_output};
use crate::error::CliError;
use benchdigest_core::fixtures::SAMPLE_TRANSCRIPT;
use benchdigest_core::reporters::{render_console, render_markdown, to_json_string, write_csv};
use benchdigest_core::{
    parse_transcript, DigestError, DigestReport, Dimensions, OutputFormat, ParseMode, ResultSet,
};
use std::path::PathBuf;

/// Default report title.
pub const DEFAULT_TITLE: &str = "Large File Benchmark Analysis";

/// Options for [`analyze`].
///
/// `None` fields fall back to [`Dimensions::default`], or to the inferred
/// dimensions when `infer` is set.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Transcript path, `-` for stdin. Ignored when `sample` is set.
    pub input: Option<String>,
    /// Analyze the bundled sample transcript.
    pub sample: bool,
    /// Report title.
    pub title: Option<String>,
    /// Benchmark group override.
    pub group: Option<String>,
    /// Size list override.
    pub sizes: Option<Vec<u64>>,
    /// Format list override.
    pub formats: Option<Vec<String>>,
    /// Strategy list override.
    pub strategies: Option<Vec<String>>,
    /// Derive group, sizes and strategies from the transcript.
    pub infer: bool,
    /// Fail on any transcript issue.
    pub strict: bool,
    /// Output format.
    pub output_format: OutputFormat,
    /// Output file, stdout when `None`.
    pub output: Option<PathBuf>,
    /// Colorize console output.
    pub color: bool,
}

/// Parse a transcript and print its digest.
///
/// In strict mode any transcript issue aborts the command. Otherwise
/// problem lines are skipped and counted in a report note.
///
/// # Errors
///
/// Returns `Err` if:
/// - The input cannot be read
/// - Strict mode is on and the transcript has issues
/// - The dimensions are invalid, or cannot be inferred
/// - Rendering or writing the report fails
pub fn analyze(opts: &AnalyzeOptions) -> Result<(), CliError> {
    let text = if opts.sample {
        SAMPLE_TRANSCRIPT.to_string()
    } else {
        let input = opts
            .input
            .as_deref()
            .ok_or_else(|| CliError::invalid_input("no transcript given; pass a path, '-' or --sample"))?;
        read_input(input)?
    };

    let mode = if opts.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let parsed = parse_transcript(&text, mode);

    for issue in &parsed.issues {
        tracing::info!(%issue, "transcript issue");
    }
    if opts.strict {
        if let Some(first) = parsed.issues.first() {
            return Err(CliError::TranscriptIssues {
                count: parsed.issues.len(),
                first: first.to_string(),
            });
        }
    }
    if parsed.results.is_empty() {
        tracing::warn!("no benchmark records found in transcript");
    }

    let dims = resolve_dimensions(opts, &parsed.results)?;
    tracing::debug!(?dims, "resolved report dimensions");

    let title = opts.title.as_deref().unwrap_or(DEFAULT_TITLE);
    let mut report = DigestReport::build(title, &parsed.results, &dims);
    if let Some(hint) = empty_report_hint(&parsed.results, &report) {
        tracing::warn!("{}", hint);
        report.add_note(hint);
    }
    if parsed.has_issues() {
        report.add_note(format!(
            "{} transcript line(s) had issues; run `benchdigest check` for details",
            parsed.issues.len()
        ));
    }

    let rendered = match opts.output_format {
        OutputFormat::Console => render_console(&report, opts.color && opts.output.is_none()),
        OutputFormat::Json => {
            let mut json = to_json_string(&report)?;
            json.push('\n');
            json
        }
        OutputFormat::Markdown => render_markdown(&report),
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(&report, &mut buf)?;
            String::from_utf8(buf).map_err(|e| DigestError::Export(e.to_string()))?
        }
    };

    write_output(&rendered, opts.output.as_deref())
}

/// Hint for a transcript whose records all fall outside the report dimensions.
fn empty_report_hint(results: &ResultSet, report: &DigestReport) -> Option<String> {
    (!results.is_empty() && report.is_empty()).then(|| {
        format!(
            "none of the {} record(s) matched group '{}'; try --group or --infer",
            results.len(),
            report.group
        )
    })
}

/// Resolve dimensions from defaults, inference and explicit overrides.
fn resolve_dimensions(
    opts: &AnalyzeOptions,
    results: &ResultSet,
) -> Result<Dimensions, CliError> {
    let mut dims = match &opts.formats {
        Some(formats) => Dimensions::default().with_formats(formats.iter().cloned()),
        None => Dimensions::default(),
    };

    if opts.infer {
        dims = Dimensions::infer(results, dims.formats())?;
    }
    if let Some(group) = &opts.group {
        dims = dims.with_group(group.clone());
    }
    if let Some(sizes) = &opts.sizes {
        dims = dims.with_sizes(sizes.iter().copied());
    }
    if let Some(strategies) = &opts.strategies {
        dims = dims.with_strategies(strategies.iter().cloned());
    }

    dims.validate()?;
    Ok(dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_defaults() {
        let dims = resolve_dimensions(&AnalyzeOptions::default(), &ResultSet::default()).unwrap();
        assert_eq!(dims, Dimensions::default());
    }

    #[test]
    fn test_resolve_overrides() {
        let opts = AnalyzeOptions {
            group: Some("suite".to_string()),
            sizes: Some(vec![10, 1]),
            strategies: Some(vec!["fast".to_string()]),
            ..AnalyzeOptions::default()
        };
        let dims = resolve_dimensions(&opts, &ResultSet::default()).unwrap();
        assert_eq!(dims.group(), "suite");
        assert_eq!(dims.sizes(), &[1, 10]);
        assert_eq!(dims.strategies(), &["fast"]);
    }

    #[test]
    fn test_resolve_infer() {
        let results = ResultSet::build("bench/csv_mmap/4 time: [1 ms 2 ms 3 ms]\n");
        let opts = AnalyzeOptions {
            infer: true,
            ..AnalyzeOptions::default()
        };
        let dims = resolve_dimensions(&opts, &results).unwrap();
        assert_eq!(dims.group(), "bench");
        assert_eq!(dims.sizes(), &[4]);
        assert_eq!(dims.formats(), &["csv"]);
        assert_eq!(dims.strategies(), &["mmap"]);
    }

    #[test]
    fn test_resolve_rejects_zero_size() {
        let opts = AnalyzeOptions {
            sizes: Some(vec![0]),
            ..AnalyzeOptions::default()
        };
        assert!(matches!(
            resolve_dimensions(&opts, &ResultSet::default()),
            Err(CliError::Digest(DigestError::InvalidConfig { .. }))
        ));
    }

    #[test]
    fn test_analyze_sample_to_json_file() {
        let out = NamedTempFile::new().unwrap();
        let opts = AnalyzeOptions {
            sample: true,
            output_format: OutputFormat::Json,
            output: Some(out.path().to_path_buf()),
            ..AnalyzeOptions::default()
        };
        analyze(&opts).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.path()).unwrap()).unwrap();
        assert_eq!(value["record_count"], 35);
        assert_eq!(value["title"], DEFAULT_TITLE);
    }

    #[test]
    fn test_analyze_strict_fails_on_issue() {
        let input = NamedTempFile::new().unwrap();
        fs::write(input.path(), "g/json_auto/1 time: [1 ms]\n").unwrap();
        let opts = AnalyzeOptions {
            input: Some(input.path().to_str().unwrap().to_string()),
            strict: true,
            ..AnalyzeOptions::default()
        };
        assert!(matches!(
            analyze(&opts),
            Err(CliError::TranscriptIssues { count: 1, .. })
        ));
    }

    #[test]
    fn test_hint_when_group_does_not_match() {
        let results = ResultSet::build(
            "suite/json_auto/1 time: [1 ms 2 ms 3 ms]\nsuite/json_auto/10 time: [4 ms 5 ms 6 ms]\n",
        );
        let report = DigestReport::build("t", &results, &Dimensions::default());
        let hint = empty_report_hint(&results, &report).unwrap();
        assert!(hint.contains("2 record(s)"));
        assert!(hint.contains("large_file_viewing"));

        let dims = Dimensions::default().with_group("suite");
        let report = DigestReport::build("t", &results, &dims);
        assert_eq!(empty_report_hint(&results, &report), None);
    }

    #[test]
    fn test_no_hint_for_empty_transcript() {
        let results = ResultSet::default();
        let report = DigestReport::build("t", &results, &Dimensions::default());
        assert_eq!(empty_report_hint(&results, &report), None);
    }

    #[test]
    fn test_analyze_without_input() {
        assert!(matches!(
            analyze(&AnalyzeOptions::default()),
            Err(CliError::InvalidInput(_))
        ));
    }
}
