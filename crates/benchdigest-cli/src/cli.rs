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

//! Command-line definitions and dispatch.

use crate::commands::{self, AnalyzeOptions};
use crate::error::CliError;
use benchdigest_core::OutputFormat;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// benchdigest - criterion transcript digests
///
/// Reads the text criterion prints while benchmarking and summarizes it:
/// timings per input size, the fastest strategy per format and how each
/// strategy scales.
///
/// # Examples
///
/// ```bash
/// # Digest a saved transcript
/// benchdigest analyze bench.txt
///
/// # Pipe straight from cargo bench and write JSON
/// cargo bench 2>&1 | benchdigest analyze - --output-format json
///
/// # List problem lines
/// benchdigest check bench.txt
/// ```
#[derive(Parser)]
#[command(name = "benchdigest")]
#[command(author, version, about = "benchdigest - criterion benchmark transcript digests", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Build a digest report from a transcript
    Analyze {
        /// Transcript file, or '-' for stdin
        #[arg(value_name = "INPUT", required_unless_present = "sample")]
        input: Option<String>,

        /// Analyze the bundled sample transcript
        #[arg(long, conflicts_with = "input")]
        sample: bool,

        /// Report title
        #[arg(long)]
        title: Option<String>,

        /// Benchmark group prefix
        #[arg(short, long)]
        group: Option<String>,

        /// Input sizes in MB, comma separated
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<u64>>,

        /// File formats, comma separated
        #[arg(long, value_delimiter = ',')]
        formats: Option<Vec<String>>,

        /// Strategies in tie-break order, comma separated
        #[arg(long, value_delimiter = ',')]
        strategies: Option<Vec<String>>,

        /// Derive group, sizes and strategies from the transcript
        #[arg(long)]
        infer: bool,

        /// Fail if any transcript line has issues
        #[arg(long)]
        strict: bool,

        /// Output format (console, json, markdown, csv)
        #[arg(short = 'f', long, default_value = "console")]
        output_format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Scan a transcript and list problem lines
    Check {
        /// Transcript file, or '-' for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL", value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The input cannot be read
    /// - The transcript has issues and strict handling applies
    /// - The report dimensions are invalid
    /// - Writing the output fails
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Analyze {
                input,
                sample,
                title,
                group,
                sizes,
                formats,
                strategies,
                infer,
                strict,
                output_format,
                output,
                no_color,
            } => commands::analyze(&AnalyzeOptions {
                input,
                sample,
                title,
                group,
                sizes,
                formats,
                strategies,
                infer,
                strict,
                output_format,
                output,
                color: use_color(no_color),
            }),
            Commands::Check {
                input,
                json,
                no_color,
            } => commands::check(&input, json, use_color(no_color)),
            Commands::Completion { shell } => {
                commands::generate_completion_for_command(shell, &mut Cli::command());
                Ok(())
            }
        }
    }
}

/// Color only when writing to a terminal and not disabled.
fn use_color(no_color: bool) -> bool {
    !no_color && io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_flags() {
        let cli = Cli::try_parse_from([
            "benchdigest",
            "-vv",
            "analyze",
            "bench.txt",
            "--sizes",
            "1,10",
            "--strategies",
            "auto,streaming",
            "-f",
            "md",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Analyze {
                input,
                sizes,
                strategies,
                output_format,
                ..
            } => {
                assert_eq!(input.as_deref(), Some("bench.txt"));
                assert_eq!(sizes, Some(vec![1, 10]));
                assert_eq!(
                    strategies,
                    Some(vec!["auto".to_string(), "streaming".to_string()])
                );
                assert_eq!(output_format, OutputFormat::Markdown);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_analyze_requires_input_or_sample() {
        assert!(Cli::try_parse_from(["benchdigest", "analyze"]).is_err());
        assert!(Cli::try_parse_from(["benchdigest", "analyze", "--sample"]).is_ok());
    }

    #[test]
    fn test_rejects_unknown_output_format() {
        assert!(
            Cli::try_parse_from(["benchdigest", "analyze", "x.txt", "-f", "yaml"]).is_err()
        );
    }
}
