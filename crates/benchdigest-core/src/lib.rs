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

//! Benchdigest core
//!
//! Turns criterion benchmark transcripts into a structured digest: per
//! configuration timings, the fastest access strategy per (format, size)
//! and how each (format, strategy) pair scales with input size.
//!
//! ## Pipeline
//!
//! - **Durations**: literals like `1.9260 ms` normalize to microseconds
//!   ([`duration`])
//! - **Transcript**: lines carrying `time: [low mid high]` become
//!   [`BenchmarkTriple`]s keyed by benchmark name ([`transcript`])
//! - **Queries**: [`ResultSet::best_strategy`] and [`ResultSet::scaling`]
//!   over caller-supplied [`Dimensions`]
//! - **Reports**: [`DigestReport`] rendered by the [`reporters`]
//!
//! ## Usage
//!
//! ```
//! use benchdigest_core::{Dimensions, ResultSet};
//!
//! let transcript = "\
//! suite/json_auto/1     time:   [103.01 µs 104.67 µs 105.79 µs]
//! suite/json_auto/500   time:   [172.07 ms 176.64 ms 181.89 ms]
//! ";
//! let results = ResultSet::build(transcript);
//! let dims = Dimensions::default().with_group("suite");
//!
//! let best = results.best_strategy(&dims, "json", 1).unwrap();
//! assert_eq!(best.strategy, "auto");
//!
//! let scaling = results.scaling(&dims, "json", "auto").unwrap();
//! assert_eq!(scaling.size_ratio, 500.0);
//! ```

pub mod config;
pub mod duration;
pub mod error;
pub mod fixtures;
pub mod key;
pub mod report;
pub mod reporters;
pub mod results;
pub mod transcript;

pub use config::Dimensions;
pub use duration::{parse_duration, parse_duration_lenient, TimeUnit};
pub use error::{DigestError, DurationError, Result};
pub use key::ConfigKey;
pub use report::DigestReport;
pub use reporters::OutputFormat;
pub use results::{Ranking, ResultSet, ScalingPoint, ScalingRecord};
pub use transcript::{parse_transcript, BenchmarkTriple, LineIssue, ParseMode, ParsedTranscript};
