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

//! benchdigest CLI library.
//!
//! # Commands
//!
//! - **analyze**: Build a digest from a transcript file, stdin or the bundled
//!   sample, rendered as console text, JSON, Markdown or CSV
//! - **check**: List transcript lines that could not be used
//! - **completion**: Generate shell completion scripts
//!
//! # Environment
//!
//! - `BENCHDIGEST_MAX_FILE_SIZE`: input size limit in bytes (default 64 MB)
//! - `RUST_LOG`: log filter, overridden by `-v`

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

pub use error::CliError;
