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

//! Sample transcript.
//!
//! Criterion output from the large-file-viewing suite: seven variants at
//! five sizes, with `json_streaming` only measured for JSON. Used by tests,
//! benches and the CLI `--sample` flag.

/// Large-file-viewing transcript, as printed by criterion.
pub const SAMPLE_TRANSCRIPT: &str = "
large_file_viewing/json_auto/1                    time:   [103.01 µs 104.67 µs 105.79 µs]
large_file_viewing/json_memory_mapped/1           time:   [110.57 µs 113.14 µs 115.95 µs]
large_file_viewing/json_streaming/1               time:   [112.33 µs 113.90 µs 116.26 µs]
large_file_viewing/csv_auto/1                     time:   [77.707 µs 79.908 µs 81.920 µs]
large_file_viewing/csv_memory_mapped/1            time:   [61.833 µs 64.464 µs 67.264 µs]
large_file_viewing/text_auto/1                    time:   [23.831 µs 24.386 µs 25.112 µs]
large_file_viewing/text_memory_mapped/1           time:   [21.916 µs 23.187 µs 24.673 µs]

large_file_viewing/json_auto/10                   time:   [1.8963 ms 1.9260 ms 1.9422 ms]
large_file_viewing/json_memory_mapped/10          time:   [1.2725 ms 1.3265 ms 1.3893 ms]
large_file_viewing/json_streaming/10              time:   [1.2590 ms 1.3358 ms 1.4111 ms]
large_file_viewing/csv_auto/10                    time:   [48.702 µs 49.193 µs 49.784 µs]
large_file_viewing/csv_memory_mapped/10           time:   [47.467 µs 48.156 µs 48.698 µs]
large_file_viewing/text_auto/10                   time:   [22.042 µs 22.286 µs 22.926 µs]
large_file_viewing/text_memory_mapped/10          time:   [21.821 µs 22.177 µs 22.563 µs]

large_file_viewing/json_auto/50                   time:   [18.462 ms 19.532 ms 20.207 ms]
large_file_viewing/json_memory_mapped/50          time:   [18.201 ms 18.504 ms 18.964 ms]
large_file_viewing/json_streaming/50              time:   [17.701 ms 18.115 ms 18.752 ms]
large_file_viewing/csv_auto/50                    time:   [47.192 µs 48.320 µs 49.160 µs]
large_file_viewing/csv_memory_mapped/50           time:   [49.005 µs 50.816 µs 53.905 µs]
large_file_viewing/text_auto/50                   time:   [47.224 µs 50.006 µs 52.975 µs]
large_file_viewing/text_memory_mapped/50          time:   [44.926 µs 46.087 µs 48.055 µs]

large_file_viewing/json_auto/100                  time:   [34.942 ms 35.691 ms 36.713 ms]
large_file_viewing/json_memory_mapped/100         time:   [35.207 ms 35.754 ms 36.465 ms]
large_file_viewing/json_streaming/100             time:   [35.184 ms 35.504 ms 35.802 ms]
large_file_viewing/csv_auto/100                   time:   [45.732 µs 46.314 µs 46.912 µs]
large_file_viewing/csv_memory_mapped/100          time:   [46.453 µs 47.214 µs 48.249 µs]
large_file_viewing/text_auto/100                  time:   [45.955 µs 47.396 µs 48.617 µs]
large_file_viewing/text_memory_mapped/100         time:   [45.990 µs 47.385 µs 49.852 µs]

large_file_viewing/json_auto/500                  time:   [172.07 ms 176.64 ms 181.89 ms]
large_file_viewing/json_memory_mapped/500         time:   [174.74 ms 176.78 ms 178.33 ms]
large_file_viewing/json_streaming/500             time:   [175.22 ms 176.80 ms 178.31 ms]
large_file_viewing/csv_auto/500                   time:   [65.323 µs 68.818 µs 71.724 µs]
large_file_viewing/csv_memory_mapped/500          time:   [59.507 µs 60.100 µs 60.724 µs]
large_file_viewing/text_auto/500                  time:   [45.124 µs 46.356 µs 47.754 µs]
large_file_viewing/text_memory_mapped/500         time:   [46.841 µs 47.170 µs 47.602 µs]
";

/// Number of records in [`SAMPLE_TRANSCRIPT`].
pub const SAMPLE_RECORD_COUNT: usize = 35;
