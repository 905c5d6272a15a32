//! EarFix AutoEq Converter - download and convert the AutoEq database
//!
//! Copyright (C) 2025 Pierre Aubert pierre(at)spinorama(dot)org
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Source preference ranking and the curated popular-device list
pub mod catalog;
/// Command-line interface definitions
pub mod cli;
/// Measurement file discovery and path decoding
pub mod discover;
/// AutoEq archive download and extraction
pub mod download;
/// JSON emission: per-device documents and the index
pub mod emit;
/// Fatal error taxonomy
pub mod error;
/// Per-device source selection and subset filtering
pub mod select;

// Re-export commonly used items
pub use catalog::Catalog;
pub use discover::{DeviceClass, Measurement, find_measurement_files};
pub use emit::{ConvertedDevice, Index, IndexEntry, sanitize_file_name};
pub use error::ConvertError;

/// Upstream database this converter feeds on; recorded as provenance in
/// every generated index.
pub const AUTOEQ_REPO_URL: &str = "https://github.com/jaakkopasanen/AutoEq";

/// Snapshot archive of the upstream master branch.
pub const AUTOEQ_ARCHIVE_URL: &str =
    "https://github.com/jaakkopasanen/AutoEq/archive/refs/heads/master.zip";
