//! EarFix AutoEq Converter - fatal error taxonomy
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

use std::path::PathBuf;

/// Errors that abort a conversion run.
///
/// Per-file read and parse problems are not represented here; those are
/// reported as line items and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("local AutoEq path not found: {0}")]
    LocalPathNotFound(PathBuf),

    #[error("download failed with HTTP status {0}")]
    DownloadFailed(reqwest::StatusCode),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
