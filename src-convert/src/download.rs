//! EarFix AutoEq Converter - AutoEq archive download and extraction
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

use std::fs::File;
use std::path::{Path, PathBuf};

use tokio::fs;
use zip::ZipArchive;

use crate::AUTOEQ_ARCHIVE_URL;
use crate::error::ConvertError;

/// Download the AutoEq master archive into `temp_dir` and extract it.
///
/// Returns the extracted repository root. Any network or extraction
/// failure is fatal to the run; there is no retry.
pub async fn download_autoeq(temp_dir: &Path) -> Result<PathBuf, ConvertError> {
    println!("Downloading AutoEq database...");
    println!("  URL: {}", AUTOEQ_ARCHIVE_URL);

    let response = reqwest::get(AUTOEQ_ARCHIVE_URL).await?;
    if !response.status().is_success() {
        return Err(ConvertError::DownloadFailed(response.status()));
    }
    let bytes = response.bytes().await?;

    let zip_path = temp_dir.join("autoeq.zip");
    fs::write(&zip_path, &bytes).await?;

    println!("  Extracting...");
    let extract_dir = temp_dir.join("autoeq");
    extract_archive(&zip_path, &extract_dir)?;

    Ok(locate_extracted_root(&extract_dir)?)
}

/// Validate a user-supplied `--local` tree.
pub fn validate_local_path(path: &Path) -> Result<PathBuf, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::LocalPathNotFound(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

fn extract_archive(zip_path: &Path, extract_dir: &Path) -> Result<(), ConvertError> {
    let file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)?;
    archive.extract(extract_dir)?;
    Ok(())
}

/// The GitHub archive wraps everything in a single `AutoEq-<branch>`
/// directory; return it, or the extraction root when no such directory
/// exists.
fn locate_extracted_root(extract_dir: &Path) -> Result<PathBuf, std::io::Error> {
    for entry in std::fs::read_dir(extract_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() && entry.file_name().to_string_lossy().contains("AutoEq") {
            return Ok(entry.path());
        }
    }
    Ok(extract_dir.to_path_buf())
}
