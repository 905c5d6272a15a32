//! EarFix AutoEq Converter - JSON emission
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

use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::Local;
use earfix_peq::Filter;
use serde::Serialize;
use tokio::fs;

use crate::AUTOEQ_REPO_URL;
use crate::discover::{DeviceClass, Measurement};

/// Per-device JSON document consumed by EarFix.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedDevice {
    pub name: String,
    pub source: String,
    #[serde(rename = "type")]
    pub class: DeviceClass,
    pub preamp: f64,
    pub filters: Vec<Filter>,
}

/// One entry of `index.json`.
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    pub name: String,
    pub file: String,
    #[serde(rename = "type")]
    pub class: DeviceClass,
    pub source: String,
}

/// The `index.json` document EarFix loads at startup.
#[derive(Debug, Clone, Serialize)]
pub struct Index {
    /// Generation date, YYYY-MM-DD
    pub version: String,
    /// Provenance URL of the converted database
    pub source: String,
    pub count: usize,
    pub headphones: Vec<IndexEntry>,
}

/// Replace filesystem-unsafe characters in a device name with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .collect()
}

fn device_file_name(name: &str) -> String {
    format!("{}.json", sanitize_file_name(name))
}

/// Convert one selected measurement: parse its EQ text and write the
/// per-device JSON document, overwriting any previous file of the same
/// name.
///
/// Returns the written file name, or `None` when the file is unreadable
/// or holds no usable data; either way the problem is reported and the
/// run continues.
pub async fn convert_device(measurement: &Measurement, output_dir: &Path) -> Option<String> {
    let content = match fs::read_to_string(&measurement.path).await {
        Ok(content) => content,
        Err(e) => {
            eprintln!("  Error reading {}: {}", measurement.path.display(), e);
            return None;
        }
    };

    let profile = earfix_peq::parse_parametric_eq(&content)?;

    let device = ConvertedDevice {
        name: measurement.name.clone(),
        source: measurement.source.clone(),
        class: measurement.class,
        preamp: profile.preamp,
        filters: profile.filters,
    };

    let file_name = device_file_name(&measurement.name);
    let data = match serde_json::to_vec_pretty(&device) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("  Error serializing {}: {}", measurement.name, e);
            return None;
        }
    };
    if let Err(e) = fs::write(output_dir.join(&file_name), data).await {
        eprintln!("  Error writing {}: {}", file_name, e);
        return None;
    }

    Some(file_name)
}

/// Write `index.json` summarizing all converted devices, sorted by
/// (device class, name).
pub async fn write_index(
    output_dir: &Path,
    converted: &[Measurement],
) -> Result<PathBuf, Box<dyn Error>> {
    let mut sorted: Vec<&Measurement> = converted.iter().collect();
    sorted.sort_by(|a, b| {
        (a.class.as_str(), a.name.as_str()).cmp(&(b.class.as_str(), b.name.as_str()))
    });

    let headphones = sorted
        .iter()
        .map(|m| IndexEntry {
            name: m.name.clone(),
            file: device_file_name(&m.name),
            class: m.class,
            source: m.source.clone(),
        })
        .collect();

    let index = Index {
        version: Local::now().format("%Y-%m-%d").to_string(),
        source: AUTOEQ_REPO_URL.to_string(),
        count: converted.len(),
        headphones,
    };

    let path = output_dir.join("index.json");
    let data = serde_json::to_vec_pretty(&index)?;
    fs::write(&path, data).await?;

    println!("\nCreated index with {} headphones", converted.len());
    Ok(path)
}
