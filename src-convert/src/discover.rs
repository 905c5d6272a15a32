//! EarFix AutoEq Converter - measurement file discovery
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

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

/// Filename suffix that marks a parametric EQ measurement file.
pub const EQ_FILE_SUFFIX: &str = "ParametricEQ.txt";

const NAME_TRAILER: &str = " ParametricEQ";

/// Physical form factor of a measured device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceClass {
    #[serde(rename = "over-ear")]
    OverEar,
    #[serde(rename = "in-ear")]
    InEar,
    #[serde(rename = "earbud")]
    Earbud,
    #[serde(rename = "unknown")]
    Unknown,
}

impl DeviceClass {
    /// Label used in the generated JSON and for index ordering.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::OverEar => "over-ear",
            DeviceClass::InEar => "in-ear",
            DeviceClass::Earbud => "earbud",
            DeviceClass::Unknown => "unknown",
        }
    }

    /// Decode a path segment; anything but the three known form factors
    /// maps to `Unknown`.
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "over-ear" => DeviceClass::OverEar,
            "in-ear" => DeviceClass::InEar,
            "earbud" => DeviceClass::Earbud,
            _ => DeviceClass::Unknown,
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One candidate measurement of one device, as found on disk. Several
/// may exist per device name, one per measurement source.
#[derive(Debug, Clone)]
pub struct Measurement {
    /// Device display name
    pub name: String,
    /// Measurement lab / method that produced the file
    pub source: String,
    /// Device form factor
    pub class: DeviceClass,
    /// The measurement file itself
    pub path: PathBuf,
}

/// Decode (source, device class, name) from a measurement file path
/// relative to the `results` root.
///
/// The upstream tree nests either `source/class/file` or
/// `source/sub-source/class/file` depending on the source; in the second
/// shape the source label is the first two segments joined with `/`.
/// Shallower paths are skipped and extra depth beyond the fourth segment
/// is ignored, both matching the upstream converter.
pub fn decode_measurement_path(rel_path: &Path) -> Option<(String, DeviceClass, String)> {
    let parts: Vec<&str> = rel_path.iter().map(|s| s.to_str()).collect::<Option<_>>()?;
    if parts.len() < 3 {
        return None;
    }

    let (source, class) = if parts.len() >= 4 {
        (
            format!("{}/{}", parts[0], parts[1]),
            DeviceClass::from_segment(parts[2]),
        )
    } else {
        (parts[0].to_string(), DeviceClass::from_segment(parts[1]))
    };

    let stem = rel_path.file_stem()?.to_str()?;
    let name = stem.strip_suffix(NAME_TRAILER).unwrap_or(stem).to_string();

    Some((source, class, name))
}

/// Find every `*ParametricEQ.txt` file under `<root>/results`.
///
/// Results are sorted by path so that later per-device selection is
/// deterministic across platforms and filesystems.
pub fn find_measurement_files(autoeq_root: &Path) -> Vec<Measurement> {
    let results_root = autoeq_root.join("results");
    if !results_root.exists() {
        eprintln!(
            "Error: results directory not found at {}",
            results_root.display()
        );
        return Vec::new();
    }

    let mut found: Vec<Measurement> = WalkDir::new(&results_root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.file_name().to_string_lossy().ends_with(EQ_FILE_SUFFIX)
        })
        .filter_map(|entry| {
            let rel = entry.path().strip_prefix(&results_root).ok()?;
            let (source, class, name) = decode_measurement_path(rel)?;
            Some(Measurement {
                name,
                source,
                class,
                path: entry.into_path(),
            })
        })
        .collect();

    found.sort_by(|a, b| a.path.cmp(&b.path));
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_three_segment_path() {
        let rel = Path::new("oratory1990/over-ear/Sennheiser HD 650 ParametricEQ.txt");
        let (source, class, name) = decode_measurement_path(rel).unwrap();
        assert_eq!(source, "oratory1990");
        assert_eq!(class, DeviceClass::OverEar);
        assert_eq!(name, "Sennheiser HD 650");
    }

    #[test]
    fn decodes_four_segment_path_with_sub_source() {
        let rel = Path::new("crinacle/GRAS 43AG-7/in-ear/Moondrop Aria ParametricEQ.txt");
        let (source, class, name) = decode_measurement_path(rel).unwrap();
        assert_eq!(source, "crinacle/GRAS 43AG-7");
        assert_eq!(class, DeviceClass::InEar);
        assert_eq!(name, "Moondrop Aria");
    }

    #[test]
    fn extra_depth_is_ignored() {
        let rel = Path::new("lab/rig/over-ear/extra/Foo ParametricEQ.txt");
        let (source, class, name) = decode_measurement_path(rel).unwrap();
        assert_eq!(source, "lab/rig");
        assert_eq!(class, DeviceClass::OverEar);
        assert_eq!(name, "Foo");
    }

    #[test]
    fn shallow_paths_are_skipped() {
        assert!(decode_measurement_path(Path::new("Foo ParametricEQ.txt")).is_none());
        assert!(decode_measurement_path(Path::new("lab/Foo ParametricEQ.txt")).is_none());
    }

    #[test]
    fn unrecognized_class_segment_maps_to_unknown() {
        let rel = Path::new("lab/on-head/Foo ParametricEQ.txt");
        let (_, class, _) = decode_measurement_path(rel).unwrap();
        assert_eq!(class, DeviceClass::Unknown);
    }

    #[test]
    fn walks_results_tree_sorted_by_path() {
        let tmp = tempfile::tempdir().unwrap();
        let results = tmp.path().join("results");
        for rel in [
            "rtings/over-ear/Zeta ParametricEQ.txt",
            "oratory1990/over-ear/Alpha ParametricEQ.txt",
            "oratory1990/over-ear/Alpha GraphicEQ.txt",
        ] {
            let path = results.join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "Preamp: 0.0 dB\n").unwrap();
        }

        let found = find_measurement_files(tmp.path());
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "Alpha");
        assert_eq!(found[0].source, "oratory1990");
        assert_eq!(found[1].name, "Zeta");
    }

    #[test]
    fn missing_results_directory_yields_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(find_measurement_files(tmp.path()).is_empty());
    }
}
