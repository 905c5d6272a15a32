//! EarFix AutoEq Converter - parametric EQ data model and text parser
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
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Filter shapes found in AutoEq ParametricEQ files.
///
/// Serializes to the short token ("PK", "LS", ...) that the EarFix
/// correction engine expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterType {
    /// Low-pass filter
    #[serde(rename = "LP")]
    Lowpass,
    /// High-pass filter
    #[serde(rename = "HP")]
    Highpass,
    /// Band-pass filter
    #[serde(rename = "BP")]
    Bandpass,
    /// Peaking filter
    #[serde(rename = "PK")]
    Peak,
    /// Notch filter
    #[serde(rename = "NO")]
    Notch,
    /// Low-shelf filter
    #[serde(rename = "LS")]
    Lowshelf,
    /// High-shelf filter
    #[serde(rename = "HS")]
    Highshelf,
}

impl FilterType {
    /// Returns the short string representation of the filter type (e.g., "PK").
    pub fn short_name(&self) -> &'static str {
        match self {
            FilterType::Lowpass => "LP",
            FilterType::Highpass => "HP",
            FilterType::Bandpass => "BP",
            FilterType::Peak => "PK",
            FilterType::Notch => "NO",
            FilterType::Lowshelf => "LS",
            FilterType::Highshelf => "HS",
        }
    }

    /// Parse an AutoEq filter token.
    ///
    /// "LSC" and "HSC" are the variable-slope spellings of the shelf
    /// filters; EarFix applies the same coefficients for both, so they
    /// collapse onto the plain shelf variants. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "LP" => Some(FilterType::Lowpass),
            "HP" => Some(FilterType::Highpass),
            "BP" => Some(FilterType::Bandpass),
            "PK" => Some(FilterType::Peak),
            "NO" => Some(FilterType::Notch),
            "LS" | "LSC" => Some(FilterType::Lowshelf),
            "HS" | "HSC" => Some(FilterType::Highshelf),
            _ => None,
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// One parametric EQ band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// The filter shape
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    /// Center frequency in Hz
    pub freq: u32,
    /// Gain in dB
    pub gain: f64,
    /// Quality factor
    pub q: f64,
}

/// A complete correction profile parsed from one ParametricEQ file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqProfile {
    /// Gain offset in dB applied before all filters to avoid clipping
    pub preamp: f64,
    /// Filter bands in file order
    pub filters: Vec<Filter>,
}

static PREAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Preamp:\s*(-?\d+\.?\d*)\s*dB").expect("regex is valid"));

static FILTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Filter\s+\d+:\s+ON\s+(\w+)\s+Fc\s+(\d+)\s+Hz\s+Gain\s+(-?\d+\.?\d*)\s+dB\s+Q\s+(\d+\.?\d*)",
    )
    .expect("regex is valid")
});

/// Parse the text of an AutoEq `ParametricEQ.txt` file.
///
/// The preamp defaults to 0.0 dB when no `Preamp:` line is present.
/// Only filter lines marked `ON` match; lines with an unrecognized shape
/// token are skipped. Returns `None` when the text yields no usable
/// filter at all, never an empty profile.
pub fn parse_parametric_eq(content: &str) -> Option<EqProfile> {
    let preamp = PREAMP_RE
        .captures(content)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .unwrap_or(0.0);

    let mut filters = Vec::new();
    for caps in FILTER_RE.captures_iter(content) {
        let (Some(filter_type), Ok(freq), Ok(gain), Ok(q)) = (
            FilterType::from_token(&caps[1]),
            caps[2].parse::<u32>(),
            caps[3].parse::<f64>(),
            caps[4].parse::<f64>(),
        ) else {
            continue;
        };
        filters.push(Filter {
            filter_type,
            freq,
            gain,
            q,
        });
    }

    if filters.is_empty() {
        return None;
    }

    Some(EqProfile { preamp, filters })
}
