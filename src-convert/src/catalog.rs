//! EarFix AutoEq Converter - source preferences and the curated device list
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

/// Measurement sources in order of preference. Substring match against
/// the source label decoded from a measurement path.
pub const PREFERRED_SOURCES: &[&str] = &[
    "oratory1990",
    "crinacle/GRAS 43AG-7",
    "crinacle/711 in-ear",
    "Rtings",
    "Innerfidelity",
];

/// Popular devices to prioritize, in ranking order. Names must match the
/// upstream device names exactly.
pub const POPULAR_HEADPHONES: &[&str] = &[
    // Over-ear
    "Sennheiser HD 650",
    "Sennheiser HD 600",
    "Sennheiser HD 660S",
    "Sennheiser HD 800 S",
    "Sennheiser HD 800",
    "Sennheiser HD 560S",
    "Beyerdynamic DT 770 Pro",
    "Beyerdynamic DT 880",
    "Beyerdynamic DT 990 Pro",
    "Audio-Technica ATH-M50x",
    "Audio-Technica ATH-R70x",
    "AKG K702",
    "AKG K712 Pro",
    "AKG K371",
    "Sony WH-1000XM4",
    "Sony WH-1000XM5",
    "Sony WH-1000XM3",
    "Sony MDR-7506",
    "Sony MDR-V6",
    "Apple AirPods Max",
    "Focal Clear",
    "Focal Utopia",
    "Focal Elegia",
    "HIFIMAN Sundara",
    "HIFIMAN Ananda",
    "HIFIMAN Edition XS",
    "HIFIMAN HE400se",
    "Audeze LCD-2",
    "Audeze LCD-X",
    "Philips SHP9500",
    "Philips Fidelio X2HR",
    "Bose QuietComfort 45",
    "Bose 700",
    "Meze 99 Classics",
    "Meze Audio Liric",
    "Grado SR80e",
    "Grado SR325e",
    "Dan Clark Audio Aeon 2",
    // In-ear
    "Apple AirPods Pro",
    "Apple AirPods Pro 2",
    "Sony WF-1000XM4",
    "Sony WF-1000XM5",
    "Sony IER-M9",
    "Sennheiser IE 300",
    "Sennheiser IE 600",
    "Sennheiser Momentum True Wireless 3",
    "Samsung Galaxy Buds Pro",
    "Samsung Galaxy Buds2 Pro",
    "Moondrop Blessing 2",
    "Moondrop Starfield",
    "Moondrop Aria",
    "Moondrop Kato",
    "Shure SE215",
    "Shure SE535",
    "Shure SE846",
    "Etymotic ER2XR",
    "Etymotic ER4XR",
    "7Hz Timeless",
    "7Hz Salnotes Zero",
    "Truthear Zero",
    "Truthear Hexa",
    "KZ ZS10 Pro",
    "KZ ZSN Pro X",
    "Tin HiFi T2",
    "Tin HiFi T3 Plus",
    "FiiO FH3",
    "FiiO FD5",
    "Jabra Elite 85t",
    "Jabra Elite 7 Pro",
    "Google Pixel Buds Pro",
];

/// Configuration for selection and filtering.
///
/// Carries the source preference ranking and the curated device list as
/// values so tests can substitute their own tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Source substrings in order of preference
    pub preferred_sources: Vec<String>,
    /// Curated device names in ranking order
    pub popular_devices: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            preferred_sources: PREFERRED_SOURCES.iter().map(|s| s.to_string()).collect(),
            popular_devices: POPULAR_HEADPHONES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Catalog {
    /// Position of `name` in the curated list, if curated.
    pub fn popularity_rank(&self, name: &str) -> Option<usize> {
        self.popular_devices.iter().position(|p| p == name)
    }
}
