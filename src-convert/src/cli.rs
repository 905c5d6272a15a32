//! EarFix AutoEq Converter - command-line interface definitions
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

use clap::Parser;
use std::path::PathBuf;

/// Convert the AutoEq database to the EarFix headphone format.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a local AutoEq repository instead of downloading one.
    #[arg(long)]
    pub local: Option<PathBuf>,

    /// Only convert the top N headphones (curated list first, then alphabetical).
    #[arg(long, conflicts_with = "popular_only")]
    pub top: Option<usize>,

    /// Only convert headphones on the curated popular list.
    #[arg(long, default_value_t = false)]
    pub popular_only: bool,

    /// Output directory (default: the EarFix application support directory).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List the selected headphones without writing any files.
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

impl Args {
    /// The directory output files go to: `--output` when given, else the
    /// platform's EarFix headphones directory.
    pub fn output_dir(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(default_output_dir)
    }
}

/// Platform EarFix headphones directory: `~/Library/Application
/// Support/EarFix/headphones` on macOS, `%APPDATA%\EarFix\headphones` on
/// Windows, `~/.config/EarFix/headphones` elsewhere.
pub fn default_output_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("EarFix")
        .join("headphones")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn top_conflicts_with_popular_only() {
        let result = Args::try_parse_from(["earfix-convert", "--top", "5", "--popular-only"]);
        assert!(result.is_err());
    }

    #[test]
    fn default_output_ends_with_earfix_headphones() {
        let dir = default_output_dir();
        assert!(dir.ends_with(PathBuf::from("EarFix").join("headphones")));
    }
}
