//! EarFix AutoEq Converter - command-line entry point
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
use std::process;

use clap::Parser;
use tempfile::TempDir;
use tokio::fs;

use earfix_convert::catalog::Catalog;
use earfix_convert::cli::Args;
use earfix_convert::{discover, download, emit, select};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let catalog = Catalog::default();

    let output_dir = args.output_dir();
    fs::create_dir_all(&output_dir).await?;

    println!("EarFix AutoEq Converter");
    println!("=======================");
    println!("Output directory: {}", output_dir.display());

    // Acquire the source tree. The scratch dir keeps a download alive
    // until the run finishes; it is removed on drop.
    let mut scratch: Option<TempDir> = None;
    let autoeq_root = match &args.local {
        Some(path) => match download::validate_local_path(path) {
            Ok(root) => root,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => {
            let dir = tempfile::tempdir()?;
            let root = match download::download_autoeq(dir.path()).await {
                Ok(root) => root,
                Err(e) => {
                    eprintln!("Failed to download AutoEq: {}", e);
                    process::exit(1);
                }
            };
            scratch = Some(dir);
            root
        }
    };

    println!("\nScanning for headphone measurements...");
    let all_measurements = discover::find_measurement_files(&autoeq_root);
    println!("  Found {} measurement files", all_measurements.len());

    let groups = select::group_by_name(all_measurements);
    println!("  {} unique headphone models", groups.len());

    let mut selected = select::select_best_source(groups, &catalog);

    if args.popular_only {
        selected = select::filter_popular(selected, &catalog);
        println!("  Filtered to {} popular headphones", selected.len());
    } else if let Some(n) = args.top {
        selected = select::filter_top(selected, &catalog, n);
        println!("  Limited to top {} headphones", selected.len());
    }

    if args.list {
        println!("\nAvailable headphones:");
        for (name, measurement) in &selected {
            println!(
                "  - {} ({}, {})",
                name, measurement.class, measurement.source
            );
        }
        return Ok(());
    }

    println!("\nConverting {} headphones...", selected.len());
    let mut converted = Vec::new();
    for (name, measurement) in &selected {
        match emit::convert_device(measurement, &output_dir).await {
            Some(_) => {
                converted.push(measurement.clone());
                println!("  + {}", name);
            }
            None => println!("  - {} (failed)", name),
        }
    }

    emit::write_index(&output_dir, &converted).await?;

    drop(scratch);

    println!(
        "\nDone! Converted {} headphones to {}",
        converted.len(),
        output_dir.display()
    );
    println!("EarFix will automatically detect these files on next load.");

    Ok(())
}
